use crate::credentials::error::CredentialsError;
use crate::credentials::error::CredentialsError::{
    CantReadCredentials, CantWriteCredentials, MalformedCredentials,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;

pub(crate) mod error;

/// Every secret needed to talk to the external platforms, stored as a single JSON document.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default, Debug)]
#[serde(default)]
pub struct Credentials {
    strava: StravaCredentials,
    slack: SlackCredentials,
    clubexpress: ClubExpressCredentials,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self, CredentialsError> {
        let content = fs::read_to_string(path).map_err(|e| {
            error!("Can't read credentials file `{}`.\n{e:#?}", path.display());
            CantReadCredentials(e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            error!("Malformed credentials file `{}`.\n{e:#?}", path.display());
            MalformedCredentials(e.to_string())
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), CredentialsError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| MalformedCredentials(e.to_string()))?;

        fs::write(path, content).map_err(|e| {
            error!("Can't write credentials file `{}`.\n{e:#?}", path.display());
            CantWriteCredentials(e)
        })
    }

    pub fn set_strava(&mut self, strava: StravaCredentials) {
        self.strava = strava;
    }
}

/// OAuth application and user tokens for the fitness club platform.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct StravaCredentials {
    client_id: u64,
    client_secret: String,
    access_token: String,
    refresh_token: String,
    /// Unix timestamp, in seconds.
    expires_at: i64,
}

impl StravaCredentials {
    pub fn new(
        client_id: u64,
        client_secret: String,
        access_token: String,
        refresh_token: String,
        expires_at: i64,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            access_token,
            refresh_token,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    /// Same application, new token set.
    pub fn refreshed(&self, access_token: String, refresh_token: String, expires_at: i64) -> Self {
        Self::new(
            self.client_id,
            self.client_secret.clone(),
            access_token,
            refresh_token,
            expires_at,
        )
    }
}

impl Debug for StravaCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Strava Credentials {{client_id={}, client_secret=MASKED, access_token=MASKED, refresh_token=MASKED, expires_at={}}}",
            self.client_id, self.expires_at
        )
    }
}

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct SlackCredentials {
    token: String,
}

impl SlackCredentials {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl Debug for SlackCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slack Credentials {{token=MASKED}}")
    }
}

/// The actives feed URL embeds its own access key.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct ClubExpressCredentials {
    actives_url: String,
}

impl ClubExpressCredentials {
    pub fn new(actives_url: String) -> Self {
        Self { actives_url }
    }
}

impl Debug for ClubExpressCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClubExpress Credentials {{actives_url=MASKED}}")
    }
}
