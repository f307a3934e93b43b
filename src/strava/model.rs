//! Payloads of the fitness club platform API.

use dto::candidate::FitnessClubAthlete;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub(super) struct Club {
    #[serde(default)]
    pub(super) name: String,
    pub(super) member_count: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ClubAthlete {
    #[serde(default)]
    firstname: String,
    /// Only the initial, followed by a dot.
    #[serde(default)]
    lastname: String,
}

impl From<ClubAthlete> for FitnessClubAthlete {
    fn from(value: ClubAthlete) -> Self {
        FitnessClubAthlete::new(value.firstname, value.lastname)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: String,
    pub(super) refresh_token: String,
    pub(super) expires_at: i64,
}
