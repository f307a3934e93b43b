use crate::tools::error::WebError;
use crate::tools::error::WebError::{CantReadPageContent, MalformedResponse};
use crate::tools::web::{log_request_error_and_return, send};
use derive_getters::Getters;
use dto::roster_member::RosterMember;
use reqwest::Client;
use reqwest::header::LAST_MODIFIED;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ClubExpressConfiguration {
    actives_url: String,
}

impl ClubExpressConfiguration {
    pub fn new(actives_url: String) -> Self {
        Self { actives_url }
    }
}

/// The actives feed as served: response headers and body.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RawFeed {
    headers: Vec<(String, String)>,
    body: String,
}

impl RawFeed {
    pub fn new(headers: Vec<(String, String)>, body: String) -> Self {
        Self { headers, body }
    }
}

pub async fn fetch_raw_actives(
    client: &Client,
    configuration: &ClubExpressConfiguration,
) -> Result<RawFeed, WebError> {
    let response = send(client.get(configuration.actives_url())).await?;
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.text().await.map_err(log_request_error_and_return(
        "Can't read actives feed",
        CantReadPageContent,
    ))?;

    Ok(RawFeed::new(headers, body))
}

/// Members listed in the actives feed, which the platform regenerates once a day.
/// Records that can't be read are logged and ignored.
pub async fn fetch_actives(
    client: &Client,
    configuration: &ClubExpressConfiguration,
) -> Result<Vec<RosterMember>, WebError> {
    let feed = fetch_raw_actives(client, configuration).await?;
    if let Some((_, last_modified)) = feed
        .headers()
        .iter()
        .find(|(name, _)| name.as_str() == LAST_MODIFIED.as_str())
    {
        info!("Actives feed last modified on {last_modified}");
    }

    let records: Vec<Value> = serde_json::from_str(feed.body()).map_err(|e| {
        error!("Can't deserialize actives feed\n{e:#?}");
        MalformedResponse(e.to_string())
    })?;

    let mut members = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<RosterMember>(record) {
            Ok(member) if !member.num().is_empty() => members.push(member),
            Ok(_) => warn!("Ignoring actives record #{position} without member number"),
            Err(e) => warn!("Ignoring malformed actives record #{position}: {e}"),
        }
    }
    info!("Retrieved {} active members from the feed", members.len());

    Ok(members)
}
