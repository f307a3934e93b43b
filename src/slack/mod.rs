use crate::tools::error::WebError;
use crate::tools::error::WebError::PlatformError;
use crate::tools::web::{read_json, send};
use derive_getters::Getters;
use dto::candidate::{Candidate, ChatWorkspaceUser};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SlackConfiguration {
    api_url: String,
}

impl SlackConfiguration {
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }
}

/// `users.list` answers 200 even on failure: `ok` tells whether the call succeeded.
#[derive(Debug, Deserialize)]
struct UsersListResponse {
    ok: bool,
    #[serde(default)]
    error: String,
    #[serde(default)]
    members: Vec<WorkspaceUser>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceUser {
    #[serde(default)]
    is_email_confirmed: bool,
    #[serde(default)]
    profile: Profile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Profile {
    first_name: String,
    last_name: String,
    email: String,
}

impl From<WorkspaceUser> for ChatWorkspaceUser {
    fn from(value: WorkspaceUser) -> Self {
        ChatWorkspaceUser::new(
            value.profile.first_name,
            value.profile.last_name,
            value.profile.email,
            value.is_email_confirmed,
        )
    }
}

/// Every user of the workspace, bots included, sorted by first name.
pub async fn list_workspace_users(
    client: &Client,
    configuration: &SlackConfiguration,
    token: &str,
) -> Result<Vec<Candidate>, WebError> {
    let request = client
        .get(format!("{}/users.list", configuration.api_url()))
        .bearer_auth(token);
    let response: UsersListResponse = read_json(send(request).await?).await?;

    if !response.ok {
        error!("Workspace directory refused the request: {}", response.error);
        return Err(PlatformError(response.error));
    }
    info!("Retrieved {} workspace users", response.members.len());

    let mut candidates: Vec<Candidate> = response
        .members
        .into_iter()
        .map(ChatWorkspaceUser::from)
        .map(Candidate::from)
        .collect();
    Candidate::sort_by_first_name(&mut candidates);

    Ok(candidates)
}
