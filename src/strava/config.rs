use derive_getters::Getters;

pub const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
pub const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth/token";

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StravaConfiguration {
    api_url: String,
    oauth_url: String,
    club_id: String,
}

impl StravaConfiguration {
    pub fn new(api_url: String, oauth_url: String, club_id: String) -> Self {
        Self {
            api_url,
            oauth_url,
            club_id,
        }
    }
}
