use crate::credentials::error::CredentialsError::MissingCredentials;
use crate::credentials::{Credentials, StravaCredentials};
use crate::error::Result;
use crate::strava::config::StravaConfiguration;
use crate::strava::model::{Club, ClubAthlete, TokenResponse};
use crate::tools::error::WebError;
use crate::tools::web::{read_json, send};
use dto::candidate::{Candidate, FitnessClubAthlete};
use reqwest::Client;
use std::path::Path;

pub mod config;
mod model;

/// Access token for the club API, refreshed first if it has expired.
/// A refreshed token set is written back to the credentials file.
pub async fn valid_access_token(
    client: &Client,
    configuration: &StravaConfiguration,
    credentials: &mut Credentials,
    credentials_path: &Path,
    now: i64,
) -> Result<String> {
    let strava = credentials.strava();
    if strava.refresh_token().is_empty() && strava.access_token().is_empty() {
        return Err(MissingCredentials("strava").into());
    }
    if !strava.is_expired(now) {
        return Ok(strava.access_token().clone());
    }

    info!("Strava access token expired, refreshing it");
    let refreshed = refresh_access_token(client, configuration, strava).await?;
    let access_token = refreshed.access_token().clone();
    credentials.set_strava(refreshed);
    credentials.save(credentials_path)?;
    info!("Saved refreshed Strava credentials");

    Ok(access_token)
}

async fn refresh_access_token(
    client: &Client,
    configuration: &StravaConfiguration,
    strava: &StravaCredentials,
) -> Result<StravaCredentials, WebError> {
    let client_id = strava.client_id().to_string();
    let request = client.post(configuration.oauth_url()).form(&[
        ("client_id", client_id.as_str()),
        ("client_secret", strava.client_secret().as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", strava.refresh_token().as_str()),
    ]);
    let token: TokenResponse = read_json(send(request).await?).await?;

    Ok(strava.refreshed(token.access_token, token.refresh_token, token.expires_at))
}

/// Every athlete of the club, sorted by first name.
pub async fn list_club_athletes(
    client: &Client,
    configuration: &StravaConfiguration,
    access_token: &str,
) -> Result<Vec<Candidate>, WebError> {
    let club_url = format!(
        "{}/clubs/{}",
        configuration.api_url(),
        configuration.club_id()
    );

    let club: Club = read_json(send(client.get(&club_url).bearer_auth(access_token)).await?).await?;
    info!("Club {} has {} members", club.name, club.member_count);

    let request = client
        .get(format!("{club_url}/members"))
        .query(&[("page", "1".to_owned()), ("per_page", club.member_count.to_string())])
        .bearer_auth(access_token);
    let athletes: Vec<ClubAthlete> = read_json(send(request).await?).await?;
    info!("Retrieved {} club athletes", athletes.len());

    let mut candidates: Vec<Candidate> = athletes
        .into_iter()
        .map(FitnessClubAthlete::from)
        .map(Candidate::from)
        .collect();
    Candidate::sort_by_first_name(&mut candidates);

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::credentials;
    use crate::error::ApplicationError;
    use crate::tools::test::tests::temp_dir;
    use crate::tools::web::build_client;
    use dto::candidate::tests::athlete;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn configuration(mock_server: &MockServer) -> StravaConfiguration {
        StravaConfiguration::new(
            format!("{}/api/v3", mock_server.uri()),
            format!("{}/oauth/token", mock_server.uri()),
            "1234".to_owned(),
        )
    }

    mod list_club_athletes {
        use super::*;

        async fn mount_club(mock_server: &MockServer) {
            Mock::given(method("GET"))
                .and(path("/api/v3/clubs/1234"))
                .and(header("Authorization", "Bearer access token"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(r#"{"id": 1234, "name": "Velo Club", "member_count": 3}"#),
                )
                .mount(mock_server)
                .await;
        }

        #[tokio::test]
        async fn sorted_by_first_name() {
            let mock_server = MockServer::start().await;
            mount_club(&mock_server).await;
            Mock::given(method("GET"))
                .and(path("/api/v3/clubs/1234/members"))
                .and(query_param("page", "1"))
                .and(query_param("per_page", "3"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"[
                        {"firstname": "jonette", "lastname": "S.", "membership": "member"},
                        {"firstname": "Dave", "lastname": "S."},
                        {"firstname": "Ann", "lastname": "L."}
                    ]"#,
                ))
                .mount(&mock_server)
                .await;

            let result = list_club_athletes(
                &build_client().unwrap(),
                &configuration(&mock_server),
                "access token",
            )
            .await
            .unwrap();

            assert_eq!(
                vec![
                    athlete("Ann", "L."),
                    athlete("Dave", "S."),
                    athlete("jonette", "S."),
                ],
                result
            );
        }

        #[tokio::test]
        async fn unauthorized() {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(401))
                .mount(&mock_server)
                .await;

            let result = list_club_athletes(
                &build_client().unwrap(),
                &configuration(&mock_server),
                "access token",
            )
            .await;

            assert_eq!(Err(WebError::Unauthorized), result);
        }
    }

    mod valid_access_token {
        use super::*;

        #[tokio::test]
        async fn still_valid() {
            let mock_server = MockServer::start().await;
            let credentials_path = temp_dir().join("credentials.json");
            let mut credentials = credentials();

            let result = valid_access_token(
                &build_client().unwrap(),
                &configuration(&mock_server),
                &mut credentials,
                &credentials_path,
                1_600_000_000,
            )
            .await
            .unwrap();

            assert_eq!("access token", result);
            assert!(!credentials_path.exists());
        }

        #[tokio::test]
        async fn refresh_and_save() {
            let mock_server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/oauth/token"))
                .and(body_string_contains("grant_type=refresh_token"))
                .and(body_string_contains("refresh_token=refresh+token"))
                .and(body_string_contains("client_id=42"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"{
                        "token_type": "Bearer",
                        "access_token": "new access",
                        "expires_at": 1800000000,
                        "expires_in": 21600,
                        "refresh_token": "new refresh"
                    }"#,
                ))
                .expect(1)
                .mount(&mock_server)
                .await;
            let credentials_path = temp_dir().join("credentials.json");
            let mut credentials = credentials();

            let result = valid_access_token(
                &build_client().unwrap(),
                &configuration(&mock_server),
                &mut credentials,
                &credentials_path,
                1_750_000_000,
            )
            .await
            .unwrap();

            assert_eq!("new access", result);
            let saved = Credentials::load(&credentials_path).unwrap();
            assert_eq!(&credentials, &saved);
            assert_eq!("new refresh", saved.strava().refresh_token());
            assert_eq!(&42, saved.strava().client_id());
            assert_eq!("xoxb-token", saved.slack().token());
        }

        #[tokio::test]
        async fn refresh_rejected() {
            let mock_server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(400))
                .mount(&mock_server)
                .await;
            let credentials_path = temp_dir().join("credentials.json");
            let mut credentials = credentials();

            let result = valid_access_token(
                &build_client().unwrap(),
                &configuration(&mock_server),
                &mut credentials,
                &credentials_path,
                1_750_000_000,
            )
            .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Web(WebError::UnexpectedStatus(400)))
            ));
            assert!(!credentials_path.exists());
        }

        #[tokio::test]
        async fn no_credentials() {
            let mock_server = MockServer::start().await;
            let mut credentials = Credentials::default();

            let result = valid_access_token(
                &build_client().unwrap(),
                &configuration(&mock_server),
                &mut credentials,
                &temp_dir().join("credentials.json"),
                1_750_000_000,
            )
            .await;

            assert!(matches!(
                result,
                Err(ApplicationError::Credentials(MissingCredentials("strava")))
            ));
        }
    }
}
