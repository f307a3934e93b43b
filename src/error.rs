use crate::credentials::error::CredentialsError;
use crate::roster::error::RosterError;
use crate::tools::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The roster can't be read or updated.")]
    Roster(#[from] RosterError),
    #[error("An error has been encountered while executing requests onto another server.")]
    Web(#[from] WebError),
    #[error("Error while working with the credentials file.")]
    Credentials(#[from] CredentialsError),
    #[error("Can't write the report.")]
    Output(#[from] std::io::Error),
    #[error("Can't read expiration cutoff `{0}` with the configured date format.")]
    InvalidExpireCutoff(String),
}
