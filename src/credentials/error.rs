use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("The credentials file can't be read.")]
    CantReadCredentials(std::io::Error),
    #[error("The credentials file can't be written.")]
    CantWriteCredentials(std::io::Error),
    #[error("The credentials file is malformed [error: {0}]")]
    MalformedCredentials(String),
    #[error("No {0} credentials in the credentials file.")]
    MissingCredentials(&'static str),
}
