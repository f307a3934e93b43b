use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the other server failed.")]
    ConnectionFailed,
    #[error("The other server refused the credentials.")]
    Unauthorized,
    #[error("The other server answered with an unexpected status [status: {0}]")]
    UnexpectedStatus(u16),
    #[error("The response doesn't provide any readable content.")]
    CantReadPageContent,
    #[error("The response content is malformed [error: {0}]")]
    MalformedResponse(String),
    #[error("The platform reported an error [error: {0}]")]
    PlatformError(String),
}
