use crate::database::error::DatabaseError::UnderlyingDatabase;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("An active member numbered {0} already exists.")]
    DuplicateMember(String),
    #[error("No active member numbered {0}.")]
    MemberNotFound(String),
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}
