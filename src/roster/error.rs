use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("The roster database failed.")]
    Database(#[from] DatabaseError),
    #[error("The roster file can't be opened.")]
    CantOpenRosterFile(std::io::Error),
    #[error("The roster file is malformed [error: {0}]")]
    MalformedRosterFile(String),
    #[error("This roster can't be modified.")]
    ReadOnlyRoster,
}

impl From<csv::Error> for RosterError {
    fn from(value: csv::Error) -> Self {
        RosterError::MalformedRosterFile(value.to_string())
    }
}
