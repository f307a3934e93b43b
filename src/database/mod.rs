use crate::database::dao::{alias, member};
use crate::database::error::DatabaseError::ConnectionFailed;
use crate::database::migrations::run_migrations;
use crate::roster::{Result, RosterStore};
use crate::tools::date::{DateFormat, expires_after_cutoff};
use crate::tools::log_message_and_return;
use chrono::NaiveDate;
use diesel::{Connection, SqliteConnection};
use dto::member_alias::MemberAlias;
use dto::member_status::MemberStatus;
use dto::roster_member::RosterMember;

mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

/// Open the SQLite database, creating it if needed, and bring its schema up to date.
pub fn open_database(database_url: &str) -> Result<SqliteConnection, error::DatabaseError> {
    let mut connection = SqliteConnection::establish(database_url).map_err(
        log_message_and_return(
            &format!("Can't open database {database_url}"),
            ConnectionFailed,
        ),
    )?;
    run_migrations(&mut connection)?;

    Ok(connection)
}

/// Roster held in the SQLite database.
pub struct SqliteRosterStore {
    connection: SqliteConnection,
    date_format: DateFormat,
}

impl SqliteRosterStore {
    pub fn new(connection: SqliteConnection, date_format: DateFormat) -> Self {
        Self {
            connection,
            date_format,
        }
    }

    pub fn open(database_url: &str, date_format: DateFormat) -> Result<Self> {
        Ok(Self::new(open_database(database_url)?, date_format))
    }

    pub fn add_alias(&mut self, num: &str, new_alias: &MemberAlias) -> Result<()> {
        Ok(alias::insert_alias(&mut self.connection, num, new_alias)?)
    }
}

impl RosterStore for SqliteRosterStore {
    fn get_by_number(&mut self, num: &str) -> Result<Option<RosterMember>> {
        Ok(member::get_by_number(&mut self.connection, num)?)
    }

    fn list_active(&mut self, expire_cutoff: NaiveDate) -> Result<Vec<RosterMember>> {
        // Dates are stored as text in the configured format, so the cutoff is applied here.
        let date_format = self.date_format;
        Ok(member::list_active(&mut self.connection)?
            .into_iter()
            .filter(|row| expires_after_cutoff(row.expired(), expire_cutoff, date_format))
            .collect())
    }

    fn list_aliases(&mut self) -> Result<Vec<(RosterMember, MemberAlias)>> {
        Ok(alias::list_aliases(&mut self.connection)?)
    }

    fn insert(&mut self, new_member: &RosterMember) -> Result<()> {
        Ok(member::insert(&mut self.connection, new_member)?)
    }

    fn update_status(&mut self, num: &str, status: &MemberStatus, expired: &str) -> Result<()> {
        Ok(member::update_status(
            &mut self.connection,
            num,
            status,
            expired,
        )?)
    }
}
