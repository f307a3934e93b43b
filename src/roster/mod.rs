use crate::roster::error::RosterError;
use chrono::NaiveDate;
use dto::member_alias::MemberAlias;
use dto::member_status::MemberStatus;
use dto::roster_member::RosterMember;

pub(crate) mod csv_roster;
pub(crate) mod error;

pub type Result<T, E = RosterError> = std::result::Result<T, E>;

/// The reference store holding the club roster.
///
/// Each insert and update stands on its own: a failure on one record leaves the others untouched.
pub trait RosterStore {
    /// Active row carrying this member number, if any.
    fn get_by_number(&mut self, num: &str) -> Result<Option<RosterMember>>;

    /// Every active row expiring after the cutoff.
    /// [crate::tools::date::NO_EXPIRE_CUTOFF] disables the date filter.
    fn list_active(&mut self, expire_cutoff: NaiveDate) -> Result<Vec<RosterMember>>;

    /// Every alias, along with the active member it stands for.
    fn list_aliases(&mut self) -> Result<Vec<(RosterMember, MemberAlias)>>;

    fn insert(&mut self, member: &RosterMember) -> Result<()>;

    fn update_status(&mut self, num: &str, status: &MemberStatus, expired: &str) -> Result<()>;
}
