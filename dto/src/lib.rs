pub mod candidate;
pub mod member_alias;
pub mod member_status;
pub mod roster_member;
