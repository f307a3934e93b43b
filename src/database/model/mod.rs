pub(crate) mod member;
pub(crate) mod member_alias;
