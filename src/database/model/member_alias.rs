use diesel::prelude::*;
use dto::member_alias::MemberAlias;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::alias)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Alias {
    first_name: String,
    last_name: String,
    email: String,
}

impl From<Alias> for MemberAlias {
    fn from(value: Alias) -> Self {
        MemberAlias::new(value.first_name, value.last_name, value.email)
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::alias)]
pub(crate) struct NewAlias<'a> {
    member_id: i32,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
}

impl<'a> NewAlias<'a> {
    pub(crate) fn new(member_id: i32, alias: &'a MemberAlias) -> Self {
        Self {
            member_id,
            first_name: alias.first_name(),
            last_name: alias.last_name(),
            email: alias.email(),
        }
    }
}
