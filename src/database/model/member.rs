use diesel::prelude::*;
use dto::member_status::MemberStatus;
use dto::roster_member::{ContactDetails, RosterMember};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Member {
    num: String,
    active: bool,
    login: String,
    first_name: String,
    middle: String,
    last_name: String,
    email: String,
    status: String,
    joined: String,
    expired: String,
    address: String,
    addr_ext: String,
    city: String,
    state: String,
    zip: String,
    mobile: String,
    phone: String,
}

impl From<Member> for RosterMember {
    fn from(value: Member) -> Self {
        let mut member = RosterMember::new(
            value.num,
            value.first_name,
            value.last_name,
            value.email,
            MemberStatus::from(value.status),
            value.expired,
        )
        .with_details(
            value.login,
            value.middle,
            value.joined,
            ContactDetails::new(
                value.address,
                value.addr_ext,
                value.city,
                value.state,
                value.zip,
                value.mobile,
                value.phone,
            ),
        );
        member.set_active(value.active);
        member
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::member)]
pub(crate) struct NewMember<'a> {
    num: &'a str,
    active: bool,
    login: &'a str,
    first_name: &'a str,
    middle: &'a str,
    last_name: &'a str,
    email: &'a str,
    status: &'a str,
    joined: &'a str,
    expired: &'a str,
    address: &'a str,
    addr_ext: &'a str,
    city: &'a str,
    state: &'a str,
    zip: &'a str,
    mobile: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a RosterMember> for NewMember<'a> {
    fn from(value: &'a RosterMember) -> Self {
        let contact = value.contact();
        Self {
            num: value.num(),
            active: *value.active(),
            login: value.login(),
            first_name: value.first_name(),
            middle: value.middle(),
            last_name: value.last_name(),
            email: value.email(),
            status: value.status().as_str(),
            joined: value.joined(),
            expired: value.expired(),
            address: contact.address(),
            addr_ext: contact.addr_ext(),
            city: contact.city(),
            state: contact.state(),
            zip: contact.zip(),
            mobile: contact.mobile(),
            phone: contact.phone(),
        }
    }
}
