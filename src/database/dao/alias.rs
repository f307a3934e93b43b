use super::Result;
use crate::database::dao::member::get_id_by_number;
use crate::database::model::member::Member;
use crate::database::model::member_alias::{Alias, NewAlias};
use crate::database::schema::{alias, member};
use diesel::prelude::*;
use dto::member_alias::MemberAlias;
use dto::roster_member::RosterMember;

/// Every alias pointing at an active member, along with that member.
pub(crate) fn list_aliases(
    connection: &mut SqliteConnection,
) -> Result<Vec<(RosterMember, MemberAlias)>> {
    let results = alias::table
        .inner_join(member::table)
        .filter(member::active.eq(true))
        .order(alias::id)
        .select((Member::as_select(), Alias::as_select()))
        .load::<(Member, Alias)>(connection)?;

    Ok(results
        .into_iter()
        .map(|(found_member, found_alias)| {
            (RosterMember::from(found_member), MemberAlias::from(found_alias))
        })
        .collect())
}

pub(crate) fn insert_alias(
    connection: &mut SqliteConnection,
    member_num: &str,
    new_alias: &MemberAlias,
) -> Result<()> {
    let member_id = get_id_by_number(connection, member_num)?;
    diesel::insert_into(alias::table)
        .values(NewAlias::new(member_id, new_alias))
        .execute(connection)?;

    debug!("Added alias {new_alias:?} to member {member_num}");
    Ok(())
}
