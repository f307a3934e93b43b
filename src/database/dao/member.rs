use super::Result;
use crate::database::error::DatabaseError::{DuplicateMember, MemberNotFound};
use crate::database::model::member::{Member, NewMember};
use crate::database::schema::member;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error};
use dto::member_status::MemberStatus;
use dto::roster_member::RosterMember;

pub(crate) fn get_by_number(
    connection: &mut SqliteConnection,
    member_num: &str,
) -> Result<Option<RosterMember>> {
    let result = member::table
        .filter(member::num.eq(member_num))
        .filter(member::active.eq(true))
        .select(Member::as_select())
        .first(connection)
        .optional()?;

    Ok(result.map(RosterMember::from))
}

/// Every active row, in insertion order.
pub(crate) fn list_active(connection: &mut SqliteConnection) -> Result<Vec<RosterMember>> {
    let results = member::table
        .filter(member::active.eq(true))
        .order(member::id)
        .select(Member::as_select())
        .load(connection)?;

    Ok(results.into_iter().map(RosterMember::from).collect())
}

pub(crate) fn insert(connection: &mut SqliteConnection, new_member: &RosterMember) -> Result<()> {
    diesel::insert_into(member::table)
        .values(NewMember::from(new_member))
        .execute(connection)
        .map_err(|e| match e {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                DuplicateMember(new_member.num().clone())
            }
            e => e.into(),
        })?;

    debug!("Inserted member {}", new_member.num());
    Ok(())
}

pub(crate) fn update_status(
    connection: &mut SqliteConnection,
    member_num: &str,
    new_status: &MemberStatus,
    new_expired: &str,
) -> Result<()> {
    let count = diesel::update(
        member::table
            .filter(member::num.eq(member_num))
            .filter(member::active.eq(true)),
    )
    .set((
        member::status.eq(new_status.as_str()),
        member::expired.eq(new_expired),
    ))
    .execute(connection)?;

    if count == 0 {
        return Err(MemberNotFound(member_num.to_owned()));
    }

    debug!("Updated member {member_num} to {new_status} until {new_expired}");
    Ok(())
}

/// Id of the active row carrying this member number.
pub(super) fn get_id_by_number(
    connection: &mut SqliteConnection,
    member_num: &str,
) -> Result<i32> {
    member::table
        .filter(member::num.eq(member_num))
        .filter(member::active.eq(true))
        .select(member::id)
        .first(connection)
        .optional()?
        .ok_or_else(|| MemberNotFound(member_num.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::error::DatabaseError;
    use crate::database::tests::establish_connection;
    use dto::roster_member::tests::{dave_scott, dave_smith, jonette_snow};

    fn populate_db(connection: &mut SqliteConnection) {
        for member in [dave_scott(), dave_smith(), jonette_snow()] {
            insert(connection, &member).unwrap();
        }
    }

    mod get_by_number {
        use super::*;

        #[test]
        fn found() {
            let mut connection = establish_connection();
            populate_db(&mut connection);

            let result = get_by_number(&mut connection, "3").unwrap();

            assert_eq!(Some(jonette_snow()), result);
        }

        #[test]
        fn not_found() {
            let mut connection = establish_connection();
            populate_db(&mut connection);

            assert_eq!(None, get_by_number(&mut connection, "42").unwrap());
        }

        #[test]
        fn ignore_inactive_rows() {
            let mut connection = establish_connection();
            let mut former = dave_scott();
            former.set_active(false);
            insert(&mut connection, &former).unwrap();

            assert_eq!(None, get_by_number(&mut connection, "1").unwrap());
        }
    }

    mod insert {
        use super::*;

        #[test]
        fn duplicate() {
            let mut connection = establish_connection();
            populate_db(&mut connection);

            let result = insert(&mut connection, &dave_scott());

            assert_eq!(Err(DatabaseError::DuplicateMember("1".to_owned())), result);
        }

        #[test]
        fn same_number_as_inactive_row() {
            let mut connection = establish_connection();
            let mut former = dave_scott();
            former.set_active(false);
            insert(&mut connection, &former).unwrap();

            insert(&mut connection, &dave_scott()).unwrap();

            assert_eq!(
                Some(dave_scott()),
                get_by_number(&mut connection, "1").unwrap()
            );
        }

        #[test]
        fn keep_details() {
            let mut connection = establish_connection();
            let member = jonette_snow().with_details(
                "jsnow".to_owned(),
                "K".to_owned(),
                "2024-06-01".to_owned(),
                dto::roster_member::ContactDetails::new(
                    "1 Main St".to_owned(),
                    "Apt 2".to_owned(),
                    "Springfield".to_owned(),
                    "CA".to_owned(),
                    "90000".to_owned(),
                    "555-0100".to_owned(),
                    "555-0101".to_owned(),
                ),
            );

            insert(&mut connection, &member).unwrap();

            assert_eq!(Some(member), get_by_number(&mut connection, "3").unwrap());
        }
    }

    mod list_active {
        use super::*;

        #[test]
        fn in_insertion_order() {
            let mut connection = establish_connection();
            populate_db(&mut connection);
            let mut former = jonette_snow();
            former.set_active(false);
            insert(&mut connection, &former).unwrap();

            let result = list_active(&mut connection).unwrap();

            assert_eq!(vec![dave_scott(), dave_smith(), jonette_snow()], result);
        }
    }

    mod update_status {
        use super::*;

        #[test]
        fn success() {
            let mut connection = establish_connection();
            populate_db(&mut connection);

            update_status(&mut connection, "2", &MemberStatus::Active, "2026-12-31").unwrap();

            let updated = get_by_number(&mut connection, "2").unwrap().unwrap();
            assert_eq!(&MemberStatus::Active, updated.status());
            assert_eq!("2026-12-31", updated.expired());
            assert_eq!("Smith", updated.last_name());
        }

        #[test]
        fn unknown_member() {
            let mut connection = establish_connection();
            populate_db(&mut connection);

            let result = update_status(&mut connection, "42", &MemberStatus::Active, "2026-12-31");

            assert_eq!(Err(DatabaseError::MemberNotFound("42".to_owned())), result);
        }
    }
}
