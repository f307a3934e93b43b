use crate::tools::date::{DateFormat, parse_member_date};
use dto::roster_member::RosterMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Latest expiration first. Unparseable expirations go last.
    ByExpiration,
    /// Plain lexicographic order on the last name, case included.
    ByLastName,
}

/// Sort matches in place. The sort is stable: ties keep their relative order.
pub fn sort_matches(matches: &mut [&RosterMember], key: SortKey, date_format: DateFormat) {
    match key {
        SortKey::ByExpiration => matches.sort_by(|a, b| {
            let a = parse_member_date(a.expired(), date_format);
            let b = parse_member_date(b.expired(), date_format);
            b.cmp(&a)
        }),
        SortKey::ByLastName => matches.sort_by(|a, b| a.last_name().cmp(b.last_name())),
    }
}
