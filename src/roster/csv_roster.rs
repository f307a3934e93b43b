use crate::roster::error::RosterError::{CantOpenRosterFile, MalformedRosterFile, ReadOnlyRoster};
use crate::roster::{Result, RosterStore};
use crate::tools::date::{DateFormat, expires_after_cutoff};
use crate::tools::log_message_and_return;
use chrono::NaiveDate;
use dto::member_alias::MemberAlias;
use dto::member_status::MemberStatus;
use dto::roster_member::{ContactDetails, RosterMember};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// A row of the club-management CSV export.
#[derive(Debug, Deserialize)]
struct CsvRosterRow {
    firstname: String,
    #[serde(default)]
    middle: String,
    lastname: String,
    #[serde(default)]
    email: String,
    status: String,
    #[serde(default)]
    joined: String,
    #[serde(default)]
    expired: String,
    num: String,
}

impl From<CsvRosterRow> for RosterMember {
    fn from(row: CsvRosterRow) -> Self {
        RosterMember::new(
            row.num,
            row.firstname,
            row.lastname,
            row.email,
            MemberStatus::from(row.status),
            row.expired,
        )
        .with_details(String::new(), row.middle, row.joined, ContactDetails::default())
    }
}

/// Read-only roster loaded from a CSV export, such as:
/// `firstname,middle,lastname,email,status,joined,expired,num`
///
/// The export has no notion of alias, nor of inactive rows.
#[derive(Debug, Default)]
pub struct CsvRoster {
    members: Vec<RosterMember>,
    date_format: DateFormat,
}

impl CsvRoster {
    pub fn open(path: &Path, date_format: DateFormat) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            error!("Can't open roster file `{}`.\n{e:#?}", path.display());
            CantOpenRosterFile(e)
        })?;

        let (members, wrong_lines) = load_roster_from_csv(file)?;
        for wrong_line in &wrong_lines {
            warn!("Ignoring malformed roster row: {wrong_line}");
        }
        info!(
            "Read {} roster members from {} ({} malformed rows)",
            members.len(),
            path.display(),
            wrong_lines.len()
        );

        Ok(Self {
            members,
            date_format,
        })
    }
}

/// Load roster members from a header-led CSV source.
/// Return the members along with a description of every row that couldn't be read.
fn load_roster_from_csv<R: std::io::Read>(
    reader: R,
) -> Result<(Vec<RosterMember>, Vec<String>)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?;
    if !headers.iter().any(|header| header == "num") {
        return Err(MalformedRosterFile(format!(
            "missing `num` column in headers {headers:?}"
        )));
    }

    let mut members = vec![];
    let mut wrong_lines = vec![];
    for result in reader.deserialize::<CsvRosterRow>() {
        match result {
            Ok(row) => members.push(RosterMember::from(row)),
            Err(e) => {
                let line = e
                    .position()
                    .map(|position| position.line().to_string())
                    .unwrap_or_else(|| "?".to_owned());
                wrong_lines.push(format!("line {line}: {e}"));
            }
        }
    }

    Ok((members, wrong_lines))
}

impl RosterStore for CsvRoster {
    fn get_by_number(&mut self, num: &str) -> Result<Option<RosterMember>> {
        Ok(self
            .members
            .iter()
            .find(|member| member.num() == num)
            .cloned())
    }

    fn list_active(&mut self, expire_cutoff: NaiveDate) -> Result<Vec<RosterMember>> {
        Ok(self
            .members
            .iter()
            .filter(|member| expires_after_cutoff(member.expired(), expire_cutoff, self.date_format))
            .cloned()
            .collect())
    }

    fn list_aliases(&mut self) -> Result<Vec<(RosterMember, MemberAlias)>> {
        Ok(vec![])
    }

    fn insert(&mut self, member: &RosterMember) -> Result<()> {
        Err(log_message_and_return("Can't insert into a CSV roster", ReadOnlyRoster)(
            member.num(),
        ))
    }

    fn update_status(&mut self, num: &str, _status: &MemberStatus, _expired: &str) -> Result<()> {
        Err(log_message_and_return("Can't update a CSV roster", ReadOnlyRoster)(num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::error::RosterError;
    use crate::tools::date::NO_EXPIRE_CUTOFF;
    use crate::tools::test::tests::temp_dir;
    use std::fs;

    const ROSTER: &str = "firstname,middle,lastname,email,status,joined,expired,num
Dave,J,Scott,d@x.com,Active,3/1/19,12/31/25,1
Dave,,Smith,dave.smith@x.com,Expired,1/5/15,12/31/23,2
Jonette,,Snow,jonette.snow@x.com,Trial,6/1/24,6/30/24,3";

    mod load_roster_from_csv {
        use super::*;

        #[test]
        fn success() {
            let (members, wrong_lines) = load_roster_from_csv(ROSTER.as_bytes()).unwrap();

            assert!(wrong_lines.is_empty());
            assert_eq!(3, members.len());
            let dave = &members[0];
            assert_eq!("1", dave.num());
            assert_eq!("Dave", dave.first_name());
            assert_eq!("J", dave.middle());
            assert_eq!("Scott", dave.last_name());
            assert_eq!(&MemberStatus::Active, dave.status());
            assert_eq!("3/1/19", dave.joined());
            assert_eq!("12/31/25", dave.expired());
            assert!(*dave.active());
        }

        #[test]
        fn skip_wrong_lines() {
            let csv = format!("{ROSTER}\nBroken,row\nAnn,,Lee,ann@x.com,Active,,,5");

            let (members, wrong_lines) = load_roster_from_csv(csv.as_bytes()).unwrap();

            assert_eq!(4, members.len());
            assert_eq!("5", members[3].num());
            assert_eq!(1, wrong_lines.len());
            assert!(wrong_lines[0].starts_with("line 5"));
        }

        #[test]
        fn headers_only() {
            let csv = "firstname,middle,lastname,email,status,joined,expired,num";

            let (members, wrong_lines) = load_roster_from_csv(csv.as_bytes()).unwrap();

            assert!(members.is_empty());
            assert!(wrong_lines.is_empty());
        }

        #[test]
        fn missing_num_column() {
            let csv = "firstname,lastname\nDave,Scott";

            let result = load_roster_from_csv(csv.as_bytes());

            assert!(matches!(result, Err(RosterError::MalformedRosterFile(_))));
        }
    }

    mod store {
        use super::*;

        fn roster() -> CsvRoster {
            let path = temp_dir().join("roster.csv");
            fs::write(&path, ROSTER).unwrap();
            CsvRoster::open(&path, DateFormat::MonthDayYear).unwrap()
        }

        #[test]
        fn get_by_number() {
            let mut roster = roster();

            assert_eq!(
                "Snow",
                roster.get_by_number("3").unwrap().unwrap().last_name()
            );
            assert_eq!(None, roster.get_by_number("42").unwrap());
        }

        #[test]
        fn list_active_with_cutoff() {
            let mut roster = roster();

            let all = roster.list_active(NO_EXPIRE_CUTOFF).unwrap();
            let recent = roster
                .list_active(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                .unwrap();

            assert_eq!(3, all.len());
            assert_eq!(
                vec!["1", "3"],
                recent.iter().map(|member| member.num().as_str()).collect::<Vec<_>>()
            );
        }

        #[test]
        fn read_only() {
            let mut roster = roster();
            let member = roster.get_by_number("1").unwrap().unwrap();

            assert!(matches!(
                roster.insert(&member),
                Err(RosterError::ReadOnlyRoster)
            ));
            assert!(matches!(
                roster.update_status("1", &MemberStatus::Active, "12/31/26"),
                Err(RosterError::ReadOnlyRoster)
            ));
            assert!(roster.list_aliases().unwrap().is_empty());
        }

        #[test]
        fn missing_file() {
            let path = temp_dir().join("missing.csv");

            let result = CsvRoster::open(&path, DateFormat::MonthDayYear);

            assert!(matches!(result, Err(RosterError::CantOpenRosterFile(_))));
        }
    }
}
