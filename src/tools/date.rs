use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

/// Cutoff meaning "don't filter on expiration". Older than any real record.
pub const NO_EXPIRE_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(1963, 11, 4) {
    Some(date) => date,
    None => panic!("invalid cutoff date"),
};

/// How member dates are written in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateFormat {
    /// `2025-12-31`
    #[default]
    Iso,
    /// `12/31/25`
    #[value(name = "mdy")]
    MonthDayYear,
}

impl DateFormat {
    fn parse_pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::MonthDayYear => "%m/%d/%y",
        }
    }

    fn format_pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::MonthDayYear => "%-m/%-d/%y",
        }
    }
}

/// Parse a member date.
/// `None` stands for an unparseable date and compares lower than any real date.
pub fn parse_member_date(value: &str, format: DateFormat) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format.parse_pattern()).ok()
}

pub fn format_member_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.format_pattern()).to_string()
}

/// Whether a member expiring on `expired` is still to be considered given the cutoff.
/// Always true for [NO_EXPIRE_CUTOFF]; otherwise the expiration must be strictly after it.
pub fn expires_after_cutoff(expired: &str, expire_cutoff: NaiveDate, format: DateFormat) -> bool {
    expire_cutoff == NO_EXPIRE_CUTOFF || parse_member_date(expired, format) > Some(expire_cutoff)
}

/// Last day of the year `today` belongs to.
pub fn end_of_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today)
}
