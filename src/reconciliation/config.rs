use crate::tools::date::{DateFormat, NO_EXPIRE_CUTOFF};
use chrono::NaiveDate;
use clap::ValueEnum;
use derive_getters::Getters;
use dto::member_status::MemberStatus;
use std::fmt::{Display, Formatter};

/// What the comparison report should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Candidates matching no roster member
    #[value(name = "nf")]
    NotFound,
    /// Candidates matching more than one roster member
    #[value(name = "dup")]
    Duplicate,
    /// Matches whose status is Expired
    #[value(name = "exp")]
    Expired,
    /// Matches whose status is Active
    #[value(name = "act")]
    Active,
    /// Matches whose status is Trial
    #[value(name = "tri")]
    Trial,
    /// Every candidate with all its matches
    #[default]
    Default,
}

impl OutputMode {
    /// Status a roster member must have to be considered at all.
    pub fn status_filter(&self) -> Option<MemberStatus> {
        match self {
            OutputMode::Expired => Some(MemberStatus::Expired),
            OutputMode::Active => Some(MemberStatus::Active),
            OutputMode::Trial => Some(MemberStatus::Trial),
            OutputMode::NotFound | OutputMode::Duplicate | OutputMode::Default => None,
        }
    }
}

impl Display for OutputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputMode::NotFound => "NOT_FOUND",
            OutputMode::Duplicate => "DUPLICATE",
            OutputMode::Expired => "EXPIRED",
            OutputMode::Active => "ACTIVE",
            OutputMode::Trial => "TRIAL",
            OutputMode::Default => "DEFAULT",
        };
        write!(f, "{name}")
    }
}

/// Settings shared by the comparison and the active-sync workflows.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReconcileConfig {
    output_mode: OutputMode,
    expire_cutoff: NaiveDate,
    email_format: bool,
    preview_only: bool,
    date_format: DateFormat,
}

impl ReconcileConfig {
    pub fn new(
        output_mode: OutputMode,
        expire_cutoff: NaiveDate,
        email_format: bool,
        preview_only: bool,
        date_format: DateFormat,
    ) -> Self {
        Self {
            output_mode,
            expire_cutoff,
            email_format,
            preview_only,
            date_format,
        }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self::new(
            OutputMode::Default,
            NO_EXPIRE_CUTOFF,
            false,
            false,
            DateFormat::Iso,
        )
    }
}
