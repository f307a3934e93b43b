use crate::reconciliation::config::OutputMode;
use dto::candidate::Candidate;
use dto::roster_member::RosterMember;
use std::fmt::{Display, Formatter};

/// What to print for one candidate, given the output mode and the number of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportClass {
    Silent,
    NotFound,
    /// Candidate header followed by one line per match.
    Listing,
    /// Matches only, one mailbox per line.
    Mailboxes,
}

pub fn classify(output_mode: OutputMode, match_count: usize, email_format: bool) -> ReportClass {
    match output_mode {
        OutputMode::NotFound if match_count == 0 => ReportClass::NotFound,
        OutputMode::NotFound => ReportClass::Silent,
        OutputMode::Duplicate if match_count > 1 => ReportClass::Listing,
        OutputMode::Duplicate => ReportClass::Silent,
        OutputMode::Expired | OutputMode::Active | OutputMode::Trial if match_count == 0 => {
            ReportClass::Silent
        }
        OutputMode::Expired | OutputMode::Active | OutputMode::Trial if email_format => {
            ReportClass::Mailboxes
        }
        OutputMode::Expired | OutputMode::Active | OutputMode::Trial => ReportClass::Listing,
        OutputMode::Default => ReportClass::Listing,
    }
}

/// Text lines produced for a candidate. Empty when there is nothing to say.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReport {
    lines: Vec<String>,
}

impl RenderedReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for RenderedReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn render(
    candidate: &Candidate,
    matches: &[&RosterMember],
    output_mode: OutputMode,
    email_format: bool,
) -> RenderedReport {
    let lines = match classify(output_mode, matches.len(), email_format) {
        ReportClass::Silent => vec![],
        ReportClass::NotFound => vec![format!("[{candidate}] Not Found")],
        ReportClass::Listing => std::iter::once(format!("[{candidate}]"))
            .chain(matches.iter().map(|member| detail_line(member)))
            .collect(),
        ReportClass::Mailboxes => matches.iter().map(|member| mailbox_line(member)).collect(),
    };

    RenderedReport { lines }
}

pub fn detail_line(member: &RosterMember) -> String {
    format!(
        "\t[{}] {} {} ({}) - {} [{}]",
        member.num(),
        member.first_name(),
        member.last_name(),
        member.email(),
        member.status(),
        member.expired()
    )
}

/// RFC 5322 mailbox, ready to be pasted in a "To" field.
pub fn mailbox_line(member: &RosterMember) -> String {
    format!(
        "{} {} <{}>,",
        member.first_name(),
        member.last_name(),
        member.email()
    )
}
