use crate::reconciliation::config::ReconcileConfig;
use crate::tools::date::{DateFormat, expires_after_cutoff};
use crate::tools::normalize;
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::candidate::Candidate;
use dto::member_alias::MemberAlias;
use dto::member_status::MemberStatus;
use dto::roster_member::RosterMember;

/// Conditions a roster member must meet, on top of the identity match, to be reported.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchFilter {
    status: Option<MemberStatus>,
    expire_cutoff: NaiveDate,
    date_format: DateFormat,
}

impl MatchFilter {
    pub fn new(
        status: Option<MemberStatus>,
        expire_cutoff: NaiveDate,
        date_format: DateFormat,
    ) -> Self {
        Self {
            status,
            expire_cutoff,
            date_format,
        }
    }

    /// A member passes when its status is the requested one (if any)
    /// and it expires strictly after the cutoff (unless there is no cutoff).
    pub fn accepts(&self, member: &RosterMember) -> bool {
        let status_matches = self
            .status
            .as_ref()
            .is_none_or(|status| status == member.status());

        status_matches
            && expires_after_cutoff(member.expired(), self.expire_cutoff, self.date_format)
    }
}

impl From<&ReconcileConfig> for MatchFilter {
    fn from(config: &ReconcileConfig) -> Self {
        MatchFilter::new(
            config.output_mode().status_filter(),
            *config.expire_cutoff(),
            *config.date_format(),
        )
    }
}

/// Roster members matching the candidate, directly or through one of their aliases.
///
/// Direct matches come first, in roster order, followed by members resolved through an alias,
/// in alias order. Nothing is sorted here.
pub fn match_candidate<'a>(
    candidate: &Candidate,
    roster: &'a [RosterMember],
    aliases: &'a [(RosterMember, MemberAlias)],
    filter: &MatchFilter,
) -> Vec<&'a RosterMember> {
    let direct_matches = roster.iter().filter(|member| {
        filter.accepts(member)
            && is_same_person(
                candidate,
                member.first_name(),
                member.last_name(),
                member.email(),
            )
    });

    let alias_matches = aliases
        .iter()
        .filter(|(member, alias)| {
            filter.accepts(member)
                && is_same_person(
                    candidate,
                    alias.first_name(),
                    alias.last_name(),
                    alias.email(),
                )
        })
        .map(|(member, _)| member);

    direct_matches.chain(alias_matches).collect()
}

/// Identity rules, which depend on what each platform exposes.
///
/// - Chat workspace users: same first and last name, or same email.
/// - Fitness club athletes: same first name and same initial of the last name,
///   as the platform never gives out full last names.
///
/// Comparisons ignore case; the candidate's names are trimmed.
fn is_same_person(candidate: &Candidate, first_name: &str, last_name: &str, email: &str) -> bool {
    match candidate {
        Candidate::ChatWorkspace(user) => {
            let same_name = normalize(user.first_name()) == first_name.to_lowercase()
                && normalize(user.last_name()) == last_name.to_lowercase();
            same_name || user.email().to_lowercase() == email.to_lowercase()
        }
        Candidate::FitnessClub(athlete) => {
            normalize(athlete.first_name()) == first_name.to_lowercase()
                && matches!(
                    (initial(athlete.last_name().trim()), initial(last_name)),
                    (Some(candidate_initial), Some(member_initial)) if candidate_initial == member_initial
                )
        }
    }
}

fn initial(value: &str) -> Option<String> {
    value
        .chars()
        .next()
        .map(|initial| initial.to_lowercase().collect())
}
