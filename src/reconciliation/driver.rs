use crate::reconciliation::config::ReconcileConfig;
use crate::reconciliation::matcher::{MatchFilter, match_candidate};
use crate::reconciliation::report::render;
use crate::reconciliation::sorter::{SortKey, sort_matches};
use crate::roster::RosterStore;
use crate::roster::error::RosterError;
use derive_getters::Getters;
use dto::candidate::Candidate;
use dto::member_alias::MemberAlias;
use dto::roster_member::RosterMember;
use std::io::Write;

/// Counters for one comparison run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ReconcileSummary {
    checked: usize,
    /// Bot and app accounts of the chat workspace.
    skipped: usize,
    not_found: usize,
    duplicates: usize,
}

/// Compares external candidates against a roster snapshot.
///
/// The roster and its aliases are read once, when loading. The comparison itself never touches the store.
#[derive(Debug)]
pub struct Reconciler {
    config: ReconcileConfig,
    roster: Vec<RosterMember>,
    aliases: Vec<(RosterMember, MemberAlias)>,
}

impl Reconciler {
    pub fn new(
        config: ReconcileConfig,
        roster: Vec<RosterMember>,
        aliases: Vec<(RosterMember, MemberAlias)>,
    ) -> Self {
        Self {
            config,
            roster,
            aliases,
        }
    }

    /// Snapshot the store. Any failure here aborts the whole run.
    pub fn load<S: RosterStore + ?Sized>(
        store: &mut S,
        config: ReconcileConfig,
    ) -> Result<Self, RosterError> {
        let roster = store.list_active(*config.expire_cutoff())?;
        let aliases = store.list_aliases()?;
        info!(
            "Loaded {} roster members and {} aliases",
            roster.len(),
            aliases.len()
        );

        Ok(Self::new(config, roster, aliases))
    }

    /// Matches for a single candidate, latest expiration first.
    pub fn check(&self, candidate: &Candidate) -> Vec<&RosterMember> {
        let filter = MatchFilter::from(&self.config);
        let mut matches = match_candidate(candidate, &self.roster, &self.aliases, &filter);
        sort_matches(
            &mut matches,
            SortKey::ByExpiration,
            *self.config.date_format(),
        );
        matches
    }

    /// Check every candidate, in the order given, and write the report to `out`.
    pub fn reconcile<W: Write>(
        &self,
        candidates: &[Candidate],
        out: &mut W,
    ) -> std::io::Result<ReconcileSummary> {
        let mut summary = ReconcileSummary::default();

        for candidate in candidates {
            if matches!(candidate, Candidate::ChatWorkspace(user) if !user.email_confirmed()) {
                debug!("Skipping unconfirmed account {candidate}");
                summary.skipped += 1;
                continue;
            }

            let matches = self.check(candidate);
            summary.checked += 1;
            match matches.len() {
                0 => summary.not_found += 1,
                1 => {}
                _ => summary.duplicates += 1,
            }

            let report = render(
                candidate,
                &matches,
                *self.config.output_mode(),
                *self.config.email_format(),
            );
            write!(out, "{report}")?;
        }

        info!(
            "Checked {} candidates ({} skipped): {} not found, {} with several matches",
            summary.checked, summary.skipped, summary.not_found, summary.duplicates
        );
        Ok(summary)
    }
}
