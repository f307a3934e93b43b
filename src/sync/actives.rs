use crate::club_express::RawFeed;
use crate::reconciliation::config::ReconcileConfig;
use crate::roster::RosterStore;
use crate::tools::date::{end_of_year, format_member_date};
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::member_status::MemberStatus;
use dto::roster_member::RosterMember;
use std::collections::HashSet;
use std::io::Write;

/// What the sync does with one feed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Unknown member number.
    Insert,
    /// Known member, not active yet. Holds the current status.
    Reactivate(MemberStatus),
    AlreadyActive,
}

pub fn decide(existing: Option<&RosterMember>) -> SyncAction {
    match existing {
        None => SyncAction::Insert,
        Some(member) if member.status() == &MemberStatus::Active => SyncAction::AlreadyActive,
        Some(member) => SyncAction::Reactivate(member.status().clone()),
    }
}

/// Counters for one sync run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SyncSummary {
    inserted: usize,
    reactivated: usize,
    unchanged: usize,
    failed: usize,
    /// Feed records repeating a member number already seen in this run.
    repeated: usize,
}

/// Mark every member of the active feed as active in the roster, until the end of the current year.
///
/// In preview mode, the transitions are written to `out` and the store is left untouched.
/// A record whose lookup or mutation fails is logged and skipped, as is any record repeating
/// a member number: only its first occurrence counts.
pub fn sync_active_members<S: RosterStore + ?Sized, W: Write>(
    store: &mut S,
    feed: &[RosterMember],
    today: NaiveDate,
    config: &ReconcileConfig,
    out: &mut W,
) -> std::io::Result<SyncSummary> {
    let preview_only = *config.preview_only();
    let new_expired = format_member_date(end_of_year(today), *config.date_format());
    info!("Syncing {} active members from the feed", feed.len());
    if preview_only {
        info!("Preview only: the roster won't be modified");
    }
    info!("Expiration dates will be set to {new_expired}");

    let mut summary = SyncSummary::default();
    let mut seen_numbers = HashSet::new();
    for record in feed {
        if !seen_numbers.insert(record.num().as_str()) {
            warn!("Ignoring repeated feed record for member {}", record.num());
            summary.repeated += 1;
            continue;
        }

        let existing = match store.get_by_number(record.num()) {
            Ok(existing) => existing,
            Err(e) => {
                error!("Can't look up member {}\n{e:#?}", record.num());
                summary.failed += 1;
                continue;
            }
        };

        let action = decide(existing.as_ref());
        let old_status = match &action {
            SyncAction::AlreadyActive => {
                summary.unchanged += 1;
                continue;
            }
            SyncAction::Insert => MemberStatus::New,
            SyncAction::Reactivate(status) => status.clone(),
        };

        if preview_only {
            writeln!(
                out,
                "[{}] {} {} ({old_status}) -> ({}) {new_expired}",
                record.num(),
                record.first_name(),
                record.last_name(),
                MemberStatus::Active
            )?;
            continue;
        }

        let result = match action {
            SyncAction::Insert => {
                let mut new_member = record.clone();
                new_member.set_status(MemberStatus::Active);
                new_member.set_expired(new_expired.clone());
                new_member.set_active(true);
                store.insert(&new_member)
            }
            _ => store.update_status(record.num(), &MemberStatus::Active, &new_expired),
        };

        match (result, existing) {
            (Ok(()), None) => {
                info!("Inserted new active member {}", record.num());
                summary.inserted += 1;
            }
            (Ok(()), Some(_)) => {
                info!("Reactivated member {} (was {old_status})", record.num());
                summary.reactivated += 1;
            }
            (Err(e), _) => {
                error!("Can't sync member {}\n{e:#?}", record.num());
                summary.failed += 1;
            }
        }
    }

    info!(
        "Sync done: {} inserted, {} reactivated, {} unchanged, {} failed, {} repeated",
        summary.inserted, summary.reactivated, summary.unchanged, summary.failed, summary.repeated
    );
    Ok(summary)
}

/// Print the feed as received: one `[name] value` line per header, then the body.
pub fn write_raw_feed<W: Write>(feed: &RawFeed, out: &mut W) -> std::io::Result<()> {
    for (name, value) in feed.headers() {
        writeln!(out, "[{name}] {value}")?;
    }
    write!(out, "{}", feed.body())
}
