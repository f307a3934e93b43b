use crate::club_express::{ClubExpressConfiguration, fetch_actives, fetch_raw_actives};
use crate::credentials::Credentials;
use crate::credentials::error::CredentialsError::MissingCredentials;
use crate::database::SqliteRosterStore;
use crate::error::ApplicationError::InvalidExpireCutoff;
use crate::error::Result;
use crate::reconciliation::config::{OutputMode, ReconcileConfig};
use crate::reconciliation::driver::Reconciler;
use crate::reconciliation::sorter::{SortKey, sort_matches};
use crate::roster::RosterStore;
use crate::roster::csv_roster::CsvRoster;
use crate::slack::{SlackConfiguration, list_workspace_users};
use crate::strava::config::StravaConfiguration;
use crate::strava::{list_club_athletes, valid_access_token};
use crate::sync::actives::{sync_active_members, write_raw_feed};
use crate::tools::date::{DateFormat, NO_EXPIRE_CUTOFF, parse_member_date};
use crate::tools::web::build_client;
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dto::candidate::Candidate;
use dto::member_alias::MemberAlias;
use std::io::Write;
use std::path::PathBuf;

/// Reconcile the club roster with the fitness club and the team chat workspace,
/// and keep it in sync with the club-management platform.
#[derive(Debug, Parser)]
#[command(name = "roster-sync", version)]
pub struct Cli {
    /// SQLite roster database
    #[arg(long, env = "ROSTER_SYNC_DB", default_value = "./roster-sync.db", global = true)]
    db: String,

    /// JSON file holding the platform credentials
    #[arg(
        long,
        env = "ROSTER_SYNC_CREDENTIALS",
        default_value = "./.secret/credentials.json",
        global = true
    )]
    credentials: PathBuf,

    /// How dates are written in the roster
    #[arg(long, value_enum, default_value_t = DateFormat::Iso, global = true)]
    date_format: DateFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare the members of an external platform with the roster
    Check(CheckArgs),
    /// Mark every member of the club-management actives feed as active in the roster
    Actives(ActivesArgs),
    /// Print every active roster member
    ListMembers,
    /// Print every alias along with the member it stands for
    ListAliases,
    /// Give a roster member another name or email
    AddAlias(AddAliasArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    Strava,
    Slack,
}

#[derive(Debug, Args)]
struct CheckArgs {
    source: Source,

    #[arg(long, value_enum, default_value_t = OutputMode::Default)]
    out: OutputMode,

    /// Ignore members expiring on or before this date
    #[arg(long)]
    exp: Option<String>,

    /// Print matches as mailboxes, ready to paste in an email
    #[arg(long)]
    email: bool,

    /// Read the roster from a CSV export instead of the database
    #[arg(long)]
    roster_csv: Option<PathBuf>,

    #[arg(long, env = "STRAVA_CLUB_ID", required_if_eq("source", "strava"))]
    club_id: Option<String>,

    #[arg(long, env = "STRAVA_API_URL", default_value = crate::strava::config::DEFAULT_API_URL)]
    strava_api_url: String,

    #[arg(long, env = "STRAVA_OAUTH_URL", default_value = crate::strava::config::DEFAULT_OAUTH_URL)]
    strava_oauth_url: String,

    #[arg(long, env = "SLACK_API_URL", default_value = crate::slack::DEFAULT_API_URL)]
    slack_api_url: String,
}

#[derive(Debug, Args)]
struct ActivesArgs {
    /// Print what would change without touching the roster
    #[arg(long)]
    pre: bool,

    /// Print the feed headers and body as received
    #[arg(long)]
    raw: bool,

    /// Overrides the feed URL from the credentials file
    #[arg(long, env = "CLUB_EXPRESS_ACTIVES_URL")]
    actives_url: Option<String>,
}

#[derive(Debug, Args)]
struct AddAliasArgs {
    num: String,
    first_name: String,
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
}

pub async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Check(args) => check(&cli, args).await,
        Command::Actives(args) => actives(&cli, args).await,
        Command::ListMembers => {
            let mut store = SqliteRosterStore::open(&cli.db, cli.date_format)?;
            write_members(&mut store, cli.date_format, &mut std::io::stdout().lock())
        }
        Command::ListAliases => {
            let mut store = SqliteRosterStore::open(&cli.db, cli.date_format)?;
            write_aliases(&mut store, &mut std::io::stdout().lock())
        }
        Command::AddAlias(args) => {
            let mut store = SqliteRosterStore::open(&cli.db, cli.date_format)?;
            let alias = MemberAlias::new(
                args.first_name.clone(),
                args.last_name.clone(),
                args.email.clone(),
            );
            store.add_alias(&args.num, &alias)?;
            info!("Added alias {} {} to member {}", args.first_name, args.last_name, args.num);
            Ok(())
        }
    }
}

fn expire_cutoff(exp: Option<&str>, date_format: DateFormat) -> Result<NaiveDate> {
    match exp {
        None => Ok(NO_EXPIRE_CUTOFF),
        Some(value) => {
            parse_member_date(value, date_format).ok_or_else(|| InvalidExpireCutoff(value.to_owned()))
        }
    }
}

async fn check(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let config = ReconcileConfig::new(
        args.out,
        expire_cutoff(args.exp.as_deref(), cli.date_format)?,
        args.email,
        false,
        cli.date_format,
    );
    info!("Output mode: {}", args.out);

    let candidates = fetch_candidates(cli, args).await?;

    let reconciler = match &args.roster_csv {
        Some(path) => Reconciler::load(&mut CsvRoster::open(path, cli.date_format)?, config)?,
        None => Reconciler::load(
            &mut SqliteRosterStore::open(&cli.db, cli.date_format)?,
            config,
        )?,
    };

    reconciler.reconcile(&candidates, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Candidates of the platform, sorted by first name.
async fn fetch_candidates(cli: &Cli, args: &CheckArgs) -> Result<Vec<Candidate>> {
    let mut credentials = Credentials::load(&cli.credentials)?;
    let client = build_client()?;

    let candidates = match args.source {
        Source::Strava => {
            let configuration = StravaConfiguration::new(
                args.strava_api_url.clone(),
                args.strava_oauth_url.clone(),
                args.club_id.clone().unwrap_or_default(),
            );
            let access_token = valid_access_token(
                &client,
                &configuration,
                &mut credentials,
                &cli.credentials,
                Utc::now().timestamp(),
            )
            .await?;
            list_club_athletes(&client, &configuration, &access_token).await?
        }
        Source::Slack => {
            let token = credentials.slack().token();
            if token.is_empty() {
                return Err(MissingCredentials("slack").into());
            }
            let configuration = SlackConfiguration::new(args.slack_api_url.clone());
            list_workspace_users(&client, &configuration, token).await?
        }
    };
    info!("Checking {} candidates", candidates.len());

    Ok(candidates)
}

async fn actives(cli: &Cli, args: &ActivesArgs) -> Result<()> {
    let actives_url = match &args.actives_url {
        Some(actives_url) => actives_url.clone(),
        None => Credentials::load(&cli.credentials)?
            .clubexpress()
            .actives_url()
            .clone(),
    };
    if actives_url.is_empty() {
        return Err(MissingCredentials("clubexpress").into());
    }
    let configuration = ClubExpressConfiguration::new(actives_url);
    let client = build_client()?;

    if args.raw {
        let feed = fetch_raw_actives(&client, &configuration).await?;
        write_raw_feed(&feed, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let feed = fetch_actives(&client, &configuration).await?;
    let mut store = SqliteRosterStore::open(&cli.db, cli.date_format)?;
    let config = ReconcileConfig::new(
        OutputMode::Default,
        NO_EXPIRE_CUTOFF,
        false,
        args.pre,
        cli.date_format,
    );
    sync_active_members(
        &mut store,
        &feed,
        Local::now().date_naive(),
        &config,
        &mut std::io::stdout().lock(),
    )?;

    Ok(())
}

/// One line per active member, by last name.
fn write_members<S: RosterStore + ?Sized, W: Write>(
    store: &mut S,
    date_format: DateFormat,
    out: &mut W,
) -> Result<()> {
    let members = store.list_active(NO_EXPIRE_CUTOFF)?;
    let mut members: Vec<_> = members.iter().collect();
    sort_matches(&mut members, SortKey::ByLastName, date_format);

    for member in members {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            member.num(),
            member.first_name(),
            member.last_name(),
            member.email(),
            member.status(),
            member.expired()
        )?;
    }
    Ok(())
}

fn write_aliases<S: RosterStore + ?Sized, W: Write>(store: &mut S, out: &mut W) -> Result<()> {
    for (member, alias) in store.list_aliases()? {
        writeln!(
            out,
            "[{} {} {}]",
            alias.first_name(),
            alias.last_name(),
            alias.email()
        )?;
        writeln!(
            out,
            "\t[{}] {} {} ({})",
            member.num(),
            member.first_name(),
            member.last_name(),
            member.email()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::tests::InMemoryRoster;
    use clap::CommandFactory;
    use dto::roster_member::tests::{dave_scott, dave_smith, jonette_snow};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    mod parse {
        use super::*;

        #[test]
        fn check_with_options() {
            let cli = Cli::try_parse_from([
                "roster-sync",
                "--date-format",
                "mdy",
                "check",
                "slack",
                "--out",
                "nf",
                "--exp",
                "1/1/24",
                "--email",
            ])
            .unwrap();

            assert_eq!(DateFormat::MonthDayYear, cli.date_format);
            let Command::Check(args) = cli.command else {
                panic!("expected check command");
            };
            assert_eq!(Source::Slack, args.source);
            assert_eq!(OutputMode::NotFound, args.out);
            assert_eq!(Some("1/1/24".to_owned()), args.exp);
            assert!(args.email);
        }

        #[test]
        fn defaults() {
            let cli = Cli::try_parse_from(["roster-sync", "actives", "--pre"]).unwrap();

            assert_eq!(DateFormat::Iso, cli.date_format);
            let Command::Actives(args) = cli.command else {
                panic!("expected actives command");
            };
            assert!(args.pre);
            assert!(!args.raw);
        }

        #[test]
        fn strava_needs_club_id() {
            // Run with STRAVA_CLUB_ID unset: the environment would fill the missing option.
            let without_club = Cli::try_parse_from(["roster-sync", "check", "strava"]);
            let with_club = Cli::try_parse_from(["roster-sync", "check", "strava", "--club-id", "12"]);
            let slack = Cli::try_parse_from(["roster-sync", "check", "slack"]);

            assert!(without_club.is_err());
            assert!(with_club.is_ok());
            assert!(slack.is_ok());
        }

        #[test]
        fn unknown_output_mode() {
            let result = Cli::try_parse_from(["roster-sync", "check", "slack", "--out", "all"]);

            assert!(result.is_err());
        }
    }

    mod expire_cutoff {
        use super::*;

        #[test]
        fn no_cutoff() {
            assert_eq!(NO_EXPIRE_CUTOFF, expire_cutoff(None, DateFormat::Iso).unwrap());
        }

        #[test]
        fn parsed_with_date_format() {
            assert_eq!(
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                expire_cutoff(Some("1/31/24"), DateFormat::MonthDayYear).unwrap()
            );
        }

        #[test]
        fn unparseable() {
            assert!(matches!(
                expire_cutoff(Some("1/31/24"), DateFormat::Iso),
                Err(InvalidExpireCutoff(_))
            ));
        }
    }

    #[test]
    fn list_members_by_last_name() {
        let mut store = InMemoryRoster::new(vec![jonette_snow(), dave_smith(), dave_scott()]);
        let mut out = Vec::new();

        write_members(&mut store, DateFormat::Iso, &mut out).unwrap();

        assert_eq!(
            "1 Dave Scott d@x.com Active 2025-12-31\n\
             2 Dave Smith dave.smith@x.com Expired 2023-12-31\n\
             3 Jonette Snow jonette.snow@x.com Trial 2024-06-30\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn list_aliases() {
        let mut store = InMemoryRoster::default();
        store.aliases = vec![(
            jonette_snow(),
            MemberAlias::new("Jo".to_owned(), "Snow".to_owned(), "jo@y.com".to_owned()),
        )];
        let mut out = Vec::new();

        write_aliases(&mut store, &mut out).unwrap();

        assert_eq!(
            "[Jo Snow jo@y.com]\n\t[3] Jonette Snow (jonette.snow@x.com)\n",
            String::from_utf8(out).unwrap()
        );
    }
}
