#[macro_use]
extern crate log;

mod cli;
mod club_express;
mod credentials;
mod database;
mod error;
mod reconciliation;
mod roster;
mod slack;
mod strava;
mod sync;
mod tools;

use crate::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}\n{e:#?}");
            ExitCode::FAILURE
        }
    }
}
