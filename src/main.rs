#![allow(unused)]

use board::{mount, RowLinks};
use clap::{Parser, Subcommand};
use config::BoardConfig;
use error::Error;
use notice::load_records;
use std::{error::Error as _, path::PathBuf, process::ExitCode, time::Instant};

mod board;
mod config;
mod error;
mod notice;
mod output;
mod router;
mod view;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the board's TOML config.
    #[arg(long, default_value = "./noticeboard.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the list to `<output>/index.html` and each notice next to it.
    Build {
        /// Show this state in `index.html` instead of the list, e.g.
        /// `/detail?index=0`.
        #[arg(long)]
        path: Option<String>,
    },
    /// Serve the page, navigating on every request.
    Serve {
        #[arg(long)]
        addr: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = e.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            log::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let start = Instant::now();

    let config = BoardConfig::load(&cli.config)?;
    let records = load_records(&config.input)?;

    log::info!(
        "({:.1}s) Found {} notices in {}",
        start.elapsed().as_secs_f32(),
        records.len(),
        config.input
    );

    match cli.command {
        Command::Build { path } => {
            let page = mount(&config, records, RowLinks::Files);
            output::build(start, &page, path.as_deref(), &config.output)
        }
        Command::Serve { addr } => {
            let page = mount(&config, records, RowLinks::Query);
            let addr = addr.unwrap_or_else(|| config.addr.clone());
            output::serve(start, &addr, &page)
        }
    }
}
