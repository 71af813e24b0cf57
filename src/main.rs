pub use error::Error;
mod command;
mod conf;
mod error;
mod grid;
mod minting;
mod period;
mod report;
use conf::Conf;
use std::env;
use std::process::ExitCode;
use chrono::Datelike;
use time::OffsetDateTime;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

const USAGE: &str = "Usage: farm-earnings <farm_id> <month.year> or <farm_id> <start_month.year-end_month.year>";

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to generate farm earnings");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let (farm_id, months) = match (args.get(1), args.get(2), args.get(3)) {
        (Some(farm_id), Some(months), None) => (farm_id, months),
        _ => Err(Error::CLI(USAGE.into()))?,
    };

    let conf = Conf::from_env()?;

    let calendar = conf.calendar()?;
    let now = OffsetDateTime::now_utc();
    let current_year = calendar
        .local_time(now.unix_timestamp())
        .map(|it| it.year())
        .unwrap_or(now.year());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(command::farm_earnings::run(
            farm_id,
            months,
            &conf,
            calendar,
            current_year,
        ))?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
