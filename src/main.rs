// main.rs

use anyhow::Result;
use clap::Parser;
use tracing::info;

use decimal_calc::config::{CliArgs, Settings};
use decimal_calc::logging::init_logging;
use decimal_calc::repl::start_repl;

fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv = dotenvy::dotenv();

    let args = CliArgs::parse();
    let settings = Settings::from_args(args, std::env::vars());
    init_logging(&settings.log_dir)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env"),
    }
    info!(
        environment = settings.get_var("ENVIRONMENT").unwrap_or_default(),
        "Environment variables loaded."
    );

    start_repl(settings)
}
