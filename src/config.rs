// config.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

use crate::history::DEFAULT_HISTORY_FILE;

pub const DEFAULT_ENVIRONMENT: &str = "PRODUCTION";

#[derive(Parser, Debug)]
#[command(name = "decimal-calc", version, about = "Interactive decimal calculator with command history")]
pub struct CliArgs {
    /// Deployment environment label (informational only)
    #[arg(long, env = "ENVIRONMENT", default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// File used by `history save|load|delete` when no file is given
    #[arg(long, env = "CALC_HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Do not load the history file at startup
    #[arg(long)]
    pub no_history_load: bool,

    /// Keep only the newest N history entries
    #[arg(long, env = "CALC_HISTORY_LIMIT")]
    pub history_limit: Option<usize>,

    /// Directory for app.log
    #[arg(long, env = "CALC_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}

/// Settings resolved once at startup and handed to the app.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: String,
    pub history_file: PathBuf,
    pub load_history_on_start: bool,
    pub history_limit: Option<usize>,
    pub log_dir: PathBuf,
    pub(crate) vars: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            load_history_on_start: true,
            history_limit: None,
            log_dir: PathBuf::from("logs"),
            vars: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Builds settings from parsed arguments and a snapshot of the environment.
    pub fn from_args<I>(args: CliArgs, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            environment: args.environment,
            history_file: args.history_file,
            load_history_on_start: !args.no_history_load,
            history_limit: args.history_limit,
            log_dir: args.log_dir,
            vars: vars.into_iter().collect(),
        }
    }

    /// Looks up an environment variable as seen at startup. `ENVIRONMENT`
    /// always resolves, falling back to its default.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        if key == "ENVIRONMENT" {
            return Some(&self.environment);
        }
        self.vars.get(key).map(String::as_str)
    }
}
