// history.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::command::{Command, CommandError};
use crate::table::fancy_grid;

pub const DEFAULT_HISTORY_FILE: &str = "history.csv";
const HEADER: &str = "Command";
pub const HISTORY_SUB_COMMANDS: [&str; 5] = ["show", "save", "load", "clear", "delete"];

#[derive(Debug, Deserialize)]
struct HistoryRecord {
    #[serde(rename = "Command")]
    command: String,
}

/// Ordered log of raw input lines. Unbounded unless a limit is set, in which
/// case only the newest `limit` entries are kept.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

pub type SharedHistory = Rc<RefCell<HistoryStore>>;

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { entries: VecDeque::new(), limit }
    }

    pub fn shared(self) -> SharedHistory {
        Rc::new(RefCell::new(self))
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `line` unless it is itself a history command.
    pub fn add(&mut self, line: &str) {
        if line.starts_with("history") {
            return;
        }
        self.entries.push_back(line.to_string());
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    pub fn show(&self) -> String {
        if self.entries.is_empty() {
            return "No command history available.".to_string();
        }
        let rows: Vec<Vec<String>> = self.entries.iter().map(|e| vec![e.clone()]).collect();
        fancy_grid(&[HEADER], &rows)
    }

    pub fn save(&self, path: &Path) -> Result<String, CommandError> {
        if self.entries.is_empty() {
            return Ok("No command history to save.".to_string());
        }
        let csv_err = |source| CommandError::Csv { path: path.display().to_string(), source };
        let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
        writer.write_record([HEADER]).map_err(csv_err)?;
        for entry in &self.entries {
            writer.write_record([entry]).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| CommandError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), entries = self.len(), "history saved");
        Ok(format!("History saved to {}.", path.display()))
    }

    /// Replaces the in-memory entries with the file's rows. A missing file
    /// leaves the store untouched.
    pub fn load(&mut self, path: &Path) -> Result<String, CommandError> {
        match read_entries(path) {
            Ok(entries) => {
                self.entries = entries.into();
                self.enforce_limit();
                info!(path = %path.display(), entries = self.len(), "history loaded");
                Ok(format!("History loaded from {}.", path.display()))
            }
            Err(err @ CommandError::FileNotFound(_)) => {
                debug!(path = %path.display(), "no history file to load");
                Ok(err.to_string())
            }
            Err(err) => Err(err),
        }
    }

    pub fn clear(&mut self) -> String {
        self.entries.clear();
        "History cleared.".to_string()
    }

    /// Removes the history file. The in-memory entries are not touched.
    pub fn delete(&self, path: &Path) -> Result<String, CommandError> {
        if !path.exists() {
            return Ok(format!("No history file found at '{}'.", path.display()));
        }
        std::fs::remove_file(path).map_err(|source| CommandError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "history file deleted");
        Ok(format!("History file '{}' deleted.", path.display()))
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, CommandError> {
    if !path.exists() {
        return Err(CommandError::FileNotFound(path.display().to_string()));
    }
    let csv_err = |source| CommandError::Csv { path: path.display().to_string(), source };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    reader
        .deserialize::<HistoryRecord>()
        .map(|record| record.map(|r| r.command).map_err(csv_err))
        .collect()
}

/// The `history` command: `show`, `save`, `load`, `clear` and `delete`
/// over the shared store.
pub struct HistoryCommand {
    store: SharedHistory,
    default_path: PathBuf,
}

impl HistoryCommand {
    pub fn new(store: SharedHistory, default_path: impl Into<PathBuf>) -> Self {
        Self { store, default_path: default_path.into() }
    }

    fn path_arg(&self, args: &[String]) -> PathBuf {
        args.get(1).map(PathBuf::from).unwrap_or_else(|| self.default_path.clone())
    }
}

impl Command for HistoryCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        let Some(sub) = args.first() else {
            return Ok(self.store.borrow().show());
        };
        match sub.to_lowercase().as_str() {
            "show" => Ok(self.store.borrow().show()),
            "save" => self.store.borrow().save(&self.path_arg(args)),
            "load" => self.store.borrow_mut().load(&self.path_arg(args)),
            "clear" => Ok(self.store.borrow_mut().clear()),
            "delete" => self.store.borrow().delete(&self.path_arg(args)),
            _ => Ok(format!(
                "Invalid history command. Available commands: {}.",
                HISTORY_SUB_COMMANDS.join(", ")
            )),
        }
    }
}
