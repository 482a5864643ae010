// command.rs

use std::collections::HashMap;

use thiserror::Error;

/// Failures a command can report. The `Display` text of each variant is the
/// exact message shown to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No such command: {0}")]
    UnknownCommand(String),
    #[error("{0}")]
    InvalidArgumentCount(&'static str),
    #[error("{0}")]
    InvalidNumber(String),
    /// Unparseable `mean` operand. Unlike other failures, the line is not
    /// recorded in history.
    #[error("Error: could not convert string to float: '{0}'")]
    InvalidFloat(String),
    #[error("Error: Division by zero is not allowed.")]
    DivisionByZero,
    #[error("Please provide at least one number to calculate the mean.")]
    NoArguments,
    #[error("Error: The result is out of range.")]
    Overflow,
    #[error("History file '{0}' not found.")]
    FileNotFound(String),
    #[error("Error: history file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error: history file '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<String, CommandError>;
}

/// Name to command registry. Names are matched case-sensitively.
#[derive(Default)]
pub struct CommandHandler {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    /// Registers `command` under `name`, replacing any previous entry.
    pub fn register_command(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn execute_command(&self, name: &str, args: &[String]) -> Result<String, CommandError> {
        match self.commands.get(name) {
            Some(command) => command.execute(args),
            None => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
}
