// repl.rs

use std::io::Write;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::{error, info, warn};

use crate::arithmetic::{AddCommand, DivideCommand, MeanCommand, MultiplyCommand, SubtractCommand};
use crate::command::{CommandError, CommandHandler};
use crate::completion::CommandCompleter;
use crate::config::Settings;
use crate::history::{HistoryCommand, HistoryStore, SharedHistory};
use crate::parser::{is_exit, tokenize};
use crate::util::writeln_ignore_broken_pipe;

pub const PROMPT: &str = ">>> ";

const MENU: &str = "\
Available Commands:
1. add                        - Add two numbers
2. subtract                   - Subtract two numbers
3. multiply                   - Multiply two numbers
4. divide                     - Divide two numbers
5. mean                       - Calculate mean of provided numbers
6. history                    - Show, save, load, clear or delete command history
Type 'exit' to exit the application.
Dummy Format: add 3 4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of input lines for the loop.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

impl LineReader for Editor<CommandCompleter, DefaultHistory> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.readline(prompt) {
            Ok(line) => {
                let _ = self.add_history_entry(line.as_str());
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }
}

pub struct App {
    settings: Settings,
    command_handler: CommandHandler,
    history: SharedHistory,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let history = HistoryStore::with_limit(settings.history_limit).shared();
        let mut app = Self {
            settings,
            command_handler: CommandHandler::new(),
            history,
        };
        app.register_commands();
        app
    }

    fn register_commands(&mut self) {
        self.command_handler.register_command("add", Box::new(AddCommand));
        self.command_handler.register_command("subtract", Box::new(SubtractCommand));
        self.command_handler.register_command("multiply", Box::new(MultiplyCommand));
        self.command_handler.register_command("divide", Box::new(DivideCommand));
        self.command_handler.register_command("mean", Box::new(MeanCommand));
        self.command_handler.register_command(
            "history",
            Box::new(HistoryCommand::new(self.history.clone(), &self.settings.history_file)),
        );
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    pub fn editor(&self) -> Result<Editor<CommandCompleter, DefaultHistory>> {
        let config = Config::builder().completion_type(CompletionType::List).build();
        let mut rl = Editor::with_config(config).context("Failed to create line editor")?;
        rl.set_helper(Some(CommandCompleter::new(self.command_handler.command_names())));
        Ok(rl)
    }

    /// Loads the default history file, returning the message to show.
    pub fn load_startup_history(&self) -> String {
        let path = &self.settings.history_file;
        match self.history.borrow_mut().load(path) {
            Ok(message) => message,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to load startup history");
                err.to_string()
            }
        }
    }

    /// Dispatches one input line and returns the text to print, or `None`
    /// for a blank line. Lines that reach a registered command are offered to
    /// the history store, which drops `history ...` lines itself. A `mean`
    /// operand that is not a float aborts the line before it is recorded.
    pub fn handle_command_input(&self, raw: &str) -> Option<String> {
        let line = raw.trim();
        let invocation = tokenize(line)?;
        match self.command_handler.execute_command(&invocation.name, &invocation.args) {
            Ok(output) => {
                info!(command = %invocation.name, "Command executed");
                self.history.borrow_mut().add(line);
                Some(output)
            }
            Err(err @ CommandError::UnknownCommand(_)) => {
                error!(command = %invocation.name, "Unknown command");
                Some(err.to_string())
            }
            Err(err @ CommandError::InvalidFloat(_)) => {
                error!(command = %invocation.name, error = %err, "Error executing command");
                Some(err.to_string())
            }
            Err(err) => {
                error!(command = %invocation.name, error = %err, "Error executing command");
                self.history.borrow_mut().add(line);
                Some(err.to_string())
            }
        }
    }

    /// Runs until `exit`, an interrupt, or end of input.
    pub fn run<R, W>(&mut self, reader: &mut R, out: &mut W) -> Result<()>
    where
        R: LineReader,
        W: Write,
    {
        if self.settings.load_history_on_start {
            writeln_ignore_broken_pipe(out, self.load_startup_history())?;
        }
        writeln_ignore_broken_pipe(out, MENU)?;
        info!(environment = %self.settings.environment, "Application started.");

        let result = self.read_eval_print(reader, out);
        info!("Application shutdown.");
        result
    }

    fn read_eval_print<R: LineReader, W: Write>(&mut self, reader: &mut R, out: &mut W) -> Result<()> {
        loop {
            match reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => {
                    if is_exit(&line) {
                        writeln_ignore_broken_pipe(out, "Exiting...")?;
                        info!("Application exit.");
                        return Ok(());
                    }
                    if let Some(output) = self.handle_command_input(&line) {
                        writeln_ignore_broken_pipe(out, output)?;
                    }
                    out.flush()?;
                }
                ReadOutcome::Interrupted => {
                    info!("Application interrupted and exiting gracefully.");
                    return Ok(());
                }
                ReadOutcome::Eof => {
                    info!("End of input, exiting.");
                    return Ok(());
                }
            }
        }
    }
}

pub fn start_repl(settings: Settings) -> Result<()> {
    let mut app = App::new(settings);
    let mut rl = app.editor()?;
    let stdout = std::io::stdout();
    app.run(&mut rl, &mut stdout.lock())
}
