// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::history::HISTORY_SUB_COMMANDS;

/// Completes command names in the first position and sub-commands after
/// `history`.
pub struct CommandCompleter {
    names: Vec<String>,
}

impl CommandCompleter {
    pub fn new(mut names: Vec<String>) -> Self {
        names.push("exit".to_string());
        names.sort();
        names.dedup();
        Self { names }
    }

    /// Start of the word being completed and the matching candidates.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let prefix = &head[start..];
        let preceding: Vec<&str> = head[..start].split_whitespace().collect();

        let matches = match preceding.as_slice() {
            [] => self
                .names
                .iter()
                .filter(|n| n.starts_with(prefix))
                .cloned()
                .collect(),
            ["history"] => HISTORY_SUB_COMMANDS
                .iter()
                .filter(|s| s.starts_with(prefix))
                .map(|s| s.to_string())
                .collect(),
            _ => Vec::new(),
        };
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|n| Pair { display: n.clone(), replacement: format!("{} ", n) })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter::new(
            ["add", "divide", "history", "mean", "multiply", "subtract"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn completes_command_names() {
        let c = completer();
        assert_eq!(c.candidates("m", 1), (0, vec!["mean".to_string(), "multiply".to_string()]));
        assert_eq!(c.candidates("ex", 2), (0, vec!["exit".to_string()]));
        assert_eq!(c.candidates("z", 1), (0, vec![]));
    }

    #[test]
    fn completes_history_sub_commands() {
        let c = completer();
        assert_eq!(c.candidates("history s", 9), (8, vec!["show".to_string(), "save".to_string()]));
        assert_eq!(c.candidates("history ", 8).1.len(), 5);
    }

    #[test]
    fn multibyte_whitespace_separates_words() {
        let c = completer();
        let line = "history\u{a0}s";
        assert_eq!(
            c.candidates(line, line.len()),
            (9, vec!["show".to_string(), "save".to_string()])
        );
        let line = "history\u{3000}cl";
        assert_eq!(c.candidates(line, line.len()), (10, vec!["clear".to_string()]));
        let line = "add\u{a0}";
        assert_eq!(c.candidates(line, line.len()), (5, vec![]));
    }

    #[test]
    fn no_completion_for_numeric_arguments() {
        let c = completer();
        assert_eq!(c.candidates("add 1", 5), (4, vec![]));
    }
}
