// parser.rs

/// A command name and the arguments that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Splits `line` on runs of whitespace. Returns `None` when there is no
/// command name (empty or all-whitespace input).
pub fn tokenize(line: &str) -> Option<Invocation> {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    Some(Invocation { name, args: tokens.collect() })
}

pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_args() {
        let inv = tokenize("  add   3\t5 ").unwrap();
        assert_eq!(inv.name, "add");
        assert_eq!(inv.args, vec!["3", "5"]);
    }

    #[test]
    fn name_only() {
        let inv = tokenize("history").unwrap();
        assert_eq!(inv.name, "history");
        assert!(inv.args.is_empty());
    }

    #[test]
    fn blank_line_has_no_command() {
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize("  \t "), None);
    }

    #[test]
    fn exit_matches_any_case() {
        assert!(is_exit("exit"));
        assert!(is_exit("  EXIT \n"));
        assert!(is_exit("Exit"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit("exits"));
    }
}
