//! Line tokenizer.
//!
//! Splits a completed line on the literal space character into a command
//! name and a bounded list of arguments. Tokens borrow from the line; nothing
//! is copied and the line itself is left untouched.
//!
//! Runs of spaces count as one separator and leading or trailing spaces are
//! ignored, so no token is ever empty: `" a  b "` yields the name `a` and the
//! argument `["b"]`. Once the argument limit is reached the rest of the line,
//! inner spaces included, becomes the last argument.

use crate::config::ARGS_CAPACITY;

/// Separator between tokens
pub const SEPARATOR: char = ' ';

/// A tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'l> {
    /// First token (may contain `=` for assignments)
    pub name: &'l str,

    /// Remaining tokens
    pub args: heapless::Vec<&'l str, ARGS_CAPACITY>,
}

/// Split `line` into a command name and at most `max_args` arguments.
///
/// `max_args` is clamped to [`ARGS_CAPACITY`].
pub fn tokenize(line: &str, max_args: usize) -> Tokens<'_> {
    let max_args = max_args.min(ARGS_CAPACITY);
    let mut args: heapless::Vec<&str, ARGS_CAPACITY> = heapless::Vec::new();

    let line = line.trim_start_matches(SEPARATOR);
    let (name, mut rest) = line.split_once(SEPARATOR).unwrap_or((line, ""));

    while args.len() < max_args {
        rest = rest.trim_start_matches(SEPARATOR);
        if rest.is_empty() {
            break;
        }

        let (arg, tail) = if args.len() + 1 == max_args {
            (rest.trim_end_matches(SEPARATOR), "")
        } else {
            rest.split_once(SEPARATOR).unwrap_or((rest, ""))
        };
        // Loop bound keeps args within max_args <= ARGS_CAPACITY
        let _ = args.push(arg);
        rest = tail;
    }

    Tokens { name, args }
}
