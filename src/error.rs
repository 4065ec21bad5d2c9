//! Error types for shell operations.
//!
//! `ShellError` covers registration and dispatch failures. None of them is
//! fatal: a failed line is reported on the transport and the shell keeps
//! accepting input. Transport errors are not wrapped here; they surface as the
//! transport's own `SerialIo::Error`.

use crate::config::INPUT_CAPACITY;
use core::fmt;

/// Name carried by dispatch errors (always fits: a line never exceeds the buffer).
pub type ErrorName = heapless::String<INPUT_CAPACITY>;

/// Shell error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// No command with this name, and the name is not an assignment
    UnknownCommand(ErrorName),

    /// Left side of `name=value` is not a registered parameter
    UnknownParameter(ErrorName),

    /// Registry already holds its configured maximum of commands
    RegistryFull {
        /// Configured registry capacity
        capacity: usize,
    },

    /// Command output could not be formatted or written
    OutputFailed,
}

impl ShellError {
    /// Build `UnknownCommand` from a borrowed name.
    pub fn unknown_command(name: &str) -> Self {
        ShellError::UnknownCommand(truncated(name))
    }

    /// Build `UnknownParameter` from a borrowed name.
    pub fn unknown_parameter(name: &str) -> Self {
        ShellError::UnknownParameter(truncated(name))
    }
}

/// Copy `name`, cutting at a char boundary if it does not fit.
fn truncated(name: &str) -> ErrorName {
    let mut end = name.len().min(INPUT_CAPACITY);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = ErrorName::new();
    let _ = out.push_str(&name[..end]);
    out
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            ShellError::UnknownParameter(name) => write!(f, "Unknown parameter: {}", name),
            ShellError::RegistryFull { capacity } => {
                write!(f, "Registry full ({} commands)", capacity)
            }
            ShellError::OutputFailed => write!(f, "Output failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ShellError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ShellError::UnknownCommand(name) => {
                defmt::write!(f, "UnknownCommand({=str})", name.as_str())
            }
            ShellError::UnknownParameter(name) => {
                defmt::write!(f, "UnknownParameter({=str})", name.as_str())
            }
            ShellError::RegistryFull { capacity } => {
                defmt::write!(f, "RegistryFull({=usize})", capacity)
            }
            ShellError::OutputFailed => defmt::write!(f, "OutputFailed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;
    use std::string::String;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ShellError::unknown_command("frobnicate")),
            "Unknown command: frobnicate"
        );
        assert_eq!(
            format!("{}", ShellError::unknown_parameter("gain")),
            "Unknown parameter: gain"
        );
        assert_eq!(
            format!("{}", ShellError::RegistryFull { capacity: 16 }),
            "Registry full (16 commands)"
        );
        assert_eq!(format!("{}", ShellError::OutputFailed), "Output failed");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ShellError::unknown_command("x"),
            ShellError::unknown_command("x")
        );
        assert_ne!(
            ShellError::unknown_command("x"),
            ShellError::unknown_parameter("x")
        );
    }

    #[test]
    fn test_long_name_truncated_on_char_boundary() {
        let mut name = String::new();
        for _ in 0..(INPUT_CAPACITY - 1) {
            name.push('a');
        }
        name.push('ø'); // two bytes, straddles the capacity

        match ShellError::unknown_command(&name) {
            ShellError::UnknownCommand(stored) => {
                assert_eq!(stored.len(), INPUT_CAPACITY - 1);
                assert!(stored.chars().all(|c| c == 'a'));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
