//! Configuration traits and implementations for buffer sizing.
//!
//! The `ShellConfig` trait allows compile-time configuration of buffer sizes,
//! capacity limits and the prompt without runtime overhead.

/// Backing storage size of the line buffer (upper bound for `MAX_INPUT`).
pub const INPUT_CAPACITY: usize = 128;

/// Backing storage size of the argument list (upper bound for `MAX_ARGS`).
pub const ARGS_CAPACITY: usize = 16;

/// Backing storage size of the registry (upper bound for `MAX_COMMANDS`).
pub const REGISTRY_CAPACITY: usize = 128;

/// Shell configuration trait defining buffer sizes, capacity limits and prompt.
///
/// All values are const (zero runtime cost). Values larger than the crate-wide
/// storage bounds are clamped to those bounds.
pub trait ShellConfig {
    /// Line buffer capacity, including the slot reserved for the terminator.
    /// At most `MAX_INPUT - 1` bytes of input are kept.
    const MAX_INPUT: usize;

    /// Maximum number of arguments after the command name
    const MAX_ARGS: usize;

    /// Maximum number of registered commands (built-ins included)
    const MAX_COMMANDS: usize;

    /// Prompt written after every completed line and on reset
    const PROMPT: &'static str;

    /// Whether typed bytes are echoed back when the shell is created
    const ECHO_DEFAULT: bool;
}

/// Effective line capacity for a config, clamped to storage.
pub(crate) const fn input_limit<C: ShellConfig>() -> usize {
    if C::MAX_INPUT > INPUT_CAPACITY {
        INPUT_CAPACITY
    } else {
        C::MAX_INPUT
    }
}

/// Effective argument limit for a config, clamped to storage.
pub(crate) const fn args_limit<C: ShellConfig>() -> usize {
    if C::MAX_ARGS > ARGS_CAPACITY {
        ARGS_CAPACITY
    } else {
        C::MAX_ARGS
    }
}

/// Effective registry limit for a config, clamped to storage.
pub(crate) const fn commands_limit<C: ShellConfig>() -> usize {
    if C::MAX_COMMANDS > REGISTRY_CAPACITY {
        REGISTRY_CAPACITY
    } else {
        C::MAX_COMMANDS
    }
}

/// Default configuration matching the classic firmware shell.
///
/// - MAX_INPUT: 64 bytes (63 usable)
/// - MAX_ARGS: 8 arguments
/// - MAX_COMMANDS: 100 commands
/// - PROMPT: `"$ "`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MAX_INPUT: usize = 64;
    const MAX_ARGS: usize = 8;
    const MAX_COMMANDS: usize = 100;
    const PROMPT: &'static str = "$ ";
    const ECHO_DEFAULT: bool = true;
}

/// Minimal configuration for resource-constrained systems.
///
/// - MAX_INPUT: 32 bytes (31 usable)
/// - MAX_ARGS: 4 arguments
/// - MAX_COMMANDS: 16 commands
/// - PROMPT: `"> "`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl ShellConfig for MinimalConfig {
    const MAX_INPUT: usize = 32;
    const MAX_ARGS: usize = 4;
    const MAX_COMMANDS: usize = 16;
    const PROMPT: &'static str = "> ";
    const ECHO_DEFAULT: bool = true;
}
