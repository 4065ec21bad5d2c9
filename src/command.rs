//! Command capability and the execution context handed to commands.
//!
//! Every registry entry is a `&dyn Command`. Plain commands are usually
//! `CommandDef` constants (name, description, function pointer); live
//! parameters are [`Parameter`](crate::param::Parameter) values. Both go
//! through the same `execute` entry point, so the dispatcher never needs to
//! know which kind it is calling.

use crate::registry::Registry;
use core::fmt;

/// A command that can be registered with the shell.
pub trait Command {
    /// Name matched against the first token of the input line.
    fn name(&self) -> &str;

    /// One-line description shown by `help` and `params`.
    fn description(&self) -> &str;

    /// Display name of the value type for live parameters, `None` otherwise.
    fn parameter_type(&self) -> Option<&str> {
        None
    }

    /// True for live-parameter commands (eligible for `name=value`).
    fn is_parameter(&self) -> bool {
        self.parameter_type().is_some()
    }

    /// Run the command.
    ///
    /// `args` excludes the command name. Output goes to `ctx` with `write!`.
    /// An `Err` means output could not be written; it does not mean the
    /// command rejected its input.
    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result;
}

/// Signature of a function-backed command.
pub type CommandFn = fn(&mut Context<'_, '_>, &[&str]) -> fmt::Result;

/// Const-initializable command descriptor backed by a plain function.
///
/// ```rust,ignore
/// fn reboot(ctx: &mut Context<'_, '_>, _args: &[&str]) -> core::fmt::Result {
///     writeln!(ctx, "rebooting")
/// }
///
/// static REBOOT: CommandDef = CommandDef {
///     name: "reboot",
///     description: "Restart the board",
///     handler: reboot,
/// };
/// ```
#[derive(Clone, Copy)]
pub struct CommandDef {
    /// Command name
    pub name: &'static str,

    /// Command description (shown in help)
    pub description: &'static str,

    /// Function invoked on dispatch
    pub handler: CommandFn,
}

impl Command for CommandDef {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
        (self.handler)(ctx, args)
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// What a running command can see and touch.
///
/// Output written here goes straight to the transport. The registry is
/// read-only while commands run; the echo flag is the one piece of shell
/// state a command may change.
pub struct Context<'s, 'a> {
    out: &'s mut dyn fmt::Write,
    registry: &'s Registry<'a>,
    echo: &'s mut bool,
}

impl<'s, 'a> Context<'s, 'a> {
    /// Create a context over an output sink, a registry and an echo flag.
    pub fn new(out: &'s mut dyn fmt::Write, registry: &'s Registry<'a>, echo: &'s mut bool) -> Self {
        Self {
            out,
            registry,
            echo,
        }
    }

    /// Registry of the shell running this command.
    pub fn registry(&self) -> &'s Registry<'a> {
        self.registry
    }

    /// Whether typed bytes are currently echoed.
    pub fn echo_enabled(&self) -> bool {
        *self.echo
    }

    /// Turn echo of typed bytes on or off.
    pub fn set_echo(&mut self, enabled: bool) {
        *self.echo = enabled;
    }
}

impl fmt::Write for Context<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

impl fmt::Debug for Context<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("registry", &self.registry)
            .field("echo", &*self.echo)
            .finish_non_exhaustive()
    }
}
