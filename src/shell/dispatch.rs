//! Command dispatch with the `name=value` assignment fallback.
//!
//! Lookup is two-phase:
//! 1. exact match of the whole command token;
//! 2. otherwise, if the token contains `=`, the part before the first `=` must
//!    name a live parameter, which is invoked with the part after it as its
//!    only argument.
//!
//! So `gain=2` and `gain 2` run the same handler with the same argument.

use crate::command::Context;
use crate::error::ShellError;

/// Assignment operator
pub const ASSIGN: char = '=';

/// Resolve `name` and run the matching command.
///
/// `UnknownCommand` carries the command token only, never the arguments.
pub fn dispatch(ctx: &mut Context<'_, '_>, name: &str, args: &[&str]) -> Result<(), ShellError> {
    let registry = ctx.registry();

    if let Some(command) = registry.find(name) {
        log::debug!("dispatch '{}' with {} argument(s)", name, args.len());
        return command
            .execute(ctx, args)
            .map_err(|_| ShellError::OutputFailed);
    }

    let Some((left, right)) = name.split_once(ASSIGN) else {
        log::debug!("unknown command '{}'", name);
        return Err(ShellError::unknown_command(name));
    };

    match registry.find(left) {
        Some(command) if command.is_parameter() => {
            log::debug!("assign '{}' = '{}'", left, right);
            command
                .execute(ctx, &[right])
                .map_err(|_| ShellError::OutputFailed)
        }
        _ => {
            log::debug!("unknown parameter '{}'", left);
            Err(ShellError::unknown_parameter(left))
        }
    }
}
