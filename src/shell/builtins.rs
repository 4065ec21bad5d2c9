//! Built-in commands: `help`, `params` and `echo`.
//!
//! These are ordinary registry entries; [`Shell::register_builtins`] adds them
//! in this order before any application command.
//!
//! [`Shell::register_builtins`]: crate::shell::Shell::register_builtins

use crate::command::{CommandDef, Context};
use core::fmt::{self, Write};

/// `help` - list plain commands
pub static HELP: CommandDef = CommandDef {
    name: "help",
    description: "Displays the help about commands",
    handler: help,
};

/// `params [show]` - list parameters, or print their values
pub static PARAMS: CommandDef = CommandDef {
    name: "params",
    description: "Displays the available parameters. Usage: params [show]",
    handler: params,
};

/// `echo [on|off]` - toggle echo of typed bytes
pub static ECHO: CommandDef = CommandDef {
    name: "echo",
    description: "Switch echo mode. Usage echo [on|off]",
    handler: echo,
};

fn help(ctx: &mut Context<'_, '_>, _args: &[&str]) -> fmt::Result {
    write_listing(ctx, false)
}

fn params(ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
    if args.first() == Some(&"show") {
        show_parameters(ctx)
    } else {
        write_listing(ctx, true)
    }
}

/// Asymmetric toggle. A single argument other than `on` always enables:
///
/// | echo | args      | result   |
/// |------|-----------|----------|
/// | off  | any       | enabled  |
/// | on   | none      | disabled |
/// | on   | `on`      | disabled |
/// | on   | one, else | enabled  |
/// | on   | two+      | disabled |
fn echo(ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
    let single_not_on = args.len() == 1 && args[0] != "on";
    if single_not_on || !ctx.echo_enabled() {
        ctx.set_echo(true);
        ctx.write_str("Echo enabled\n")
    } else {
        ctx.set_echo(false);
        ctx.write_str("Echo disabled\n")
    }
}

/// Write the header and one entry per matching command.
///
/// Entry format: `name:\r\n\t<description>[ (<type>)]\r\n`.
pub fn write_listing(ctx: &mut Context<'_, '_>, parameters: bool) -> fmt::Result {
    ctx.write_str(if parameters {
        "Available parameters:\n"
    } else {
        "Available commands:\n"
    })?;

    let registry = ctx.registry();
    for command in registry.iter().filter(|c| c.is_parameter() == parameters) {
        write!(ctx, "{}:\r\n\t{}", command.name(), command.description())?;
        if let Some(type_name) = command.parameter_type() {
            write!(ctx, " ({})", type_name)?;
        }
        ctx.write_str("\r\n")?;
    }
    Ok(())
}

/// Run every parameter with no arguments, printing `name=value` lines.
pub fn show_parameters(ctx: &mut Context<'_, '_>) -> fmt::Result {
    let registry = ctx.registry();
    for parameter in registry.parameters() {
        parameter.execute(ctx, &[])?;
    }
    Ok(())
}
