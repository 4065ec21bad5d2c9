//! Native demo: knob-shell on a raw-mode terminal.
//!
//! Simulates a small heater controller. The control loop runs every 10 ms and
//! calls `tick()` once per iteration, just like firmware would from its main
//! loop. Tune it live:
//!
//! ```text
//! $ params show
//! $ setpoint=30
//! $ gain 4
//! $ temp
//! $            (empty Enter repeats the last command)
//! ```
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run 2>knob.log
//! ```

mod io;

use io::{QUIT, RawModeGuard, StdioSerial};
use knob_shell::{Command, CommandDef, Context, DefaultConfig, Parameter, SerialIo, Shell};
use std::fmt::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(10);

static STARTED: OnceLock<Instant> = OnceLock::new();
static LEDS: AtomicU8 = AtomicU8::new(0);

// =============================================================================
// Commands
// =============================================================================

fn uptime(ctx: &mut Context<'_, '_>, _args: &[&str]) -> fmt::Result {
    let elapsed = STARTED.get().map(Instant::elapsed).unwrap_or_default();
    writeln!(ctx, "up {}.{:03} s", elapsed.as_secs(), elapsed.subsec_millis())
}

fn led(ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
    let Some(index) = args.first().and_then(|a| a.parse::<u8>().ok()).filter(|i| *i < 8) else {
        let leds = LEDS.load(Ordering::Relaxed);
        for i in 0..8 {
            let state = if leds & (1 << i) != 0 { "on" } else { "off" };
            writeln!(ctx, "led{}: {}", i, state)?;
        }
        return Ok(());
    };

    let mask = 1u8 << index;
    match args.get(1).copied() {
        Some("on") => LEDS.fetch_or(mask, Ordering::Relaxed),
        Some("off") => LEDS.fetch_and(!mask, Ordering::Relaxed),
        _ => LEDS.fetch_xor(mask, Ordering::Relaxed),
    };
    let on = LEDS.load(Ordering::Relaxed) & mask != 0;
    writeln!(ctx, "led{}: {}", index, if on { "on" } else { "off" })
}

fn quit(ctx: &mut Context<'_, '_>, _args: &[&str]) -> fmt::Result {
    QUIT.store(true, Ordering::Relaxed);
    writeln!(ctx, "bye")
}

static UPTIME: CommandDef = CommandDef {
    name: "uptime",
    description: "Time since start",
    handler: uptime,
};

static LED: CommandDef = CommandDef {
    name: "led",
    description: "Show or switch LEDs. Usage: led [n] [on|off]",
    handler: led,
};

static QUIT_CMD: CommandDef = CommandDef {
    name: "quit",
    description: "Leave the demo",
    handler: quit,
};

// =============================================================================
// Main Loop
// =============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    STARTED.get_or_init(Instant::now);

    // Parameters must outlive the shell that borrows them
    let temp = Parameter::new("temp", "Measured temperature", 18.0f64);
    let setpoint = Parameter::new("setpoint", "Target temperature", 21.0f64);
    let gain = Parameter::new("gain", "Proportional gain", 0.5f32);
    let heater = Parameter::new("heater", "Heater output enabled", true);
    let loss = Parameter::new("loss", "Heat loss per second, milli-degrees", 20u16);

    let _guard = RawModeGuard::new()?;

    let mut shell: Shell<'_, StdioSerial, DefaultConfig> = Shell::new(StdioSerial::spawn());
    shell.register_builtins().map_err(|e| e.to_string())?;

    let commands: [&dyn Command; 8] = [
        &UPTIME, &LED, &QUIT_CMD, &temp, &setpoint, &gain, &heater, &loss,
    ];
    for command in commands {
        shell.register(command).map_err(|e| e.to_string())?;
    }

    shell
        .io_mut()
        .write_str("knob-shell demo. Try 'help', 'params show', 'setpoint=30'. Ctrl-C quits.\n")?;
    shell.reset()?;

    let dt = TICK.as_secs_f64();
    while !QUIT.load(Ordering::Relaxed) {
        shell.tick()?;

        // Toy plant: proportional heating against a constant loss
        let mut t = temp.get();
        if heater.get() {
            let drive = f64::from(gain.get()) * (setpoint.get() - t);
            t += drive.max(0.0) * dt;
        }
        t -= f64::from(loss.get()) / 1000.0 * dt;
        temp.set(t);

        thread::sleep(TICK);
    }

    shell.io_mut().write_str("\n")?;
    log::info!("demo finished after {:?}", STARTED.get().map(Instant::elapsed));
    Ok(())
}
