#![no_std]
#![no_main]

use core::fmt::{self, Write};
use knob_shell::config::MinimalConfig;
use knob_shell::{CommandDef, Context, Parameter, SerialIo, Shell};
use panic_halt as _;

// Minimal SerialIo implementation - measures only struct size
pub struct MinimalIo {
    rx: heapless::Deque<u8, 16>,
}

impl SerialIo for MinimalIo {
    type Error = ();

    fn bytes_available(&mut self) -> Result<usize, Self::Error> {
        Ok(self.rx.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.rx.pop_front() {
                Some(byte) => *slot = byte,
                None => break,
            }
            count += 1;
        }
        Ok(count)
    }

    fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}

// Command implementation
fn status_cmd(ctx: &mut Context<'_, '_>, _args: &[&str]) -> fmt::Result {
    ctx.write_str("OK\n")
}

static STATUS: CommandDef = CommandDef {
    name: "status",
    description: "Show status",
    handler: status_cmd,
};

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    // One float and one integer parameter pull in both conversion paths
    let gain = Parameter::new("gain", "Gain", 1.0f32);
    let count = Parameter::new("count", "Count", 0u32);

    let mut io = MinimalIo {
        rx: heapless::Deque::new(),
    };
    for &byte in b"gain=2\r" {
        let _ = io.rx.push_back(byte);
    }

    let mut shell: Shell<'_, MinimalIo, MinimalConfig> = Shell::new(io);
    let _ = shell.register_builtins();
    let _ = shell.register(&STATUS);
    let _ = shell.register(&gain);
    let _ = shell.register(&count);

    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(shell.reset());

    loop {
        let _ = core::hint::black_box(shell.tick());
        core::hint::black_box(&shell);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
