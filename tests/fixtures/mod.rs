//! Test fixtures and utilities for knob-shell testing.
//!
//! Provides:
//! - `MockSerial`: Test implementation of the SerialIo trait
//! - `SAY`, `PING`: Simple plain commands
//! - `CallCounter`: Command that counts its invocations

#![allow(dead_code)]

use knob_shell::{Command, CommandDef, Context, SerialIo};
use std::cell::Cell;
use std::collections::VecDeque;
use std::fmt::{self, Write};

// ============================================================================
// MockSerial - Test Transport Implementation
// ============================================================================

/// Mock serial transport for testing.
///
/// Provides an in-memory input queue and output capture. `read()` hands out at
/// most `chunk` bytes per call to mimic a UART FIFO.
#[derive(Debug)]
pub struct MockSerial {
    /// Input queue (simulates user typing)
    input: VecDeque<u8>,

    /// Output capture (collects all output)
    output: Vec<u8>,

    /// Maximum bytes returned by one `read()`
    chunk: usize,

    /// Number of `read()` calls so far
    reads: usize,

    /// Fail every write once set
    fail_writes: bool,
}

/// Error reported by `MockSerial` when writes are made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxError;

impl MockSerial {
    /// Create new MockSerial with empty buffers.
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            chunk: usize::MAX,
            reads: 0,
            fail_writes: false,
        }
    }

    /// Create MockSerial that returns at most `chunk` bytes per read.
    pub fn with_chunk(chunk: usize) -> Self {
        Self {
            chunk,
            ..Self::new()
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, s: &str) {
        self.push_bytes(s.as_bytes());
    }

    /// Add raw bytes to input queue.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Get captured output as string.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as bytes (useful for checking control sequences).
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Remaining input count.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Number of `read()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Make every following write fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Default for MockSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialIo for MockSerial {
    type Error = TxError;

    fn bytes_available(&mut self) -> Result<usize, Self::Error> {
        Ok(self.input.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.reads += 1;
        let count = buf.len().min(self.chunk).min(self.input.len());
        for slot in buf.iter_mut().take(count) {
            if let Some(byte) = self.input.pop_front() {
                *slot = byte;
            }
        }
        Ok(count)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(TxError);
        }
        self.output.extend_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Test Commands
// ============================================================================

fn say(ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
    ctx.write_str("said")?;
    for arg in args {
        write!(ctx, " <{}>", arg)?;
    }
    ctx.write_str("\n")
}

fn ping(ctx: &mut Context<'_, '_>, _args: &[&str]) -> fmt::Result {
    ctx.write_str("pong\n")
}

/// Test command: say (prints each argument in angle brackets)
pub const SAY: CommandDef = CommandDef {
    name: "say",
    description: "Print arguments",
    handler: say,
};

/// Test command: ping
pub const PING: CommandDef = CommandDef {
    name: "ping",
    description: "Answer pong",
    handler: ping,
};

/// Second `ping` used to check lookup precedence
pub const PING_SHADOWED: CommandDef = CommandDef {
    name: "ping",
    description: "Never reached",
    handler: say,
};

/// Command that counts how often it ran and remembers its last arguments.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
    last_args: std::cell::RefCell<Vec<String>>,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Arguments of the latest invocation.
    pub fn last_args(&self) -> Vec<String> {
        self.last_args.borrow().clone()
    }
}

impl Command for CallCounter {
    fn name(&self) -> &str {
        "count"
    }

    fn description(&self) -> &str {
        "Count invocations"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
        self.calls.set(self.calls.get() + 1);
        *self.last_args.borrow_mut() = args.iter().map(|a| a.to_string()).collect();
        writeln!(ctx, "count={}", self.calls.get())
    }
}
