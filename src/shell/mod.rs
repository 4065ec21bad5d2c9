//! Shell orchestration and line processing.
//!
//! The `Shell` owns the transport, the registry, the line buffer and the
//! decoder. It is driven by calling [`Shell::tick`] periodically from the
//! application's main loop (or [`Shell::process_byte`] when bytes arrive
//! some other way, e.g. from an interrupt-fed queue).

use crate::command::{Command, Context};
use crate::config::{self, INPUT_CAPACITY, ShellConfig};
use crate::error::ShellError;
use crate::io::{IoWriter, SerialIo};
use crate::registry::Registry;
use core::fmt::Write;
use core::marker::PhantomData;

// Sub-modules
pub mod builtins;
pub mod decoder;
pub mod dispatch;
pub mod repeat;
pub mod tokenizer;

// Re-export key types
pub use decoder::{InputDecoder, InputEvent};
pub use dispatch::dispatch;
pub use repeat::LastLine;
pub use tokenizer::{Tokens, tokenize};

/// Bytes pulled from the transport per `read()` call in `tick()`
pub const READ_CHUNK: usize = 16;

/// Erase sequence for one character: back, blank, back
const ERASE: &str = "\x08 \x08";

/// Serial command shell.
///
/// Generic over:
/// - `'a`: Lifetime of registered commands (typically `'static`)
/// - `IO`: SerialIo implementation
/// - `C`: ShellConfig implementation
///
/// Lifecycle: `new()` → `register_builtins()` / `register()` → `reset()` to
/// print the first prompt → `tick()` forever.
pub struct Shell<'a, IO, C>
where
    IO: SerialIo,
    C: ShellConfig,
{
    /// Registered commands and parameters
    registry: Registry<'a>,

    /// Line being typed (TODO: use C::MAX_INPUT when const generics stabilize)
    line: heapless::Vec<u8, INPUT_CAPACITY>,

    /// Input decoder (escape sequence state machine)
    decoder: InputDecoder,

    /// Last executed line, for repeat-on-empty-enter
    last_line: LastLine<INPUT_CAPACITY>,

    /// Whether the last executed line succeeded
    last_ok: bool,

    /// Echo typed bytes back to the terminal
    echo: bool,

    /// I/O interface
    io: IO,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, C> core::fmt::Debug for Shell<'_, IO, C>
where
    IO: SerialIo,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("registry", &self.registry)
            .field("line", &self.line.as_slice())
            .field("decoder", &self.decoder)
            .field("last_ok", &self.last_ok)
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Core methods
// ============================================================================

impl<'a, IO, C> Shell<'a, IO, C>
where
    IO: SerialIo,
    C: ShellConfig,
{
    /// Create new Shell over a transport.
    ///
    /// The registry starts empty and nothing is written. Call `reset()` once
    /// registration is done to print the first prompt.
    pub fn new(io: IO) -> Self {
        Self {
            registry: Registry::new(config::commands_limit::<C>()),
            line: heapless::Vec::new(),
            decoder: InputDecoder::new(),
            last_line: LastLine::new(),
            last_ok: false,
            echo: C::ECHO_DEFAULT,
            io,
            _config: PhantomData,
        }
    }

    /// Register a command or parameter.
    ///
    /// Fails with `RegistryFull` once `C::MAX_COMMANDS` entries exist; the
    /// registry is left unchanged in that case.
    pub fn register(&mut self, command: &'a dyn Command) -> Result<(), ShellError> {
        self.registry.register(command)
    }

    /// Register `help`, `params` and `echo`.
    pub fn register_builtins(&mut self) -> Result<(), ShellError> {
        self.registry.register(&builtins::HELP)?;
        self.registry.register(&builtins::PARAMS)?;
        self.registry.register(&builtins::ECHO)
    }

    /// Clear the line, the saved line and the decoder, then print the prompt.
    pub fn reset(&mut self) -> Result<(), IO::Error> {
        self.line.clear();
        self.last_line.clear();
        self.last_ok = false;
        self.decoder.reset();
        self.io.write_str(C::PROMPT)
    }

    /// Forget whether the last line succeeded.
    ///
    /// A following empty Enter will not repeat anything.
    pub fn enable(&mut self) {
        self.last_ok = false;
    }

    /// Same as [`enable`](Self::enable); kept for host code that pairs the two.
    pub fn disable(&mut self) {
        self.last_ok = false;
    }

    /// Drain every byte the transport currently has and process it.
    ///
    /// Never blocks. Returns early with the first transport error.
    pub fn tick(&mut self) -> Result<(), IO::Error> {
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let available = self.io.bytes_available()?;
            if available == 0 {
                break;
            }

            let wanted = available.min(READ_CHUNK);
            let count = self.io.read(&mut chunk[..wanted])?.min(wanted);
            if count == 0 {
                break;
            }

            for &byte in &chunk[..count] {
                self.process_byte(byte)?;
            }
        }

        Ok(())
    }

    /// Process a single byte of input.
    pub fn process_byte(&mut self, byte: u8) -> Result<(), IO::Error> {
        match self.decoder.decode_byte(byte) {
            InputEvent::None => Ok(()),

            InputEvent::Byte(b) => {
                // One slot stays reserved, as for a terminator
                let limit = config::input_limit::<C>().saturating_sub(1);
                if self.line.len() < limit && self.line.push(b).is_ok() {
                    if self.echo {
                        self.io.write(&[b])?;
                    }
                } else {
                    log::warn!("line full ({} bytes), dropping {:#04x}", limit, b);
                }
                Ok(())
            }

            InputEvent::Backspace => {
                if self.line.pop().is_some() {
                    self.io.write_str(ERASE)?;
                }
                Ok(())
            }

            InputEvent::Enter => self.handle_enter(),
        }
    }

    /// Handle Enter: run the line, record the outcome, print the prompt.
    fn handle_enter(&mut self) -> Result<(), IO::Error> {
        #[cfg(feature = "repeat")]
        if self.line.is_empty() && self.last_ok {
            self.last_line.restore_into(&mut self.line);
            log::debug!("repeating last line ({} bytes)", self.line.len());
        }

        let outcome = self.execute_line();

        self.last_ok = matches!(outcome, Ok(true));
        if self.last_ok {
            self.last_line.save(&self.line);
        }
        self.line.clear();

        outcome?;
        self.io.write_str(C::PROMPT)
    }

    /// Tokenize and dispatch the current line.
    ///
    /// Returns whether a command ran successfully. Unknown names are reported
    /// on the transport and count as failure. An empty line runs nothing and
    /// also counts as failure.
    fn execute_line(&mut self) -> Result<bool, IO::Error> {
        self.io.write_str("\n")?;

        if self.line.is_empty() {
            return Ok(false);
        }

        let line = line_str(&self.line);
        let tokens = tokenize(line, config::args_limit::<C>());

        let mut writer = IoWriter::new(&mut self.io);
        let result = if tokens.name.is_empty() {
            // Only spaces, or nothing valid as UTF-8
            Err(ShellError::unknown_command(line))
        } else {
            let mut ctx = Context::new(&mut writer, &self.registry, &mut self.echo);
            dispatch(&mut ctx, tokens.name, &tokens.args)
        };

        // Printing the report may fail too; the transport error wins either way
        let ok = match result {
            Ok(()) => true,
            Err(ShellError::UnknownCommand(name)) => {
                let _ = write!(writer, "Unknown command: \n{}\r\n", name);
                false
            }
            Err(ShellError::UnknownParameter(name)) => {
                let _ = write!(writer, "Unknown parameter: \n{}\r\n", name);
                false
            }
            Err(e) => {
                log::warn!("command '{}' failed: {}", tokens.name, e);
                false
            }
        };

        match writer.take_error() {
            Some(e) => Err(e),
            None => Ok(ok),
        }
    }

    // ========================================
    // Accessors
    // ========================================

    /// Registered commands.
    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    /// Whether typed bytes are echoed.
    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    /// Turn echo on or off from host code.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo = enabled;
    }

    /// Whether the last executed line succeeded.
    pub fn last_execution_ok(&self) -> bool {
        self.last_ok
    }

    /// Bytes typed on the current line so far.
    pub fn pending_line(&self) -> &[u8] {
        &self.line
    }

    /// Get reference to the transport.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Get mutable reference to the transport.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Get reference to the saved line (test-only).
    #[doc(hidden)]
    pub fn __test_last_line(&self) -> &[u8] {
        self.last_line.as_bytes()
    }
}

/// Longest valid UTF-8 prefix of the line.
fn line_str(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            log::warn!(
                "invalid UTF-8 at byte {}, truncating line",
                e.valid_up_to()
            );
            core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
