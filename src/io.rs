//! Byte I/O abstraction for the serial transport.
//!
//! The `SerialIo` trait is the only capability the shell needs from the
//! platform: how many bytes are waiting, a non-blocking read and a
//! synchronous write. It can be implemented over a UART driver, USB CDC,
//! an RTOS queue or stdio.

use core::fmt;

/// Platform-agnostic byte transport.
///
/// - `read()` MUST NOT block; returning fewer bytes than requested is fine
/// - `write()` is synchronous but MUST NOT block indefinitely
pub trait SerialIo {
    /// Platform-specific error type
    type Error;

    /// Number of received bytes that can be read without waiting.
    fn bytes_available(&mut self) -> Result<usize, Self::Error>;

    /// Non-blocking read into `buf`.
    ///
    /// Returns the number of bytes written to `buf` (may be less than
    /// `buf.len()`, including zero).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write all of `bytes` to the transport.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Write a string to the transport.
    ///
    /// Default implementation forwards the UTF-8 bytes to `write()`.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write(s.as_bytes())
    }
}

/// `core::fmt::Write` adapter over a `SerialIo`.
///
/// `fmt::Error` carries no payload, so the first transport error is kept
/// here and handed back through [`IoWriter::take_error`].
pub(crate) struct IoWriter<'w, IO: SerialIo> {
    io: &'w mut IO,
    error: Option<IO::Error>,
}

impl<'w, IO: SerialIo> IoWriter<'w, IO> {
    pub(crate) fn new(io: &'w mut IO) -> Self {
        Self { io, error: None }
    }

    /// Transport error recorded during formatting, if any.
    pub(crate) fn take_error(&mut self) -> Option<IO::Error> {
        self.error.take()
    }
}

impl<IO: SerialIo> fmt::Write for IoWriter<'_, IO> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.io.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl<IO: SerialIo> fmt::Debug for IoWriter<'_, IO> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoWriter")
            .field("failed", &self.error.is_some())
            .finish_non_exhaustive()
    }
}
