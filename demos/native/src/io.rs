//! Terminal transport for the native demo.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use knob_shell::SerialIo;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Set when the user asks to leave (Ctrl-C, Ctrl-D or `quit`).
pub static QUIT: AtomicBool = AtomicBool::new(false);

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// Raw mode hands every key to the shell unprocessed: no local echo, no line
/// buffering, arrow keys arrive as escape sequences.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// SerialIo Implementation
// =============================================================================

/// Stdin/stdout pretending to be a UART.
///
/// A reader thread blocks on stdin and forwards bytes over a channel, so
/// `bytes_available()` and `read()` never block, like a receive FIFO.
pub struct StdioSerial {
    rx: Receiver<u8>,
    fifo: VecDeque<u8>,
    stdout: io::Stdout,
}

impl StdioSerial {
    /// Start the stdin reader thread.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut stdin = io::stdin().lock();
            let mut buf = [0u8; 64];
            loop {
                match stdin.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        for &byte in &buf[..n] {
                            if tx.send(byte).is_err() {
                                return;
                            }
                        }
                    }
                }
            }
        });

        Self {
            rx,
            fifo: VecDeque::new(),
            stdout: io::stdout(),
        }
    }

    /// Move whatever the reader thread has produced into the FIFO.
    fn pump(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(CTRL_C | CTRL_D) => QUIT.store(true, Ordering::Relaxed),
                Ok(byte) => self.fifo.push_back(byte),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    QUIT.store(true, Ordering::Relaxed);
                    break;
                }
            }
        }
    }
}

impl SerialIo for StdioSerial {
    type Error = io::Error;

    fn bytes_available(&mut self) -> Result<usize, Self::Error> {
        self.pump();
        Ok(self.fifo.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let count = buf.len().min(self.fifo.len());
        for (slot, byte) in buf.iter_mut().zip(self.fifo.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut out = self.stdout.lock();
        // Raw mode turns off output post-processing; add the carriage return
        for &byte in bytes {
            if byte == b'\n' {
                out.write_all(b"\r\n")?;
            } else {
                out.write_all(&[byte])?;
            }
        }
        out.flush()
    }
}
