//! Input decoder for raw transport bytes.
//!
//! Classifies each byte into a logical input event and swallows terminal
//! escape sequences (ESC plus the next two bytes, e.g. arrow keys) so they
//! never reach the line buffer.
//!
//! This is a pure decoder - it doesn't manage buffers or I/O.

/// Escape character
pub const ESC: u8 = 0x1b;

/// Delete, sent by most terminals for the backspace key
pub const DEL: u8 = 0x7f;

/// Out-of-range sentinel some UART drivers report for an empty read
pub const SENTINEL: u8 = 0xff;

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Normal input mode
    Normal,

    /// Saw ESC, next byte is discarded
    EscapeWaitFirst,

    /// Discarded one byte after ESC, next byte is discarded too
    EscapeWaitSecond,
}

/// Logical input event from the transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Nothing to do (ignored byte or part of an escape sequence)
    None,

    /// Data byte for the line buffer
    Byte(u8),

    /// Backspace key (DEL)
    Backspace,

    /// Enter key (line feed or carriage return)
    Enter,
}

/// Byte decoder with escape sequence swallowing.
///
/// The state survives between calls, so an escape sequence split across two
/// ticks is still discarded as a whole.
#[derive(Debug)]
pub struct InputDecoder {
    state: InputState,
}

impl InputDecoder {
    /// Create new decoder in Normal state.
    pub fn new() -> Self {
        Self {
            state: InputState::Normal,
        }
    }

    /// Decode one byte into an input event.
    ///
    /// ```rust,ignore
    /// assert_eq!(decoder.decode_byte(b'h'), InputEvent::Byte(b'h'));
    /// assert_eq!(decoder.decode_byte(0x7f), InputEvent::Backspace);
    ///
    /// // Up arrow (ESC [ A) disappears entirely
    /// assert_eq!(decoder.decode_byte(0x1b), InputEvent::None);
    /// assert_eq!(decoder.decode_byte(b'['), InputEvent::None);
    /// assert_eq!(decoder.decode_byte(b'A'), InputEvent::None);
    /// ```
    pub fn decode_byte(&mut self, byte: u8) -> InputEvent {
        match self.state {
            InputState::Normal => self.decode_normal(byte),
            InputState::EscapeWaitFirst => {
                log::trace!("escape: discarding {:#04x}", byte);
                self.state = InputState::EscapeWaitSecond;
                InputEvent::None
            }
            InputState::EscapeWaitSecond => {
                log::trace!("escape: discarding {:#04x}", byte);
                self.state = InputState::Normal;
                InputEvent::None
            }
        }
    }

    fn decode_normal(&mut self, byte: u8) -> InputEvent {
        match byte {
            0 | SENTINEL => InputEvent::None,

            b'\r' | b'\n' => InputEvent::Enter,

            DEL => InputEvent::Backspace,

            ESC => {
                self.state = InputState::EscapeWaitFirst;
                InputEvent::None
            }

            other => InputEvent::Byte(other),
        }
    }

    /// Reset decoder state to Normal.
    pub fn reset(&mut self) {
        self.state = InputState::Normal;
    }

    /// Current decoder state.
    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}
