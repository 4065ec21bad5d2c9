//! Saved copy of the last executed line for repeat-last-command.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.

#![cfg_attr(not(feature = "repeat"), allow(unused_variables))]

#[cfg(not(feature = "repeat"))]
use core::marker::PhantomData;

/// Last executed line.
///
/// When `repeat` feature is enabled, keeps a copy of the line bytes.
/// When disabled, zero-size stub that no-ops all operations.
#[derive(Debug)]
pub struct LastLine<const N: usize> {
    #[cfg(feature = "repeat")]
    line: heapless::Vec<u8, N>,

    #[cfg(not(feature = "repeat"))]
    _phantom: PhantomData<[u8; N]>,
}

impl<const N: usize> LastLine<N> {
    /// Create an empty saved line.
    #[cfg(feature = "repeat")]
    pub fn new() -> Self {
        Self {
            line: heapless::Vec::new(),
        }
    }

    /// Create an empty saved line (stub version).
    #[cfg(not(feature = "repeat"))]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Replace the saved line.
    #[cfg(feature = "repeat")]
    pub fn save(&mut self, line: &[u8]) {
        self.line = heapless::Vec::from_slice(line).unwrap_or_default();
    }

    /// Replace the saved line (stub version - no-op).
    #[cfg(not(feature = "repeat"))]
    pub fn save(&mut self, line: &[u8]) {}

    /// Overwrite `buffer` with the saved line.
    #[cfg(feature = "repeat")]
    pub fn restore_into(&self, buffer: &mut heapless::Vec<u8, N>) {
        buffer.clone_from(&self.line);
    }

    /// Overwrite `buffer` with the saved line (stub version - no-op).
    #[cfg(not(feature = "repeat"))]
    pub fn restore_into(&self, buffer: &mut heapless::Vec<u8, N>) {}

    /// Saved bytes.
    #[cfg(feature = "repeat")]
    pub fn as_bytes(&self) -> &[u8] {
        &self.line
    }

    /// Saved bytes (stub version - always empty).
    #[cfg(not(feature = "repeat"))]
    pub fn as_bytes(&self) -> &[u8] {
        &[]
    }

    /// Forget the saved line.
    #[cfg(feature = "repeat")]
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// Forget the saved line (stub version - no-op).
    #[cfg(not(feature = "repeat"))]
    pub fn clear(&mut self) {}
}

impl<const N: usize> Default for LastLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "repeat")]
    fn test_save_and_restore() {
        let mut last = LastLine::<16>::new();
        last.save(b"temp=3");

        let mut buffer: heapless::Vec<u8, 16> = heapless::Vec::new();
        last.restore_into(&mut buffer);
        assert_eq!(buffer.as_slice(), b"temp=3");
        assert_eq!(last.as_bytes(), b"temp=3");
    }

    #[test]
    #[cfg(feature = "repeat")]
    fn test_restore_overwrites_buffer() {
        let mut last = LastLine::<16>::new();
        last.save(b"ab");

        let mut buffer: heapless::Vec<u8, 16> = heapless::Vec::new();
        buffer.extend_from_slice(b"xyz123").unwrap();
        last.restore_into(&mut buffer);
        assert_eq!(buffer.as_slice(), b"ab");
    }

    #[test]
    #[cfg(feature = "repeat")]
    fn test_save_replaces_previous() {
        let mut last = LastLine::<16>::new();
        last.save(b"first line");
        last.save(b"two");
        assert_eq!(last.as_bytes(), b"two");

        last.clear();
        assert!(last.as_bytes().is_empty());
    }

    #[test]
    #[cfg(not(feature = "repeat"))]
    fn test_stub_keeps_nothing() {
        let mut last = LastLine::<16>::new();
        last.save(b"temp=3");
        assert!(last.as_bytes().is_empty());

        let mut buffer: heapless::Vec<u8, 16> = heapless::Vec::new();
        buffer.push(b'x').unwrap();
        last.restore_into(&mut buffer);
        assert_eq!(buffer.as_slice(), b"x");
    }
}
