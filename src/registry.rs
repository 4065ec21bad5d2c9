//! Command registry.
//!
//! An ordered, append-only list of commands. Registration order is the lookup
//! scan order and the order of `help` / `params` listings, so whichever
//! command was registered first wins when two share a name.

use crate::command::Command;
use crate::config::REGISTRY_CAPACITY;
use crate::error::ShellError;
use core::fmt;

/// Ordered, bounded collection of registered commands.
pub struct Registry<'a> {
    commands: heapless::Vec<&'a dyn Command, REGISTRY_CAPACITY>,
    limit: usize,
}

impl<'a> Registry<'a> {
    /// Create an empty registry accepting at most `limit` commands.
    ///
    /// `limit` is clamped to [`REGISTRY_CAPACITY`].
    pub fn new(limit: usize) -> Self {
        Self {
            commands: heapless::Vec::new(),
            limit: limit.min(REGISTRY_CAPACITY),
        }
    }

    /// Append a command.
    ///
    /// Duplicate names are accepted; the later entry is shadowed on lookup.
    pub fn register(&mut self, command: &'a dyn Command) -> Result<(), ShellError> {
        if self.commands.len() >= self.limit {
            log::warn!(
                "registry full ({} commands), dropping '{}'",
                self.limit,
                command.name()
            );
            return Err(ShellError::RegistryFull {
                capacity: self.limit,
            });
        }
        self.commands
            .push(command)
            .map_err(|_| ShellError::RegistryFull {
                capacity: self.limit,
            })
    }

    /// First command registered under exactly `name` (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&'a dyn Command> {
        self.commands.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Command> + '_ {
        self.commands.iter().copied()
    }

    /// Live-parameter commands in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &'a dyn Command> + '_ {
        self.iter().filter(|cmd| cmd.is_parameter())
    }

    /// Plain (non-parameter) commands in registration order.
    pub fn plain_commands(&self) -> impl Iterator<Item = &'a dyn Command> + '_ {
        self.iter().filter(|cmd| !cmd.is_parameter())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximum number of commands this registry accepts.
    pub fn capacity(&self) -> usize {
        self.limit
    }
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.commands.len())
            .field("capacity", &self.limit)
            .finish_non_exhaustive()
    }
}
