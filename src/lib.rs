//! # knob-shell
//!
//! Tiny serial command shell for microcontroller firmware, with zero heap allocation.
//!
//! **Key features:**
//! - **Static allocation** - Fixed-capacity buffers, registry of borrowed commands
//! - **Live parameters** - Typed runtime variables read and written as `name` / `name=value`
//! - **Polled** - One non-blocking `tick()` per main-loop iteration
//! - **Flexible I/O** - Platform-agnostic byte I/O trait
//!
//! ```rust,ignore
//! let gain = Parameter::new("gain", "Loop gain", 1.0f32);
//!
//! let mut shell: Shell<'_, Uart, DefaultConfig> = Shell::new(uart);
//! shell.register_builtins()?;
//! shell.register(&gain)?;
//! shell.reset()?;
//!
//! loop {
//!     shell.tick()?;
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `repeat` (default) - Enter on an empty line re-runs the last successful line
//! - `defmt` - `defmt::Format` for error types
//!
//! Diagnostics go through the `log` facade; install any logger to see them.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod io;

pub mod error;

pub mod command;
pub mod registry;

pub mod param;

pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::SerialIo;

// Configuration
pub use config::{DefaultConfig, MinimalConfig, ShellConfig};

// Error types
pub use error::ShellError;

// Commands
pub use command::{Command, CommandDef, CommandFn, Context};
pub use registry::Registry;

// Parameters
pub use param::{ParamValue, Parameter};

// Shell types
pub use shell::Shell;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
