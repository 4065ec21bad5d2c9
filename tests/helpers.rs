//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::MockSerial;
use knob_shell::config::DefaultConfig;
use knob_shell::{Shell, ShellConfig};

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell with the built-ins registered and the first prompt consumed.
pub fn create_test_shell<'a>() -> Shell<'a, MockSerial, DefaultConfig> {
    create_shell_with(MockSerial::new())
}

/// Same as `create_test_shell`, over a caller-built transport and any config.
pub fn create_shell_with<'a, C: ShellConfig>(io: MockSerial) -> Shell<'a, MockSerial, C> {
    let mut shell = Shell::new(io);
    shell.register_builtins().unwrap();
    shell.reset().unwrap();
    shell.io_mut().clear_output();
    shell
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Execute a command string through `tick()` and return the output.
pub fn execute_command<C: ShellConfig>(shell: &mut Shell<'_, MockSerial, C>, cmd: &str) -> String {
    shell.io_mut().clear_output();
    shell.io_mut().push_input(cmd);
    shell.io_mut().push_input("\r");
    shell.tick().unwrap();
    shell.io().output()
}

/// Type input without executing (no trailing newline).
pub fn type_input<C: ShellConfig>(shell: &mut Shell<'_, MockSerial, C>, input: &str) {
    shell.io_mut().push_input(input);
    shell.tick().unwrap();
}

/// Feed raw bytes through `tick()`.
pub fn type_bytes<C: ShellConfig>(shell: &mut Shell<'_, MockSerial, C>, bytes: &[u8]) {
    shell.io_mut().push_bytes(bytes);
    shell.tick().unwrap();
}

/// Press Enter and return the output it produced.
pub fn press_enter<C: ShellConfig>(shell: &mut Shell<'_, MockSerial, C>) -> String {
    shell.io_mut().clear_output();
    type_bytes(shell, b"\r");
    shell.io().output()
}

/// Press the backspace key (DEL) once.
pub fn press_backspace<C: ShellConfig>(shell: &mut Shell<'_, MockSerial, C>) {
    type_bytes(shell, &[0x7f]);
}

/// Current line as text.
pub fn pending<C: ShellConfig>(shell: &Shell<'_, MockSerial, C>) -> String {
    String::from_utf8_lossy(shell.pending_line()).into_owned()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}

/// Assert that output ends with the default prompt.
pub fn assert_prompt(output: &str) {
    assert!(
        output.ends_with(DefaultConfig::PROMPT),
        "Expected prompt at end of output, got: {:?}",
        output
    );
}
