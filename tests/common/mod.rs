//! Shared helpers for end-to-end tests.

use std::process::{Command, Output};

/// Helper for spawning the compiled `tappadgen` binary.
pub struct TappadGenProcess;

impl TappadGenProcess {
    /// Runs `tappadgen` with the given arguments and captures its output.
    #[must_use]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tappadgen"))
            .args(args)
            .env_remove("TAPPADGEN_MARGINS")
            .env_remove("TAPPADGEN_LOG_LEVEL")
            .output()
            .expect("failed to spawn tappadgen binary")
    }
}
