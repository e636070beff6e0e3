// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Blocking execution of external commands.
//!
//! Command lines are split on whitespace; there is no shell quoting. A probe
//! is considered failed as soon as the child writes anything to stderr, even
//! if it exits successfully. There is no timeout: a hung command blocks the
//! caller until it exits.

use crate::ProbeError;
use std::process::Command;

/// Something that can run a command line and hand back its stdout.
///
/// Hardware variants hold a `Box<dyn CommandRunner>` so their parsing can be
/// exercised against canned output.
pub trait CommandRunner: Send + Sync {
    /// Runs `command_line` to completion and returns its decoded stdout.
    fn run(&self, command_line: &str) -> Result<String, ProbeError>;
}

/// Runs commands as real child processes via [`run_command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command_line: &str) -> Result<String, ProbeError> {
        run_command(command_line)
    }
}

/// Spawns `command_line`, waits for it, and returns its stdout.
///
/// Returns [`ProbeError::Pipe`] carrying the decoded stderr if the child
/// wrote anything there. The exit status is not consulted.
pub fn run_command(command_line: &str) -> Result<String, ProbeError> {
    let mut args = command_line.split_whitespace();
    let program = args.next().ok_or(ProbeError::EmptyCommand)?;

    tracing::debug!("running '{command_line}'");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ProbeError::Spawn {
            command: command_line.to_string(),
            source: e,
        })?;

    if !output.stderr.is_empty() {
        return Err(ProbeError::Pipe {
            command: command_line.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command() {
        assert!(matches!(run_command(""), Err(ProbeError::EmptyCommand)));
        assert!(matches!(run_command("   \t "), Err(ProbeError::EmptyCommand)));
    }

    #[test]
    fn test_missing_program() {
        let result = run_command("definitely-not-a-real-program-4f2a --flag");
        match result {
            Err(ProbeError::Spawn { command, .. }) => {
                assert_eq!(command, "definitely-not-a-real-program-4f2a --flag");
            }
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_captured() {
        let out = run_command("echo hello   world").unwrap();
        assert_eq!(out, "hello world\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_failure() {
        let result = run_command("ls /nonexistent/sys-probe/path");
        match result {
            Err(ProbeError::Pipe { command, stderr }) => {
                assert_eq!(command, "ls /nonexistent/sys-probe/path");
                assert!(!stderr.is_empty());
            }
            other => panic!("expected Pipe error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_failure_even_on_success_exit() {
        use std::io::Write;

        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "echo partial output\necho warning >&2\nexit 0").unwrap();
        let command_line = format!("sh {}", script.path().display());

        match run_command(&command_line) {
            Err(ProbeError::Pipe { command, stderr }) => {
                assert_eq!(command, command_line);
                assert_eq!(stderr, "warning\n");
            }
            other => panic!("expected Pipe error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_delegates() {
        let out = SystemRunner.run("echo probe").unwrap();
        assert_eq!(out.trim(), "probe");
    }
}
