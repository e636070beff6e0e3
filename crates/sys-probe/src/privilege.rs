// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Administrator-privilege check.

use crate::command::CommandRunner;
#[cfg(unix)]
use crate::command::SystemRunner;
use crate::config::CommandSet;
use crate::ProbeError;

/// Returns `true` if the process runs as root.
///
/// On Unix this asks `id -u` (or the configured `user_id` command) for the
/// effective uid. Other platforms report [`ProbeError::NotImplemented`].
pub fn is_admin(commands: &CommandSet) -> Result<bool, ProbeError> {
    #[cfg(unix)]
    {
        is_admin_with(&SystemRunner, commands)
    }
    #[cfg(not(unix))]
    {
        let _ = commands;
        Err(ProbeError::NotImplemented {
            family: crate::OsFamily::detect()?,
            capability: "admin check",
        })
    }
}

/// [`is_admin`] through an explicit runner.
pub fn is_admin_with(runner: &dyn CommandRunner, commands: &CommandSet) -> Result<bool, ProbeError> {
    let out = runner.run(&commands.user_id)?;
    Ok(parse_uid(&out)? == 0)
}

/// Parses the uid printed by `id -u`.
pub fn parse_uid(text: &str) -> Result<u32, ProbeError> {
    let trimmed = text.trim();
    trimmed.parse::<u32>().map_err(|_| ProbeError::ParseError {
        field: "uid".to_string(),
        detail: format!("expected a numeric user id, got '{trimmed}'"),
    })
}
