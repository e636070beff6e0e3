// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for platform and hardware probing.

use crate::platform::OsFamily;

/// Errors that can occur when probing the running system.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The OS identifier is not in the platform translation table.
    #[error("unsupported platform '{identifier}': expected one of Darwin, Windows, Linux")]
    UnsupportedPlatform { identifier: String },

    /// The selected hardware variant does not provide this capability.
    #[error("{capability} is not implemented on {family}")]
    NotImplemented {
        family: OsFamily,
        capability: &'static str,
    },

    /// The child process wrote to stderr.
    #[error("command '{command}' reported an error: {stderr}")]
    Pipe { command: String, stderr: String },

    /// The child process could not be started.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command line contained no program name.
    #[error("empty command line")]
    EmptyCommand,

    /// A required key was absent from parsed command output.
    #[error("'{key}' not found in {origin}")]
    MissingField { origin: String, key: String },

    /// A required numeric field could not be parsed.
    #[error("failed to parse {field}: {detail}")]
    ParseError { field: String, detail: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
