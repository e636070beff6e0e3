// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Probe configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! [commands]
//! measure_temp = "vcgencmd measure_temp"
//! cpuinfo = "cat /proc/cpuinfo"
//! meminfo = "cat /proc/meminfo"
//! os_release = "cat /etc/os-release"
//! user_id = "id -u"
//! ```
//!
//! Any key left out keeps its default.

use crate::ProbeError;
use std::path::Path;

/// Configuration for the hardware and privilege probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProbeConfig {
    /// Command lines run by the probes.
    #[serde(default)]
    pub commands: CommandSet,
}

/// The external commands each probe runs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CommandSet {
    /// Prints the SoC temperature as `temp=48.3'C`.
    pub measure_temp: String,
    /// Prints `/proc/cpuinfo`.
    pub cpuinfo: String,
    /// Prints `/proc/meminfo`.
    pub meminfo: String,
    /// Prints `/etc/os-release`.
    pub os_release: String,
    /// Prints the effective user id.
    pub user_id: String,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            measure_temp: "vcgencmd measure_temp".to_string(),
            cpuinfo: "cat /proc/cpuinfo".to_string(),
            meminfo: "cat /proc/meminfo".to_string(),
            os_release: "cat /etc/os-release".to_string(),
            user_id: "id -u".to_string(),
        }
    }
}

impl ProbeConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ProbeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProbeError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ProbeError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ProbeError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ProbeError> {
        toml::to_string_pretty(self)
            .map_err(|e| ProbeError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Rejects blank command lines.
    pub fn validate(&self) -> Result<(), ProbeError> {
        let c = &self.commands;
        for (name, command) in [
            ("measure_temp", &c.measure_temp),
            ("cpuinfo", &c.cpuinfo),
            ("meminfo", &c.meminfo),
            ("os_release", &c.os_release),
            ("user_id", &c.user_id),
        ] {
            if command.trim().is_empty() {
                return Err(ProbeError::ConfigError(format!(
                    "command '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}
