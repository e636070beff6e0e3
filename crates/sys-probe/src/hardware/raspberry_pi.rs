// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Linux hardware probes, tuned for Raspberry Pi OS.
//!
//! Reads state through external commands:
//! - `vcgencmd measure_temp` for the SoC temperature (`temp=48.3'C`).
//! - `cat /proc/cpuinfo` for CPU description and core numbering.
//! - `cat /proc/meminfo` for memory statistics in kB.
//! - `cat /etc/os-release` for OS identification.
//!
//! Any stderr output from these commands fails the call. Individual garbled
//! lines are dropped by the parser and do not.

use super::{HardwareProbe, MemoryInfo};
use crate::command::{CommandRunner, SystemRunner};
use crate::config::CommandSet;
use crate::kv::{coerce_or_keep, parse_key_values, KeyValueMap};
use crate::{OsFamily, ProbeError};

/// Unit suffix carried by every sized `/proc/meminfo` field.
const MEMINFO_UNIT: &str = "kB";

/// Hardware probes for Linux / Raspberry Pi.
pub struct RaspberryPiHardware {
    runner: Box<dyn CommandRunner>,
    commands: CommandSet,
}

impl RaspberryPiHardware {
    /// Creates the probe using real child processes.
    pub fn new(commands: CommandSet) -> Self {
        Self::with_runner(Box::new(SystemRunner), commands)
    }

    /// Creates the probe with a custom command runner.
    pub fn with_runner(runner: Box<dyn CommandRunner>, commands: CommandSet) -> Self {
        Self { runner, commands }
    }
}

impl Default for RaspberryPiHardware {
    fn default() -> Self {
        Self::new(CommandSet::default())
    }
}

impl std::fmt::Debug for RaspberryPiHardware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaspberryPiHardware")
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

impl HardwareProbe for RaspberryPiHardware {
    fn family(&self) -> OsFamily {
        OsFamily::Linux
    }

    fn os_release(&self) -> Result<KeyValueMap, ProbeError> {
        let out = self.runner.run(&self.commands.os_release)?;
        Ok(parse_key_values(&out, '='))
    }

    fn cpu_temperature(&self) -> Result<f64, ProbeError> {
        let out = self.runner.run(&self.commands.measure_temp)?;
        parse_temperature(&out)
    }

    fn cpu_info(&self) -> Result<KeyValueMap, ProbeError> {
        let out = self.runner.run(&self.commands.cpuinfo)?;
        Ok(count_processors(parse_key_values(&out, ':')))
    }

    fn memory_info(&self) -> Result<MemoryInfo, ProbeError> {
        let out = self.runner.run(&self.commands.meminfo)?;
        Ok(parse_key_values(&out, ':')
            .into_iter()
            .map(|(key, value)| {
                let value = coerce_or_keep(&value, MEMINFO_UNIT);
                (key, value)
            })
            .collect())
    }
}

/// Parses `vcgencmd measure_temp` output (`temp=48.3'C`) into degrees Celsius.
pub fn parse_temperature(text: &str) -> Result<f64, ProbeError> {
    let map = parse_key_values(text, '=');
    let raw = map.get("temp").ok_or_else(|| ProbeError::MissingField {
        origin: "measure_temp output".to_string(),
        key: "temp".to_string(),
    })?;

    // Unit follows the first quote: `48.3'C`.
    let number = raw.split('\'').next().unwrap_or_default().trim();
    match number.parse::<f64>() {
        Ok(celsius) if celsius.is_finite() => Ok(celsius),
        _ => Err(ProbeError::ParseError {
            field: "temp".to_string(),
            detail: format!("expected a Celsius reading like 48.3'C, got '{raw}'"),
        }),
    }
}

/// `/proc/cpuinfo` numbers cores from zero and the last block wins in the
/// parsed map, so the highest index plus one is the core count.
fn count_processors(mut info: KeyValueMap) -> KeyValueMap {
    if let Some(processor) = info.get_mut("processor") {
        match processor.parse::<u64>().ok().and_then(|index| index.checked_add(1)) {
            Some(count) => *processor = count.to_string(),
            None => tracing::warn!("unusable processor field '{processor}' left as is"),
        }
    }
    info
}
