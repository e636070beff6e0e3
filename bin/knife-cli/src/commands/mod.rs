// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod admin;
pub mod hardware;
pub mod platform;
pub mod status;

use std::path::Path;
use sys_probe::{KeyValueMap, ProbeConfig};
use tracing_subscriber::EnvFilter;

/// Initialises logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises the level from `warn`
/// to `info`, `debug`, then `trace`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads the probe configuration, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ProbeConfig> {
    match path {
        Some(path) => {
            let config = ProbeConfig::from_file(path)?;
            tracing::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(ProbeConfig::default()),
    }
}

/// Chooses between human-readable and JSON output.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(self) -> bool {
        self.json
    }

    /// Prints `value` as pretty JSON.
    pub fn print_json<T: serde::Serialize>(self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Prints a key/value map as aligned `key: value` lines.
pub fn print_map<V: std::fmt::Display>(map: &std::collections::BTreeMap<String, V>) {
    let width = map.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in map {
        println!("   {key:<width$}  {value}");
    }
}

/// Prints a string map, either as JSON or aligned text.
pub fn emit_map(output: Output, map: &KeyValueMap) -> anyhow::Result<()> {
    if output.is_json() {
        return output.print_json(map);
    }
    print_map(map);
    Ok(())
}
