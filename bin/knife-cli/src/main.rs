// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # knife
//!
//! Command-line interface for the sys-probe library.
//!
//! ## Usage
//! ```bash
//! # Platform snapshot
//! knife platform
//!
//! # Raspberry Pi SoC temperature
//! knife temp
//!
//! # Everything, as JSON
//! knife --json status
//!
//! # Use a different vcgencmd location
//! knife --config ./knife.toml temp
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "knife",
    about = "OS and hardware information probes",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file with probe command overrides.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as pretty JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show OS family, architecture, hostname, processor and release.
    Platform,

    /// Show OS identification from /etc/os-release.
    Os {
        /// Print only the NAME entry.
        #[arg(long)]
        name: bool,
    },

    /// Show /proc/cpuinfo (processor holds the core count).
    Cpu,

    /// Show /proc/meminfo in kB.
    Mem,

    /// Show the SoC temperature in degrees Celsius.
    Temp,

    /// Report whether the process runs with administrator privileges.
    Admin,

    /// Display every probe at once; failing probes are reported, not fatal.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;
    let output = commands::Output::new(cli.json);

    match cli.command {
        Commands::Platform => commands::platform::execute(output),
        Commands::Os { name } => commands::hardware::os(&config, output, name),
        Commands::Cpu => commands::hardware::cpu(&config, output),
        Commands::Mem => commands::hardware::mem(&config, output),
        Commands::Temp => commands::hardware::temp(&config, output),
        Commands::Admin => commands::admin::execute(&config, output),
        Commands::Status => commands::status::execute(&config, output),
    }
}
