// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # sys-probe
//!
//! Collects OS and hardware information by shelling out to system commands
//! and parsing their `KEY<sep>VALUE` output.
//!
//! # Components
//! - [`run_command`] — blocking child-process execution; any stderr output
//!   is an error.
//! - [`parse_key_values`] — the shared line parser for `/etc/os-release`,
//!   `/proc/cpuinfo`, `/proc/meminfo` and `vcgencmd` output.
//! - [`PlatformInfo`] — OS family detection plus a frozen
//!   [`PlatformSnapshot`] of host attributes.
//! - [`HardwareProbe`] — per-OS capabilities (temperature, CPU info, memory
//!   info, OS identification), selected once by [`detect_hardware`].
//!
//! Everything is synchronous. Each probe call spawns one child process and
//! blocks until it exits; there is no timeout.
//!
//! # Example
//! ```no_run
//! use sys_probe::{detect_hardware, PlatformInfo, ProbeConfig};
//!
//! let platform = PlatformInfo::detect().expect("unsupported platform");
//! println!("{} on {}", platform.snapshot().family, platform.snapshot().machine);
//!
//! let hw = detect_hardware(&ProbeConfig::default()).expect("unsupported platform");
//! match hw.cpu_temperature() {
//!     Ok(t) => println!("SoC at {t:.1} C"),
//!     Err(e) => eprintln!("no temperature: {e}"),
//! }
//! ```

pub mod command;
mod config;
mod error;
pub mod hardware;
pub mod kv;
pub mod platform;
mod privilege;

pub use command::{run_command, CommandRunner, SystemRunner};
pub use config::{CommandSet, ProbeConfig};
pub use error::ProbeError;
pub use hardware::{
    detect_hardware, hardware_for, HardwareProbe, MemoryInfo, RaspberryPiHardware,
    UnsupportedHardware,
};
pub use kv::{coerce_or_keep, parse_key_values, FieldValue, KeyValueMap, DEFAULT_SEPARATOR};
pub use platform::{os_identifier, OsFamily, PlatformInfo, PlatformSnapshot};
pub use privilege::{is_admin, is_admin_with, parse_uid};
