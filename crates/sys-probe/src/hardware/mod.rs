// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`HardwareProbe`] trait and its per-OS implementations.
//!
//! Selection happens once: [`detect_hardware`] resolves the [`OsFamily`]
//! and [`hardware_for`] picks the variant.
//!
//! ```text
//! OsFamily::detect()  ──►  hardware_for(family)
//!                             ├── Linux   → RaspberryPiHardware
//!                             ├── macOS   → UnsupportedHardware
//!                             └── Windows → UnsupportedHardware
//! ```

pub mod raspberry_pi;
pub mod unsupported;

pub use raspberry_pi::{parse_temperature, RaspberryPiHardware};
pub use unsupported::UnsupportedHardware;

use crate::kv::{FieldValue, KeyValueMap};
use crate::{OsFamily, ProbeConfig, ProbeError};
use std::collections::BTreeMap;

/// `/proc/meminfo` fields, integers where the value converted cleanly.
pub type MemoryInfo = BTreeMap<String, FieldValue>;

/// Hardware capabilities of one OS family.
///
/// Every call re-queries live OS state; nothing is cached.
pub trait HardwareProbe: Send + Sync {
    /// The OS family this variant serves.
    fn family(&self) -> OsFamily;

    /// Full OS identification map (`/etc/os-release` style).
    fn os_release(&self) -> Result<KeyValueMap, ProbeError>;

    /// CPU temperature in degrees Celsius.
    fn cpu_temperature(&self) -> Result<f64, ProbeError>;

    /// CPU description; `processor` holds the core count.
    fn cpu_info(&self) -> Result<KeyValueMap, ProbeError>;

    /// Memory statistics in kB.
    fn memory_info(&self) -> Result<MemoryInfo, ProbeError>;

    /// OS name: the `NAME` entry of [`os_release`](Self::os_release).
    fn os_name(&self) -> Result<String, ProbeError> {
        let mut release = self.os_release()?;
        release
            .remove("NAME")
            .ok_or_else(|| ProbeError::MissingField {
                origin: "os-release".to_string(),
                key: "NAME".to_string(),
            })
    }
}

/// Builds the hardware variant for `family`.
pub fn hardware_for(family: OsFamily, config: &ProbeConfig) -> Box<dyn HardwareProbe> {
    match family {
        OsFamily::Linux => Box::new(RaspberryPiHardware::new(config.commands.clone())),
        OsFamily::MacOs | OsFamily::Windows => Box::new(UnsupportedHardware::new(family)),
    }
}

/// Detects the running OS family and builds its hardware variant.
///
/// Fails with [`ProbeError::UnsupportedPlatform`] when the OS is not one of
/// the recognised families.
pub fn detect_hardware(config: &ProbeConfig) -> Result<Box<dyn HardwareProbe>, ProbeError> {
    let family = OsFamily::detect()?;
    tracing::info!("hardware variant selected for {family}");
    Ok(hardware_for(family, config))
}
