// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Placeholder variant for macOS and Windows.

use super::{HardwareProbe, MemoryInfo};
use crate::kv::KeyValueMap;
use crate::{OsFamily, ProbeError};

/// A family with no hardware probes yet. Every capability fails with
/// [`ProbeError::NotImplemented`].
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedHardware {
    family: OsFamily,
}

impl UnsupportedHardware {
    pub fn new(family: OsFamily) -> Self {
        Self { family }
    }

    fn unsupported<T>(&self, capability: &'static str) -> Result<T, ProbeError> {
        Err(ProbeError::NotImplemented {
            family: self.family,
            capability,
        })
    }
}

impl HardwareProbe for UnsupportedHardware {
    fn family(&self) -> OsFamily {
        self.family
    }

    fn os_release(&self) -> Result<KeyValueMap, ProbeError> {
        self.unsupported("OS identification")
    }

    fn cpu_temperature(&self) -> Result<f64, ProbeError> {
        self.unsupported("CPU temperature")
    }

    fn cpu_info(&self) -> Result<KeyValueMap, ProbeError> {
        self.unsupported("CPU info")
    }

    fn memory_info(&self) -> Result<MemoryInfo, ProbeError> {
        self.unsupported("memory info")
    }
}
