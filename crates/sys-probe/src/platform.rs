// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Platform identification: OS family plus descriptive host attributes.
//!
//! [`PlatformInfo`] resolves the OS family first; an identifier missing from
//! [`OS_TYPES`] fails construction outright since no hardware variant can be
//! chosen without it. The remaining attributes are read in one pass and
//! frozen into a [`PlatformSnapshot`]. The per-field accessors on
//! [`PlatformInfo`] re-read the OS on every call and leave the snapshot
//! alone.

use crate::ProbeError;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Recognised OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum OsFamily {
    Windows,
    Linux,
    #[serde(rename = "macOS")]
    MacOs,
}

/// Translation table from kernel-style OS identifiers to families.
pub const OS_TYPES: [(&str, OsFamily); 3] = [
    ("Darwin", OsFamily::MacOs),
    ("Windows", OsFamily::Windows),
    ("Linux", OsFamily::Linux),
];

impl OsFamily {
    /// Looks `identifier` up in [`OS_TYPES`] (case-sensitive).
    pub fn from_identifier(identifier: &str) -> Result<Self, ProbeError> {
        OS_TYPES
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, family)| *family)
            .ok_or_else(|| ProbeError::UnsupportedPlatform {
                identifier: identifier.to_string(),
            })
    }

    /// Detects the family of the running OS.
    pub fn detect() -> Result<Self, ProbeError> {
        Self::from_identifier(os_identifier())
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
        };
        f.write_str(name)
    }
}

/// Returns the running OS as a kernel name: `Linux`, `Darwin`, `Windows`,
/// or the raw target OS string for anything else (e.g. `freebsd`).
pub fn os_identifier() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    }
}

/// Descriptive attributes of the host, captured once.
///
/// Values the OS cannot report are empty strings; no field is ever absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlatformSnapshot {
    /// OS family resolved from the identifier.
    pub family: OsFamily,
    /// Pointer width of the running binary, e.g. `"64bit"`.
    pub architecture: String,
    /// Network hostname.
    pub network_name: String,
    /// Processor description (CPU brand string).
    pub processor: String,
    /// Instruction-set name, e.g. `x86_64`, `aarch64`.
    pub machine: String,
    /// One-line `Identifier-release-machine` summary.
    pub summary: String,
    /// Kernel or OS release, e.g. `6.1.21-v8+` or `20.6.0`.
    pub release: String,
    /// OS version string.
    pub version: String,
}

/// Platform collector: a frozen snapshot plus live per-field queries.
#[derive(Debug, Clone)]
pub struct PlatformInfo {
    identifier: String,
    snapshot: PlatformSnapshot,
}

impl PlatformInfo {
    /// Detects the running platform and captures its snapshot.
    pub fn detect() -> Result<Self, ProbeError> {
        Self::detect_with(os_identifier())
    }

    /// Builds the collector for an explicit OS identifier.
    ///
    /// Only `family` and the summary prefix follow `identifier`; every other
    /// attribute is read from the running host. Fails with
    /// [`ProbeError::UnsupportedPlatform`] before any attribute is read if
    /// `identifier` is not in [`OS_TYPES`].
    pub(crate) fn detect_with(identifier: &str) -> Result<Self, ProbeError> {
        let family = OsFamily::from_identifier(identifier)?;

        let machine = read_machine();
        let release = read_release();
        let snapshot = PlatformSnapshot {
            family,
            architecture: read_architecture(),
            network_name: read_network_name(),
            processor: read_processor(),
            summary: format_summary(identifier, &release, &machine),
            machine,
            release,
            version: read_version(),
        };

        tracing::debug!(?snapshot, "platform detected");

        Ok(Self {
            identifier: identifier.to_string(),
            snapshot,
        })
    }

    /// The snapshot captured at construction.
    pub fn snapshot(&self) -> &PlatformSnapshot {
        &self.snapshot
    }

    /// Consumes the collector, returning its snapshot.
    pub fn into_snapshot(self) -> PlatformSnapshot {
        self.snapshot
    }

    pub fn family(&self) -> OsFamily {
        self.snapshot.family
    }

    /// Re-reads the pointer width of the running binary.
    pub fn architecture(&self) -> String {
        read_architecture()
    }

    /// Re-reads the network hostname.
    pub fn network_name(&self) -> String {
        read_network_name()
    }

    /// Re-reads the processor description.
    pub fn processor(&self) -> String {
        read_processor()
    }

    /// Re-reads the instruction-set name.
    pub fn machine(&self) -> String {
        read_machine()
    }

    /// Re-reads the release and machine and rebuilds the summary line.
    pub fn summary(&self) -> String {
        format_summary(&self.identifier, &read_release(), &read_machine())
    }

    /// Re-reads the kernel/OS release.
    pub fn release(&self) -> String {
        read_release()
    }

    /// Re-reads the OS version string.
    pub fn version(&self) -> String {
        read_version()
    }
}

fn read_architecture() -> String {
    format!("{}bit", usize::BITS)
}

fn read_network_name() -> String {
    System::host_name().unwrap_or_default()
}

fn read_processor() -> String {
    let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

fn read_machine() -> String {
    std::env::consts::ARCH.to_string()
}

fn read_release() -> String {
    System::kernel_version().unwrap_or_default()
}

fn read_version() -> String {
    System::os_version().unwrap_or_default()
}

fn format_summary(identifier: &str, release: &str, machine: &str) -> String {
    [identifier, release, machine]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
}
