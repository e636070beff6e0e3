// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: detection and dispatch against the live host.
//!
//! Probes that need Raspberry Pi tooling (`vcgencmd`) are not exercised
//! here; the procfs and os-release probes run wherever those files exist.

use std::path::Path;
use sys_probe::{
    detect_hardware, hardware_for, FieldValue, HardwareProbe, OsFamily, PlatformInfo,
    ProbeConfig, ProbeError,
};

fn linux_probe() -> Box<dyn HardwareProbe> {
    hardware_for(OsFamily::Linux, &ProbeConfig::default())
}

#[test]
fn detection_and_dispatch_agree() {
    let Ok(platform) = PlatformInfo::detect() else {
        assert!(matches!(
            detect_hardware(&ProbeConfig::default()),
            Err(ProbeError::UnsupportedPlatform { .. })
        ));
        return;
    };
    let hw = detect_hardware(&ProbeConfig::default()).unwrap();
    assert_eq!(hw.family(), platform.snapshot().family);
}

#[test]
fn snapshot_is_fully_populated() {
    if let Ok(platform) = PlatformInfo::detect() {
        let snap = platform.snapshot();
        assert!(!snap.architecture.is_empty());
        assert!(!snap.machine.is_empty());
        assert!(!snap.summary.is_empty());

        let json = serde_json::to_value(snap).unwrap();
        for key in [
            "family",
            "architecture",
            "network_name",
            "processor",
            "machine",
            "summary",
            "release",
            "version",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}

#[test]
fn live_meminfo() {
    if !Path::new("/proc/meminfo").exists() {
        return;
    }
    let mem = linux_probe().memory_info().unwrap();
    let total = mem.get("MemTotal").and_then(FieldValue::as_integer).unwrap();
    assert!(total > 0);
}

#[test]
fn live_cpuinfo_counts_at_least_one_core() {
    if !Path::new("/proc/cpuinfo").exists() {
        return;
    }
    let info = linux_probe().cpu_info().unwrap();
    if let Some(count) = info.get("processor") {
        assert!(count.parse::<u64>().unwrap() >= 1);
    }
}

#[test]
fn live_os_release() {
    if !Path::new("/etc/os-release").exists() {
        return;
    }
    let hw = linux_probe();
    let release = hw.os_release().unwrap();
    if release.contains_key("NAME") {
        assert_eq!(hw.os_name().unwrap(), release["NAME"]);
    }
}

#[test]
fn missing_file_surfaces_as_pipe_error() {
    if !cfg!(unix) {
        return;
    }
    let mut config = ProbeConfig::default();
    config.commands.meminfo = "cat /nonexistent/sys-probe/meminfo".to_string();
    let result = hardware_for(OsFamily::Linux, &config).memory_info();
    assert!(matches!(result, Err(ProbeError::Pipe { .. })));
}

#[test]
fn unsupported_families_refuse_every_capability() {
    for family in [OsFamily::MacOs, OsFamily::Windows] {
        let hw = hardware_for(family, &ProbeConfig::default());
        assert!(matches!(hw.cpu_temperature(), Err(ProbeError::NotImplemented { .. })));
        assert!(matches!(hw.memory_info(), Err(ProbeError::NotImplemented { .. })));
    }
}
