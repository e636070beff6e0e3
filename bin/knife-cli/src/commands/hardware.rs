// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Single-capability hardware commands: `os`, `cpu`, `mem`, `temp`.
//!
//! Each runs one probe on the detected hardware variant and fails the
//! process if that probe fails.

use super::{emit_map, print_map, Output};
use sys_probe::{detect_hardware, ProbeConfig};

pub fn os(config: &ProbeConfig, output: Output, name_only: bool) -> anyhow::Result<()> {
    let hw = detect_hardware(config)?;
    if name_only {
        let name = hw.os_name()?;
        if output.is_json() {
            return output.print_json(&serde_json::json!({ "NAME": name }));
        }
        println!("{name}");
        return Ok(());
    }
    emit_map(output, &hw.os_release()?)
}

pub fn cpu(config: &ProbeConfig, output: Output) -> anyhow::Result<()> {
    let hw = detect_hardware(config)?;
    emit_map(output, &hw.cpu_info()?)
}

pub fn mem(config: &ProbeConfig, output: Output) -> anyhow::Result<()> {
    let hw = detect_hardware(config)?;
    let mem = hw.memory_info()?;
    if output.is_json() {
        return output.print_json(&mem);
    }
    print_map(&mem);
    Ok(())
}

pub fn temp(config: &ProbeConfig, output: Output) -> anyhow::Result<()> {
    let hw = detect_hardware(config)?;
    let celsius = hw.cpu_temperature()?;
    if output.is_json() {
        return output.print_json(&serde_json::json!({ "cpu_temp_celsius": celsius }));
    }
    println!("{celsius:.1} C");
    Ok(())
}
