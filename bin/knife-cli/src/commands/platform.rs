// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `knife platform` command: OS family and host attributes.

use super::Output;
use sys_probe::PlatformInfo;

pub fn execute(output: Output) -> anyhow::Result<()> {
    let platform = PlatformInfo::detect()?;
    let snap = platform.snapshot();

    if output.is_json() {
        return output.print_json(snap);
    }

    println!("  Platform");
    println!("   OS:           {}", snap.family);
    println!("   Summary:      {}", snap.summary);
    println!("   Hostname:     {}", snap.network_name);
    println!("   Architecture: {}", snap.architecture);
    println!("   Machine:      {}", snap.machine);
    println!("   Processor:    {}", snap.processor);
    println!("   Release:      {}", snap.release);
    println!("   Version:      {}", snap.version);
    Ok(())
}
