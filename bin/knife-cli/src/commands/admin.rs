// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `knife admin` command.

use super::Output;
use sys_probe::{is_admin, ProbeConfig};

pub fn execute(config: &ProbeConfig, output: Output) -> anyhow::Result<()> {
    let admin = is_admin(&config.commands)?;
    if output.is_json() {
        return output.print_json(&serde_json::json!({ "is_admin": admin }));
    }
    if admin {
        println!("running with administrator privileges");
    } else {
        println!("running without administrator privileges");
    }
    Ok(())
}
