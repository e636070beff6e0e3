// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `knife status` command: every probe in one report.
//!
//! Platform detection must succeed. Individual hardware probes may fail
//! (no `vcgencmd` outside a Pi, unimplemented on macOS/Windows); those are
//! logged and shown as unavailable while the rest of the report prints.

use super::Output;
use sys_probe::{
    detect_hardware, is_admin, FieldValue, KeyValueMap, MemoryInfo, PlatformInfo,
    PlatformSnapshot, ProbeConfig, ProbeError,
};

/// BCM2711 thermal throttling threshold (degrees Celsius).
const THROTTLE_THRESHOLD_C: f64 = 80.0;

#[derive(Debug, serde::Serialize)]
struct StatusReport {
    platform: PlatformSnapshot,
    os_name: Option<String>,
    cpu_temp_celsius: Option<f64>,
    cpu: Option<KeyValueMap>,
    memory: Option<MemoryInfo>,
    is_admin: Option<bool>,
}

pub fn execute(config: &ProbeConfig, output: Output) -> anyhow::Result<()> {
    let platform = PlatformInfo::detect()?;
    let hw = detect_hardware(config)?;

    let report = StatusReport {
        platform: platform.into_snapshot(),
        os_name: available("os name", hw.os_name()),
        cpu_temp_celsius: available("cpu temperature", hw.cpu_temperature()),
        cpu: available("cpu info", hw.cpu_info()),
        memory: available("memory info", hw.memory_info()),
        is_admin: available("admin check", is_admin(&config.commands)),
    };

    if output.is_json() {
        return output.print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn available<T>(probe: &str, result: Result<T, ProbeError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{probe} unavailable: {e}");
            None
        }
    }
}

fn print_report(report: &StatusReport) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              knife · System Information              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Platform ───────────────────────────────────────────────
    let p = &report.platform;
    println!("  Platform");
    println!("   OS:           {} ({})", p.family, p.summary);
    if let Some(name) = &report.os_name {
        println!("   Distribution: {name}");
    }
    println!("   Hostname:     {}", p.network_name);
    println!("   Machine:      {} ({})", p.machine, p.architecture);
    println!("   Processor:    {}", p.processor);
    println!();

    // ── Thermal ────────────────────────────────────────────────
    println!("  Thermal");
    match report.cpu_temp_celsius {
        Some(temp) => {
            println!("   Temperature:  {temp:.1} C  {}", temp_bar(temp));
            if temp >= THROTTLE_THRESHOLD_C {
                println!("   WARNING: above {THROTTLE_THRESHOLD_C:.0} C throttle threshold");
            }
        }
        None => println!("   Temperature:  unavailable"),
    }
    println!();

    // ── Memory ─────────────────────────────────────────────────
    println!("  Memory");
    let field = |key: &str| {
        report
            .memory
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(FieldValue::as_integer)
    };
    match (field("MemTotal"), field("MemAvailable")) {
        (Some(total_kb), Some(avail_kb)) => {
            let used_kb = total_kb.saturating_sub(avail_kb);
            let ratio = if total_kb == 0 {
                0.0
            } else {
                used_kb as f64 / total_kb as f64
            };
            println!("   Total:        {} MB", total_kb / 1024);
            println!("   Available:    {} MB", avail_kb / 1024);
            println!(
                "   Used:         {} MB ({:.1}%)  {}",
                used_kb / 1024,
                ratio * 100.0,
                bar(ratio, 0.7, 0.9)
            );
        }
        _ => println!("   unavailable"),
    }
    println!();

    // ── CPU ────────────────────────────────────────────────────
    println!("  CPU");
    match &report.cpu {
        Some(cpu) => {
            if let Some(cores) = cpu.get("processor") {
                println!("   Cores:        {cores}");
            }
            if let Some(model) = cpu.get("Model").or_else(|| cpu.get("model name")) {
                println!("   Model:        {model}");
            }
            if let Some(hardware) = cpu.get("Hardware") {
                println!("   Hardware:     {hardware}");
            }
        }
        None => println!("   unavailable"),
    }
    println!();

    // ── Privileges ─────────────────────────────────────────────
    println!("  Privileges");
    let admin = match report.is_admin {
        Some(true) => "administrator",
        Some(false) => "regular user",
        None => "unknown",
    };
    println!("   Running as:   {admin}");
}

/// Renders `ratio` (clamped to `[0.0, 1.0]`) as a 20-cell bar. The fill
/// character escalates from `-` to `=` at `warn` and to `#` at `crit`.
fn bar(ratio: f64, warn: f64, crit: f64) -> String {
    const CELLS: usize = 20;
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * CELLS as f64).round() as usize;
    let symbol = match ratio {
        r if r >= crit => '#',
        r if r >= warn => '=',
        _ => '-',
    };
    let mut out = String::with_capacity(CELLS + 2);
    out.push('[');
    out.extend(std::iter::repeat(symbol).take(filled));
    out.extend(std::iter::repeat('.').take(CELLS - filled));
    out.push(']');
    out
}

/// Temperature on a 0-100 C scale; `#` from the throttle threshold up.
fn temp_bar(celsius: f64) -> String {
    bar(celsius / 100.0, 0.6, THROTTLE_THRESHOLD_C / 100.0)
}
