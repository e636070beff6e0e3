// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Line-oriented `KEY<sep>VALUE` parsing.
//!
//! One routine covers both output styles the probes consume:
//! - `/etc/os-release` and `vcgencmd`: `=`-separated, values may be quoted.
//! - `/proc/cpuinfo` and `/proc/meminfo`: `:`-separated, padded with
//!   tabs/spaces.

use std::collections::BTreeMap;

/// Separator used when the caller has no reason to pick another.
pub const DEFAULT_SEPARATOR: char = '=';

/// Parsed key/value pairs. Sorted so repeated dumps print identically.
pub type KeyValueMap = BTreeMap<String, String>;

/// Splits `text` into a key/value map.
///
/// Each line is split on the first `separator`; key and value are trimmed
/// and wrapping double quotes are stripped from the value. Blank lines are
/// ignored. Lines with no separator or an empty key are dropped with a
/// warning. When a key repeats, the last occurrence wins.
pub fn parse_key_values(text: &str, separator: char) -> KeyValueMap {
    let mut map = KeyValueMap::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(separator) else {
            tracing::warn!("skipping line without '{separator}': {line:?}");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::warn!("skipping line with empty key: {line:?}");
            continue;
        }
        let value = value.trim().trim_matches('"');
        map.insert(key.to_string(), value.to_string());
    }

    map
}

/// A parsed field that is either a clean integer or the untouched text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(u64),
    Text(String),
}

impl FieldValue {
    /// Returns the integer value, if the field converted cleanly.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Strips `unit_suffix` and converts what remains to an integer.
///
/// If the conversion fails the original string (suffix included) is kept,
/// so a garbled value is never reported in the wrong unit.
pub fn coerce_or_keep(raw: &str, unit_suffix: &str) -> FieldValue {
    let number = raw.strip_suffix(unit_suffix).unwrap_or(raw).trim();
    match number.parse::<u64>() {
        Ok(n) => FieldValue::Integer(n),
        Err(_) => FieldValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OS_RELEASE: &str = r#"PRETTY_NAME="Raspbian GNU/Linux 10 (buster)"
NAME="Raspbian GNU/Linux"
VERSION_ID="10"
VERSION="10 (buster)"
VERSION_CODENAME=buster
ID=raspbian
ID_LIKE=debian
HOME_URL="http://www.raspbian.org/"
"#;

    #[test]
    fn test_quoted_value() {
        let map = parse_key_values("NAME=\"Raspbian\"", '=');
        assert_eq!(map.get("NAME").map(String::as_str), Some("Raspbian"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_os_release() {
        let map = parse_key_values(OS_RELEASE, DEFAULT_SEPARATOR);
        assert_eq!(map.len(), 8);
        assert_eq!(map["NAME"], "Raspbian GNU/Linux");
        assert_eq!(map["VERSION_CODENAME"], "buster");
        assert_eq!(map["HOME_URL"], "http://www.raspbian.org/");
    }

    #[test]
    fn test_colon_separator_trims_tabs() {
        let map = parse_key_values("processor\t: 3", ':');
        assert_eq!(map["processor"], "3");
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        let map = parse_key_values("model name\t: ARMv7 Processor rev 3 (v7l): extra", ':');
        assert_eq!(map["model name"], "ARMv7 Processor rev 3 (v7l): extra");
    }

    #[test]
    fn test_malformed_lines_dropped() {
        let text = "GOOD=1\nno separator here\n=orphan value\nALSO_GOOD=2\n";
        let map = parse_key_values(text, '=');
        assert_eq!(map.len(), 2);
        assert!(map.len() < text.lines().count());
        assert_eq!(map["GOOD"], "1");
        assert_eq!(map["ALSO_GOOD"], "2");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let map = parse_key_values("\n\nA=1\n   \nB=2\n", '=');
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let map = parse_key_values("processor\t: 0\nprocessor\t: 1\nprocessor\t: 2", ':');
        assert_eq!(map["processor"], "2");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let a = parse_key_values(OS_RELEASE, '=');
        let b = parse_key_values(OS_RELEASE, '=');
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_and_quotes_stripped() {
        for (line, key, value) in [
            ("K=V", "K", "V"),
            ("  K  =  V  ", "K", "V"),
            ("K=\"V with spaces\"", "K", "V with spaces"),
            ("K= \"V\" ", "K", "V"),
            ("K=", "K", ""),
        ] {
            let map = parse_key_values(line, '=');
            assert_eq!(map.get(key).map(String::as_str), Some(value), "line {line:?}");
        }
    }

    #[test]
    fn test_coerce_kb() {
        assert_eq!(coerce_or_keep("123456 kB", "kB"), FieldValue::Integer(123456));
        assert_eq!(coerce_or_keep("0", "kB"), FieldValue::Integer(0));
    }

    #[test]
    fn test_coerce_keeps_original_on_failure() {
        assert_eq!(
            coerce_or_keep("12.5 MB", "kB"),
            FieldValue::Text("12.5 MB".to_string())
        );
        assert_eq!(coerce_or_keep("kB", "kB"), FieldValue::Text("kB".to_string()));
        assert_eq!(coerce_or_keep("-4 kB", "kB"), FieldValue::Text("-4 kB".to_string()));
    }

    #[test]
    fn test_field_value_display_and_json() {
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Text("n/a".into()).to_string(), "n/a");
        assert_eq!(serde_json::to_string(&FieldValue::Integer(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&FieldValue::Text("n/a".into())).unwrap(),
            "\"n/a\""
        );
        assert_eq!(FieldValue::Integer(7).as_integer(), Some(7));
        assert_eq!(FieldValue::Text("7x".into()).as_integer(), None);
    }
}
