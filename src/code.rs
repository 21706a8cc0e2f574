//! Code normalization.
//!
//! Callers may spell a code as an integer (`35`), a digit string (`"35"`,
//! `"035"`) or a letter code in any case (`"jp"`, `"Uk"`). All of them are
//! folded into the canonical form used as table keys:
//!
//! - digits → read by value and zero-padded to three characters (`"35"`,
//!   `"0035"` → `"035"`); longer codes are never truncated
//! - letters → uppercased, then resolved through the alias table once
//!   (`"uk"` → `"GB"`)
//!
//! Nothing is validated. A code that is not in the tables normalizes to
//! itself and then never matches anything.

use serde::{Deserialize, Serialize};

use crate::hierarchy::Hierarchy;

/// A code as supplied by a caller, before normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeInput {
    /// Numeric region code, e.g. `35` for South-eastern Asia.
    Numeric(u32),
    /// Any textual code: padded digits, region letters or a country code.
    Text(String),
}

impl CodeInput {
    /// Fold into canonical form.
    pub fn normalize(&self) -> String {
        match self {
            Self::Numeric(n) => format!("{:03}", n),
            Self::Text(s) => normalize_text(s),
        }
    }
}

impl From<u32> for CodeInput {
    fn from(n: u32) -> Self {
        Self::Numeric(n)
    }
}

impl From<u16> for CodeInput {
    fn from(n: u16) -> Self {
        Self::Numeric(n.into())
    }
}

impl From<&str> for CodeInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CodeInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CodeInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

/// Normalize any accepted code form into its canonical table-key form.
pub fn normalize_region(code: impl Into<CodeInput>) -> String {
    code.into().normalize()
}

fn normalize_text(s: &str) -> String {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        // same value as the integer form: "0035" and 35 both become "035"
        return format!("{:0>3}", s.trim_start_matches('0'));
    }
    let upper = s.to_uppercase();
    match Hierarchy::global().resolve_alias(&upper) {
        Some(canonical) => canonical.to_string(),
        None => upper,
    }
}
