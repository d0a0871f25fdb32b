//! Decision-policy configuration loading from policy.toml
//!
//! The affordability, funding, and urgency rules depend on a handful of
//! tunable thresholds (low-balance floor, per-period savings target, urgency
//! windows). They live here as named configuration rather than literals in
//! the decision logic, so policy can be tuned without touching the rules.
//! Every field is individually defaultable; a missing file yields defaults.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;

/// Named thresholds driving the decision engine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Policy {
    /// Spending balance below this after a purchase triggers a warning
    pub low_balance_threshold: Decimal,
    /// Amount reserved for savings each pay period in the funding plan
    pub savings_target: Decimal,
    /// Amount reserved for taxes each pay period (currently inert, kept
    /// for future self-employment support)
    pub tax_reserve: Decimal,
    /// A due day within this many days counts as urgent
    pub urgent_window_days: u32,
    /// A must-have-by day within this many days counts as urgent
    pub must_have_window_days: u32,
    /// A bill due within this many days earns a heads-up (bills only)
    pub warning_window_days: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            low_balance_threshold: dec!(100.00),
            savings_target: dec!(200.00),
            tax_reserve: Decimal::ZERO,
            urgent_window_days: 3,
            must_have_window_days: 2,
            warning_window_days: 7,
        }
    }
}

/// Loads policy configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_policy<P: AsRef<Path>>(path: P) -> Result<Policy> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read policy file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse policy.toml: {e}"),
    })
}

/// Loads policy from the default location (./policy.toml), falling back to
/// built-in defaults when the file does not exist.
///
/// # Errors
/// Returns an error only if the file exists but cannot be parsed.
pub fn load_default_policy() -> Result<Policy> {
    if Path::new("policy.toml").exists() {
        load_policy("policy.toml")
    } else {
        Ok(Policy::default())
    }
}
