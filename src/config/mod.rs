/// Database configuration and connection management
pub mod database;

/// Decision-policy thresholds loaded from policy.toml
pub mod policy;
