//! User settings entity - Per-user decision preferences.
//!
//! One row per user, keyed directly by user id. Settings are upserted, never
//! deleted; a missing row is lazily created with defaults on first snapshot
//! read (avalanche mode, low-balance warnings enabled).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt-payoff prioritization strategy. Stored as a preference; payoff
/// ordering itself is computed outside this core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum DebtAttackMode {
    /// Highest interest rate first
    #[sea_orm(string_value = "avalanche")]
    Avalanche,
    /// Smallest balance first
    #[sea_orm(string_value = "snowball")]
    Snowball,
}

/// User settings database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_settings")]
pub struct Model {
    /// Owning user - one settings row per user
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Preferred debt-payoff strategy
    pub debt_attack_mode: DebtAttackMode,
    /// Whether low-balance warnings are enabled for affordability checks
    pub safe_to_spend_warning: bool,
}

/// `UserSettings` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Default settings persisted when a user has no settings row yet.
    #[must_use]
    pub fn defaults_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            debt_attack_mode: DebtAttackMode::Avalanche,
            safe_to_spend_warning: true,
        }
    }
}
