//! Pay schedule entity - Represents an expected income stream.
//!
//! Each schedule records how much arrives, how often, and when the next
//! payday lands. The funding planner sums schedule amounts for expected
//! income and picks the earliest upcoming payday.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How often a paycheck arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Every week
    #[sea_orm(string_value = "weekly")]
    Weekly,
    /// Every two weeks
    #[sea_orm(string_value = "biweekly")]
    Biweekly,
    /// Twice a month (e.g., 1st and 15th)
    #[sea_orm(string_value = "semimonthly")]
    Semimonthly,
    /// Once a month
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

/// Pay schedule database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pay_schedules")]
pub struct Model {
    /// Unique identifier for the schedule
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Human-readable name (e.g., "Day job", "Freelance")
    pub name: String,
    /// Paycheck amount in dollars
    pub amount: Decimal,
    /// How often the paycheck arrives
    pub frequency: PayFrequency,
    /// Date of the next expected payday
    pub next_payday: Date,
}

/// Pay schedules stand alone; no enforced relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
