//! Debt entity - Represents an outstanding debt with a minimum payment.
//!
//! `current_balance <= total_amount` is expected but not enforced here. The
//! decision engine only reads `minimum_payment` and `due_day`; payoff-strategy
//! ordering (avalanche/snowball) is a stored preference, not computed here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    /// Unique identifier for the debt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Human-readable name (e.g., "Car loan", "Visa")
    pub name: String,
    /// Original amount owed in dollars
    pub total_amount: Decimal,
    /// Remaining amount owed in dollars
    pub current_balance: Decimal,
    /// Annual interest rate as a percentage, two decimal places
    pub interest_rate: Decimal,
    /// Minimum payment due each cycle in dollars
    pub minimum_payment: Decimal,
    /// Day of month (1-31) the payment is due
    pub due_day: i32,
    /// Whether payments are made every two weeks instead of monthly
    pub biweekly_payment: bool,
    /// Debt category for organization (e.g., "credit_card", "loan")
    pub category: String,
}

/// Debts stand alone; no enforced relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
