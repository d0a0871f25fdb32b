//! Envelope entity - Represents a named budget bucket.
//!
//! An envelope tracks a remaining balance independently of the account holding
//! the actual cash. `current_balance` starts at `budget_amount` and decreases
//! as spending is recorded against it; it may go negative (over budget), which
//! is a signal to the decision engine, not an error.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Envelope database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "envelopes")]
pub struct Model {
    /// Unique identifier for the envelope
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Human-readable name of the envelope (e.g., "Groceries", "Rent")
    pub name: String,
    /// Budgeted amount per period in dollars
    pub budget_amount: Decimal,
    /// Remaining balance in dollars; negative means over budget
    pub current_balance: Decimal,
    /// Whether this envelope is a non-negotiable obligation
    /// (rent, insurance, minimum debt service)
    pub is_strict: bool,
    /// Budget category for organization (e.g., "housing", "food")
    pub category: String,
    /// Display color for the UI layer
    pub color: String,
}

/// Envelopes are referenced softly (by id) from bills; no enforced relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
