//! Bill entity - Represents a recurring obligation due on a day of month.
//!
//! `must_have_by_day` marks the day funds must already be available, which can
//! be earlier than the due day (e.g., autopay pulls). Unpaid bills feed the
//! affordability and funding calculations; paid bills are ignored by the
//! decision engine until reset by the (out-of-core) billing cycle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    /// Unique identifier for the bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Human-readable name (e.g., "Rent", "Electric")
    pub name: String,
    /// Amount due in dollars
    pub amount: Decimal,
    /// Day of month (1-31) the bill is due
    pub due_day: i32,
    /// Day funds must be available, possibly earlier than `due_day`
    pub must_have_by_day: Option<i32>,
    /// Whether the bill is paid automatically
    pub is_auto_pay: bool,
    /// Whether the bill has been paid this cycle
    pub is_paid: bool,
    /// Date the bill was paid, if paid
    pub paid_date: Option<Date>,
    /// Bill category for organization (e.g., "housing", "utilities")
    pub category: String,
}

/// Bills reference envelopes/accounts softly (by id); no enforced relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
