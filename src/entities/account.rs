//! Virtual account entity - Represents the user's virtual cash pools.
//!
//! Each user partitions real money into virtual accounts by purpose. The
//! `spending` account is the canonical source of "available cash" for
//! affordability decisions; the `bills` account backs upcoming obligations.
//! Accounts are created at onboarding and upserted thereafter, never deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purpose of a virtual account. One spending-type account per user is
/// expected; the decision engine degrades to a zero balance if it is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Reserved for upcoming bills
    #[sea_orm(string_value = "bills")]
    Bills,
    /// Discretionary cash - the source of "Safe to Spend"
    #[sea_orm(string_value = "spending")]
    Spending,
    /// Long-term savings
    #[sea_orm(string_value = "savings")]
    Savings,
}

/// Virtual account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "virtual_accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Human-readable name (e.g., "Everyday spending")
    pub name: String,
    /// Purpose of the account
    pub account_type: AccountType,
    /// Current balance in dollars, fixed-point
    pub balance: Decimal,
}

/// `VirtualAccount` has no enforced relationships; bills reference accounts
/// by id as soft references only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
