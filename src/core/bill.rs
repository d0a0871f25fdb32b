//! Bill business logic - Handles all bill-related operations.
//!
//! Provides functions for creating, retrieving, updating, marking paid, and
//! deleting bills. The decision engine only ever reads unpaid bills;
//! [`mark_bill_paid`] is how a bill leaves that set until the (out-of-core)
//! billing cycle resets it.

use crate::{
    entities::{Bill, bill},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields of a bill that a partial update may change.
#[derive(Debug, Clone, Default)]
pub struct BillPatch {
    /// New name
    pub name: Option<String>,
    /// New amount
    pub amount: Option<Decimal>,
    /// New due day (1-31)
    pub due_day: Option<i32>,
    /// New must-have-by day; `Some(None)` clears it
    pub must_have_by_day: Option<Option<i32>>,
    /// Whether the bill pays itself automatically
    pub is_auto_pay: Option<bool>,
    /// New category
    pub category: Option<String>,
}

fn validate_due_day(day: i32) -> Result<()> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(Error::DueDayOutOfRange { day })
    }
}

fn validate_must_have(must_have_by_day: Option<i32>, due_day: i32) -> Result<()> {
    if let Some(day) = must_have_by_day {
        validate_due_day(day)?;
        if day > due_day {
            return Err(Error::Validation {
                message: format!(
                    "must_have_by_day ({day}) cannot be later than due_day ({due_day})"
                ),
            });
        }
    }
    Ok(())
}

/// Retrieves all bills owned by a user, ordered by due day.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_bills(db: &DatabaseConnection, user_id: &str) -> Result<Vec<bill::Model>> {
    Bill::find()
        .filter(bill::Column::UserId.eq(user_id))
        .order_by_asc(bill::Column::DueDay)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the unpaid bills owned by a user, ordered by due day. This is
/// the set the decision engine works from.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_unpaid_bills(db: &DatabaseConnection, user_id: &str) -> Result<Vec<bill::Model>> {
    Bill::find()
        .filter(bill::Column::UserId.eq(user_id))
        .filter(bill::Column::IsPaid.eq(false))
        .order_by_asc(bill::Column::DueDay)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new bill, performing input validation. New bills start unpaid.
///
/// # Errors
/// Returns a validation error for an empty name, a negative amount, a due
/// day outside 1-31, or a must-have day after the due day; or a database
/// error.
pub async fn create_bill(
    db: &DatabaseConnection,
    user_id: &str,
    name: String,
    amount: Decimal,
    due_day: i32,
    must_have_by_day: Option<i32>,
    is_auto_pay: bool,
    category: String,
) -> Result<bill::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Bill name cannot be empty".to_string(),
        });
    }

    if amount < Decimal::ZERO {
        return Err(Error::InvalidAmount { amount });
    }

    validate_due_day(due_day)?;
    validate_must_have(must_have_by_day, due_day)?;

    let active = bill::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        amount: Set(amount),
        due_day: Set(due_day),
        must_have_by_day: Set(must_have_by_day),
        is_auto_pay: Set(is_auto_pay),
        is_paid: Set(false),
        paid_date: Set(None),
        category: Set(category),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a bill.
///
/// # Errors
/// Returns `Error::NotFound` if the bill does not exist, a validation error
/// for bad fields, or a database error.
pub async fn update_bill(
    db: &DatabaseConnection,
    bill_id: i64,
    patch: BillPatch,
) -> Result<bill::Model> {
    let existing = Bill::find_by_id(bill_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "bill",
            id: bill_id.to_string(),
        })?;

    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(Error::Validation {
            message: "Bill name cannot be empty".to_string(),
        });
    }

    if let Some(amount) = patch.amount
        && amount < Decimal::ZERO
    {
        return Err(Error::InvalidAmount { amount });
    }

    let due_day = patch.due_day.unwrap_or(existing.due_day);
    validate_due_day(due_day)?;
    let must_have_by_day = patch.must_have_by_day.unwrap_or(existing.must_have_by_day);
    validate_must_have(must_have_by_day, due_day)?;

    let mut active: bill::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(amount) = patch.amount {
        active.amount = Set(amount);
    }
    if patch.due_day.is_some() {
        active.due_day = Set(due_day);
    }
    if patch.must_have_by_day.is_some() {
        active.must_have_by_day = Set(must_have_by_day);
    }
    if let Some(is_auto_pay) = patch.is_auto_pay {
        active.is_auto_pay = Set(is_auto_pay);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }

    active.update(db).await.map_err(Into::into)
}

/// Marks a bill as paid on the given date, removing it from the unpaid set
/// the decision engine reads.
///
/// # Errors
/// Returns `Error::NotFound` if the bill does not exist, or a database error.
pub async fn mark_bill_paid(
    db: &DatabaseConnection,
    bill_id: i64,
    paid_date: NaiveDate,
) -> Result<bill::Model> {
    let existing = Bill::find_by_id(bill_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "bill",
            id: bill_id.to_string(),
        })?;

    let mut active: bill::ActiveModel = existing.into();
    active.is_paid = Set(true);
    active.paid_date = Set(Some(paid_date));
    active.update(db).await.map_err(Into::into)
}

/// Deletes a bill.
///
/// # Errors
/// Returns `Error::NotFound` if the bill does not exist, or a database error.
pub async fn delete_bill(db: &DatabaseConnection, bill_id: i64) -> Result<()> {
    let result = Bill::delete_by_id(bill_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "bill",
            id: bill_id.to_string(),
        });
    }
    Ok(())
}
