//! Debt business logic - Handles all debt-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! debts. Only `minimum_payment` and `due_day` feed the decision engine;
//! the rest is bookkeeping for the surface layer. `current_balance` above
//! `total_amount` is tolerated (accrued interest), not rejected.

use crate::{
    entities::{Debt, debt},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields of a debt that a partial update may change.
#[derive(Debug, Clone, Default)]
pub struct DebtPatch {
    /// New name
    pub name: Option<String>,
    /// New original amount
    pub total_amount: Option<Decimal>,
    /// New remaining balance
    pub current_balance: Option<Decimal>,
    /// New annual interest rate (percent)
    pub interest_rate: Option<Decimal>,
    /// New minimum payment
    pub minimum_payment: Option<Decimal>,
    /// New due day (1-31)
    pub due_day: Option<i32>,
    /// Whether payments are biweekly
    pub biweekly_payment: Option<bool>,
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

/// Retrieves all debts owned by a user, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_debts(db: &DatabaseConnection, user_id: &str) -> Result<Vec<debt::Model>> {
    Debt::find()
        .filter(debt::Column::UserId.eq(user_id))
        .order_by_asc(debt::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new debt, performing input validation.
///
/// # Errors
/// Returns a validation error for an empty name, negative amounts, or a due
/// day outside 1-31, or a database error.
#[allow(clippy::too_many_arguments)]
pub async fn create_debt(
    db: &DatabaseConnection,
    user_id: &str,
    name: String,
    total_amount: Decimal,
    current_balance: Decimal,
    interest_rate: Decimal,
    minimum_payment: Decimal,
    due_day: i32,
    biweekly_payment: bool,
    category: String,
) -> Result<debt::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Debt name cannot be empty".to_string(),
        });
    }

    for amount in [total_amount, current_balance, interest_rate, minimum_payment] {
        if amount < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount });
        }
    }

    validate_due_day(due_day)?;

    let active = debt::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        total_amount: Set(total_amount),
        current_balance: Set(current_balance),
        interest_rate: Set(interest_rate),
        minimum_payment: Set(minimum_payment),
        due_day: Set(due_day),
        biweekly_payment: Set(biweekly_payment),
        category: Set(category),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a debt.
///
/// # Errors
/// Returns `Error::NotFound` if the debt does not exist, a validation error
/// for bad fields, or a database error.
pub async fn update_debt(
    db: &DatabaseConnection,
    debt_id: i64,
    patch: DebtPatch,
) -> Result<debt::Model> {
    let existing = Debt::find_by_id(debt_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "debt",
            id: debt_id.to_string(),
        })?;

    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(Error::Validation {
            message: "Debt name cannot be empty".to_string(),
        });
    }

    for amount in [
        patch.total_amount,
        patch.current_balance,
        patch.interest_rate,
        patch.minimum_payment,
    ]
    .into_iter()
    .flatten()
    {
        if amount < Decimal::ZERO {
            return Err(Error::InvalidAmount { amount });
        }
    }

    if let Some(day) = patch.due_day {
        validate_due_day(day)?;
    }

    let mut active: debt::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(total_amount) = patch.total_amount {
        active.total_amount = Set(total_amount);
    }
    if let Some(current_balance) = patch.current_balance {
        active.current_balance = Set(current_balance);
    }
    if let Some(interest_rate) = patch.interest_rate {
        active.interest_rate = Set(interest_rate);
    }
    if let Some(minimum_payment) = patch.minimum_payment {
        active.minimum_payment = Set(minimum_payment);
    }
    if let Some(due_day) = patch.due_day {
        active.due_day = Set(due_day);
    }
    if let Some(biweekly_payment) = patch.biweekly_payment {
        active.biweekly_payment = Set(biweekly_payment);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a debt.
///
/// # Errors
/// Returns `Error::NotFound` if the debt does not exist, or a database error.
pub async fn delete_debt(db: &DatabaseConnection, debt_id: i64) -> Result<()> {
    let result = Debt::delete_by_id(debt_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "debt",
            id: debt_id.to_string(),
        });
    }
    Ok(())
}
