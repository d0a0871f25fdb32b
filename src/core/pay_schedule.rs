//! Pay schedule business logic.
//!
//! Provides functions for creating, retrieving, updating, and deleting pay
//! schedules. The funding planner sums all of a user's schedule amounts for
//! expected income and takes the earliest `next_payday` across them.

use crate::{
    entities::{PayFrequency, PaySchedule, pay_schedule},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields of a pay schedule that a partial update may change.
#[derive(Debug, Clone, Default)]
pub struct PaySchedulePatch {
    /// New name
    pub name: Option<String>,
    /// New paycheck amount
    pub amount: Option<Decimal>,
    /// New frequency
    pub frequency: Option<PayFrequency>,
    /// New next payday
    pub next_payday: Option<NaiveDate>,
}

/// Retrieves all pay schedules owned by a user, soonest payday first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_pay_schedules(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<pay_schedule::Model>> {
    PaySchedule::find()
        .filter(pay_schedule::Column::UserId.eq(user_id))
        .order_by_asc(pay_schedule::Column::NextPayday)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new pay schedule, performing input validation.
///
/// # Errors
/// Returns a validation error for an empty name or a negative amount, or a
/// database error.
pub async fn create_pay_schedule(
    db: &DatabaseConnection,
    user_id: &str,
    name: String,
    amount: Decimal,
    frequency: PayFrequency,
    next_payday: NaiveDate,
) -> Result<pay_schedule::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Pay schedule name cannot be empty".to_string(),
        });
    }

    if amount < Decimal::ZERO {
        return Err(Error::InvalidAmount { amount });
    }

    let active = pay_schedule::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        amount: Set(amount),
        frequency: Set(frequency),
        next_payday: Set(next_payday),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a pay schedule.
///
/// # Errors
/// Returns `Error::NotFound` if the schedule does not exist, a validation
/// error for bad fields, or a database error.
pub async fn update_pay_schedule(
    db: &DatabaseConnection,
    schedule_id: i64,
    patch: PaySchedulePatch,
) -> Result<pay_schedule::Model> {
    let existing = PaySchedule::find_by_id(schedule_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "pay schedule",
            id: schedule_id.to_string(),
        })?;

    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(Error::Validation {
            message: "Pay schedule name cannot be empty".to_string(),
        });
    }

    if let Some(amount) = patch.amount
        && amount < Decimal::ZERO
    {
        return Err(Error::InvalidAmount { amount });
    }

    let mut active: pay_schedule::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(amount) = patch.amount {
        active.amount = Set(amount);
    }
    if let Some(frequency) = patch.frequency {
        active.frequency = Set(frequency);
    }
    if let Some(next_payday) = patch.next_payday {
        active.next_payday = Set(next_payday);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a pay schedule.
///
/// # Errors
/// Returns `Error::NotFound` if the schedule does not exist, or a database
/// error.
pub async fn delete_pay_schedule(db: &DatabaseConnection, schedule_id: i64) -> Result<()> {
    let result = PaySchedule::delete_by_id(schedule_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "pay schedule",
            id: schedule_id.to_string(),
        });
    }
    Ok(())
}
