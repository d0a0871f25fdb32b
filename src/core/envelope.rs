//! Envelope business logic - Handles all envelope-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! envelopes. An envelope's `current_balance` starts equal to its
//! `budget_amount` and is decremented as spending is recorded against it;
//! a negative balance is a valid over-budget signal, so balance patches are
//! not range-checked.

use crate::{
    entities::{Envelope, envelope},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields of an envelope that a partial update may change. Unset fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct EnvelopePatch {
    /// New name
    pub name: Option<String>,
    /// New budgeted amount
    pub budget_amount: Option<Decimal>,
    /// New remaining balance (may be negative - over budget)
    pub current_balance: Option<Decimal>,
    /// Whether the envelope is a non-negotiable obligation
    pub is_strict: Option<bool>,
    /// New category
    pub category: Option<String>,
    /// New display color
    pub color: Option<String>,
}

/// Retrieves all envelopes owned by a user, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_envelopes(db: &DatabaseConnection, user_id: &str) -> Result<Vec<envelope::Model>> {
    Envelope::find()
        .filter(envelope::Column::UserId.eq(user_id))
        .order_by_asc(envelope::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an envelope by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_envelope_by_id(
    db: &DatabaseConnection,
    envelope_id: i64,
) -> Result<Option<envelope::Model>> {
    Envelope::find_by_id(envelope_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new envelope, performing input validation.
///
/// The envelope starts with its full budget as the remaining balance.
///
/// # Errors
/// Returns a validation error for an empty name or a negative budget, or a
/// database error.
pub async fn create_envelope(
    db: &DatabaseConnection,
    user_id: &str,
    name: String,
    budget_amount: Decimal,
    is_strict: bool,
    category: String,
    color: String,
) -> Result<envelope::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Envelope name cannot be empty".to_string(),
        });
    }

    if budget_amount < Decimal::ZERO {
        return Err(Error::InvalidAmount {
            amount: budget_amount,
        });
    }

    let active = envelope::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        budget_amount: Set(budget_amount),
        current_balance: Set(budget_amount),
        is_strict: Set(is_strict),
        category: Set(category),
        color: Set(color),
        ..Default::default()
    };

    active.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an envelope.
///
/// # Errors
/// Returns `Error::NotFound` if the envelope does not exist, a validation
/// error for an empty name or negative budget, or a database error.
pub async fn update_envelope(
    db: &DatabaseConnection,
    envelope_id: i64,
    patch: EnvelopePatch,
) -> Result<envelope::Model> {
    let existing = get_envelope_by_id(db, envelope_id)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "envelope",
            id: envelope_id.to_string(),
        })?;

    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(Error::Validation {
            message: "Envelope name cannot be empty".to_string(),
        });
    }

    if let Some(amount) = patch.budget_amount
        && amount < Decimal::ZERO
    {
        return Err(Error::InvalidAmount { amount });
    }

    let mut active: envelope::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(budget_amount) = patch.budget_amount {
        active.budget_amount = Set(budget_amount);
    }
    if let Some(current_balance) = patch.current_balance {
        active.current_balance = Set(current_balance);
    }
    if let Some(is_strict) = patch.is_strict {
        active.is_strict = Set(is_strict);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }
    if let Some(color) = patch.color {
        active.color = Set(color);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes an envelope.
///
/// # Errors
/// Returns `Error::NotFound` if the envelope does not exist, or a database
/// error.
pub async fn delete_envelope(db: &DatabaseConnection, envelope_id: i64) -> Result<()> {
    let result = Envelope::delete_by_id(envelope_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "envelope",
            id: envelope_id.to_string(),
        });
    }
    Ok(())
}
