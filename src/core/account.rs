//! Virtual account business logic.
//!
//! Accounts partition a user's real money into purpose-labelled pools. They
//! are created at onboarding and upserted thereafter (one row per user and
//! type is the expected shape); nothing here ever deletes an account.

use crate::{
    entities::{Account, AccountType, account},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all virtual accounts owned by a user, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_accounts(db: &DatabaseConnection, user_id: &str) -> Result<Vec<account::Model>> {
    Account::find()
        .filter(account::Column::UserId.eq(user_id))
        .order_by_asc(account::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a user's account of a given type, returning None if absent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_account_by_type(
    db: &DatabaseConnection,
    user_id: &str,
    account_type: AccountType,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::UserId.eq(user_id))
        .filter(account::Column::AccountType.eq(account_type))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates or updates a user's account of the given type.
///
/// If the user already has an account of this type, its name and balance are
/// replaced; otherwise a new row is inserted. Balances may legitimately be
/// negative (an overdrawn pool), so only the name is validated.
///
/// # Errors
/// Returns a validation error for an empty name, or a database error.
pub async fn upsert_account(
    db: &DatabaseConnection,
    user_id: &str,
    name: String,
    account_type: AccountType,
    balance: Decimal,
) -> Result<account::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Account name cannot be empty".to_string(),
        });
    }

    if let Some(existing) = get_account_by_type(db, user_id, account_type).await? {
        let mut active: account::ActiveModel = existing.into();
        active.name = Set(name.trim().to_string());
        active.balance = Set(balance);
        active.update(db).await.map_err(Into::into)
    } else {
        let active = account::ActiveModel {
            user_id: Set(user_id.to_string()),
            name: Set(name.trim().to_string()),
            account_type: Set(account_type),
            balance: Set(balance),
            ..Default::default()
        };
        active.insert(db).await.map_err(Into::into)
    }
}
