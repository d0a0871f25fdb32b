//! Shared test utilities for `SafeSpend`.
//!
//! Two families of helpers live here: async factories that persist test rows
//! into an in-memory `SQLite` database, and pure builders that construct
//! entity models and snapshots directly for the decision-engine tests that
//! never need a database.

use crate::{
    core::{account, bill, debt, envelope, pay_schedule, snapshot::FinancialSnapshot},
    entities::{self, AccountType, PayFrequency},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a spending-type account holding the given balance.
pub async fn create_spending_account(
    db: &DatabaseConnection,
    user_id: &str,
    balance: Decimal,
) -> Result<entities::account::Model> {
    account::upsert_account(
        db,
        user_id,
        "Spending".to_string(),
        AccountType::Spending,
        balance,
    )
    .await
}

/// Creates a bills-type account holding the given balance.
pub async fn create_bills_account(
    db: &DatabaseConnection,
    user_id: &str,
    balance: Decimal,
) -> Result<entities::account::Model> {
    account::upsert_account(db, user_id, "Bills".to_string(), AccountType::Bills, balance).await
}

/// Creates a non-strict test envelope. The balance starts at the full budget.
pub async fn create_test_envelope(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    budget_amount: Decimal,
) -> Result<entities::envelope::Model> {
    envelope::create_envelope(
        db,
        user_id,
        name.to_string(),
        budget_amount,
        false, // is_strict
        "general".to_string(),
        "#888888".to_string(),
    )
    .await
}

/// Creates a strict (non-negotiable obligation) test envelope.
pub async fn create_strict_envelope(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    budget_amount: Decimal,
) -> Result<entities::envelope::Model> {
    envelope::create_envelope(
        db,
        user_id,
        name.to_string(),
        budget_amount,
        true, // is_strict
        "obligations".to_string(),
        "#d32f2f".to_string(),
    )
    .await
}

/// Creates an unpaid test bill with sensible defaults (no must-have day,
/// no autopay).
pub async fn create_test_bill(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    amount: Decimal,
    due_day: i32,
) -> Result<entities::bill::Model> {
    bill::create_bill(
        db,
        user_id,
        name.to_string(),
        amount,
        due_day,
        None,  // must_have_by_day
        false, // is_auto_pay
        "utilities".to_string(),
    )
    .await
}

/// Creates a test debt with sensible defaults around the given minimum
/// payment and due day.
pub async fn create_test_debt(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    minimum_payment: Decimal,
    due_day: i32,
) -> Result<entities::debt::Model> {
    debt::create_debt(
        db,
        user_id,
        name.to_string(),
        dec!(1000.00), // total_amount
        dec!(800.00),  // current_balance
        dec!(15.00),   // interest_rate
        minimum_payment,
        due_day,
        false, // biweekly_payment
        "credit_card".to_string(),
    )
    .await
}

/// Creates a test pay schedule from a `YYYY-MM-DD` payday string.
pub async fn create_test_pay_schedule(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    amount: Decimal,
    next_payday: &str,
) -> Result<entities::pay_schedule::Model> {
    let payday =
        NaiveDate::parse_from_str(next_payday, "%Y-%m-%d").map_err(|e| Error::Validation {
            message: format!("bad test payday {next_payday}: {e}"),
        })?;
    pay_schedule::create_pay_schedule(
        db,
        user_id,
        name.to_string(),
        amount,
        PayFrequency::Biweekly,
        payday,
    )
    .await
}

/// A snapshot with no accounts, envelopes, debts, bills, or schedules, and
/// default settings for `"user1"`.
#[must_use]
pub fn empty_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        accounts: Vec::new(),
        envelopes: Vec::new(),
        debts: Vec::new(),
        unpaid_bills: Vec::new(),
        pay_schedules: Vec::new(),
        settings: entities::user_settings::Model::defaults_for("user1"),
    }
}

/// A snapshot whose only account is a spending account with the given
/// balance.
#[must_use]
pub fn snapshot_with_spending(balance: Decimal) -> FinancialSnapshot {
    let mut snapshot = empty_snapshot();
    snapshot
        .accounts
        .push(make_account(1, AccountType::Spending, balance));
    snapshot
}

/// Builds an account model without touching a database.
#[must_use]
pub fn make_account(id: i64, account_type: AccountType, balance: Decimal) -> entities::account::Model {
    entities::account::Model {
        id,
        user_id: "user1".to_string(),
        name: format!("account-{id}"),
        account_type,
        balance,
    }
}

/// Builds an envelope model without touching a database. Both the budget
/// and the remaining balance are set to `amount`.
#[must_use]
pub fn make_envelope(
    id: i64,
    name: &str,
    amount: Decimal,
    is_strict: bool,
) -> entities::envelope::Model {
    entities::envelope::Model {
        id,
        user_id: "user1".to_string(),
        name: name.to_string(),
        budget_amount: amount,
        current_balance: amount,
        is_strict,
        category: "general".to_string(),
        color: "#888888".to_string(),
    }
}

/// Builds an unpaid bill model without touching a database.
#[must_use]
pub fn make_bill(
    id: i64,
    name: &str,
    amount: Decimal,
    due_day: i32,
    must_have_by_day: Option<i32>,
) -> entities::bill::Model {
    entities::bill::Model {
        id,
        user_id: "user1".to_string(),
        name: name.to_string(),
        amount,
        due_day,
        must_have_by_day,
        is_auto_pay: false,
        is_paid: false,
        paid_date: None,
        category: "utilities".to_string(),
    }
}

/// Builds a debt model without touching a database.
#[must_use]
pub fn make_debt(
    id: i64,
    name: &str,
    minimum_payment: Decimal,
    due_day: i32,
) -> entities::debt::Model {
    entities::debt::Model {
        id,
        user_id: "user1".to_string(),
        name: name.to_string(),
        total_amount: dec!(1000.00),
        current_balance: dec!(800.00),
        interest_rate: dec!(15.00),
        minimum_payment,
        due_day,
        biweekly_payment: false,
        category: "credit_card".to_string(),
    }
}

/// Builds a pay schedule model without touching a database.
#[must_use]
pub fn make_pay_schedule(
    id: i64,
    amount: Decimal,
    next_payday: NaiveDate,
) -> entities::pay_schedule::Model {
    entities::pay_schedule::Model {
        id,
        user_id: "user1".to_string(),
        name: format!("schedule-{id}"),
        amount,
        frequency: PayFrequency::Biweekly,
        next_payday,
    }
}
