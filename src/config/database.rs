//! Database configuration module for `SafeSpend`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Account, Bill, Debt, Envelope, PaySchedule, UserSettings};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/safespend.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(&get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for virtual accounts, envelopes, debts, bills, pay schedules, and settings.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let account_table = schema.create_table_from_entity(Account);
    let envelope_table = schema.create_table_from_entity(Envelope);
    let debt_table = schema.create_table_from_entity(Debt);
    let bill_table = schema.create_table_from_entity(Bill);
    let pay_schedule_table = schema.create_table_from_entity(PaySchedule);
    let user_settings_table = schema.create_table_from_entity(UserSettings);

    db.execute(builder.build(&account_table)).await?;
    db.execute(builder.build(&envelope_table)).await?;
    db.execute(builder.build(&debt_table)).await?;
    db.execute(builder.build(&bill_table)).await?;
    db.execute(builder.build(&pay_schedule_table)).await?;
    db.execute(builder.build(&user_settings_table)).await?;

    Ok(())
}
