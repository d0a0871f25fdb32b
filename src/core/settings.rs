//! User settings business logic.
//!
//! One settings row per user, upserted and never deleted. The snapshot
//! reader calls [`get_or_create_settings`], which persists defaults the
//! first time a user is seen so later reads and writes have a row to work
//! against.

use crate::{
    entities::{DebtAttackMode, UserSettings, user_settings},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Retrieves a user's settings row, if one exists.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_settings(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<user_settings::Model>> {
    UserSettings::find_by_id(user_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user's settings, creating and persisting the defaults
/// (avalanche mode, low-balance warnings on) if the user has none yet.
///
/// # Errors
/// Returns an error if the query or the lazy insert fails.
pub async fn get_or_create_settings(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<user_settings::Model> {
    if let Some(settings) = get_settings(db, user_id).await? {
        return Ok(settings);
    }

    debug!(user_id, "no settings row, persisting defaults");
    let defaults = user_settings::Model::defaults_for(user_id);
    let active = user_settings::ActiveModel {
        user_id: Set(defaults.user_id.clone()),
        debt_attack_mode: Set(defaults.debt_attack_mode),
        safe_to_spend_warning: Set(defaults.safe_to_spend_warning),
    };
    active.insert(db).await.map_err(Into::into)
}

/// Creates or replaces a user's settings.
///
/// # Errors
/// Returns an error if the database write fails.
pub async fn upsert_settings(
    db: &DatabaseConnection,
    user_id: &str,
    debt_attack_mode: DebtAttackMode,
    safe_to_spend_warning: bool,
) -> Result<user_settings::Model> {
    if let Some(existing) = get_settings(db, user_id).await? {
        let mut active: user_settings::ActiveModel = existing.into();
        active.debt_attack_mode = Set(debt_attack_mode);
        active.safe_to_spend_warning = Set(safe_to_spend_warning);
        active.update(db).await.map_err(Into::into)
    } else {
        let active = user_settings::ActiveModel {
            user_id: Set(user_id.to_string()),
            debt_attack_mode: Set(debt_attack_mode),
            safe_to_spend_warning: Set(safe_to_spend_warning),
        };
        active.insert(db).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_get_or_create_persists_defaults_once() -> Result<()> {
        let db = setup_test_db().await?;

        let first = get_or_create_settings(&db, "user1").await?;
        assert_eq!(first.debt_attack_mode, DebtAttackMode::Avalanche);
        assert!(first.safe_to_spend_warning);

        // Second call reads the same row, not a fresh insert
        let second = get_or_create_settings(&db, "user1").await?;
        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_replaces_preferences() -> Result<()> {
        let db = setup_test_db().await?;
        get_or_create_settings(&db, "user1").await?;

        let updated = upsert_settings(&db, "user1", DebtAttackMode::Snowball, false).await?;
        assert_eq!(updated.debt_attack_mode, DebtAttackMode::Snowball);
        assert!(!updated.safe_to_spend_warning);

        // get_or_create no longer overwrites the stored preferences
        let read_back = get_or_create_settings(&db, "user1").await?;
        assert_eq!(read_back, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_inserts_when_absent() -> Result<()> {
        let db = setup_test_db().await?;

        let created = upsert_settings(&db, "user1", DebtAttackMode::Snowball, true).await?;
        assert_eq!(created.user_id, "user1");
        assert_eq!(created.debt_attack_mode, DebtAttackMode::Snowball);

        Ok(())
    }
}
