//! Financial snapshot reader - gathers everything a decision needs in one read.
//!
//! A snapshot is a best-effort point-in-time view of a user's finances:
//! accounts, envelopes, debts, unpaid bills, pay schedules, and settings. The
//! six reads are independent queries against the same user's data, so they
//! fan out concurrently and fail fast together. There is no locking or
//! consistency discipline across them; a concurrent write landing mid-read
//! yields a slightly stale view, which is acceptable for advisory,
//! non-transactional decisions.

use crate::{
    entities::{AccountType, account, bill, debt, envelope, pay_schedule, user_settings},
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Point-in-time view of one user's finances.
///
/// Lists default to empty when the user has no rows; settings are lazily
/// created with defaults on first read. The snapshot is read-only input to
/// the decision engine - nothing here mutates balances.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSnapshot {
    /// All virtual accounts owned by the user
    pub accounts: Vec<account::Model>,
    /// All envelopes owned by the user
    pub envelopes: Vec<envelope::Model>,
    /// All debts owned by the user
    pub debts: Vec<debt::Model>,
    /// Bills not yet paid this cycle
    pub unpaid_bills: Vec<bill::Model>,
    /// Expected income streams
    pub pay_schedules: Vec<pay_schedule::Model>,
    /// Decision preferences (defaulted and persisted if absent)
    pub settings: user_settings::Model,
}

impl FinancialSnapshot {
    /// Balance of the spending-type account, or zero if the user has none.
    /// A missing account degrades to a conservative "$0 available" rather
    /// than an error.
    #[must_use]
    pub fn spending_balance(&self) -> Decimal {
        self.balance_of(AccountType::Spending)
    }

    /// Balance of the bills-type account, or zero if absent.
    #[must_use]
    pub fn bills_balance(&self) -> Decimal {
        self.balance_of(AccountType::Bills)
    }

    fn balance_of(&self, account_type: AccountType) -> Decimal {
        self.accounts
            .iter()
            .find(|a| a.account_type == account_type)
            .map_or(Decimal::ZERO, |a| a.balance)
    }

    /// Total of all unpaid bill amounts.
    #[must_use]
    pub fn unpaid_bills_total(&self) -> Decimal {
        self.unpaid_bills.iter().map(|b| b.amount).sum()
    }

    /// Sum of strict envelopes' budgeted amounts - the non-negotiable
    /// obligations (rent, insurance, minimum debt service).
    #[must_use]
    pub fn strict_obligations(&self) -> Decimal {
        self.envelopes
            .iter()
            .filter(|e| e.is_strict)
            .map(|e| e.budget_amount)
            .sum()
    }

    /// Sum of all debts' minimum payments.
    #[must_use]
    pub fn debt_payments_total(&self) -> Decimal {
        self.debts.iter().map(|d| d.minimum_payment).sum()
    }

    /// Sum of all pay schedules' amounts.
    #[must_use]
    pub fn expected_income(&self) -> Decimal {
        self.pay_schedules.iter().map(|p| p.amount).sum()
    }
}

/// Reads a complete financial snapshot for a user.
///
/// The six underlying reads run concurrently and the first failure aborts
/// the whole snapshot with `Error::DataUnavailable`. No retry happens here;
/// the caller owns retry/backoff policy. The only side effect is persisting
/// default settings the first time a user is seen.
///
/// # Errors
/// Returns an error if any underlying query fails.
pub async fn read_snapshot(db: &DatabaseConnection, user_id: &str) -> Result<FinancialSnapshot> {
    let (accounts, envelopes, debts, unpaid_bills, pay_schedules, settings) = tokio::try_join!(
        crate::core::account::get_accounts(db, user_id),
        crate::core::envelope::get_envelopes(db, user_id),
        crate::core::debt::get_debts(db, user_id),
        crate::core::bill::get_unpaid_bills(db, user_id),
        crate::core::pay_schedule::get_pay_schedules(db, user_id),
        crate::core::settings::get_or_create_settings(db, user_id),
    )?;

    debug!(
        user_id,
        accounts = accounts.len(),
        envelopes = envelopes.len(),
        debts = debts.len(),
        unpaid_bills = unpaid_bills.len(),
        pay_schedules = pay_schedules.len(),
        "read financial snapshot"
    );

    Ok(FinancialSnapshot {
        accounts,
        envelopes,
        debts,
        unpaid_bills,
        pay_schedules,
        settings,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::DebtAttackMode;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_snapshot_defaults_to_empty_lists() -> Result<()> {
        let db = setup_test_db().await?;

        let snapshot = read_snapshot(&db, "user1").await?;

        assert!(snapshot.accounts.is_empty());
        assert!(snapshot.envelopes.is_empty());
        assert!(snapshot.debts.is_empty());
        assert!(snapshot.unpaid_bills.is_empty());
        assert!(snapshot.pay_schedules.is_empty());
        assert_eq!(snapshot.spending_balance(), Decimal::ZERO);
        assert_eq!(snapshot.bills_balance(), Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_persists_default_settings_on_first_read() -> Result<()> {
        let db = setup_test_db().await?;

        let snapshot = read_snapshot(&db, "user1").await?;
        assert_eq!(snapshot.settings.debt_attack_mode, DebtAttackMode::Avalanche);
        assert!(snapshot.settings.safe_to_spend_warning);

        // The defaults were persisted, not just defaulted in memory
        let stored = crate::core::settings::get_settings(&db, "user1").await?;
        assert_eq!(stored, Some(snapshot.settings));

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_is_scoped_to_one_user() -> Result<()> {
        let db = setup_test_db().await?;
        create_spending_account(&db, "user1", dec!(850.00)).await?;
        create_spending_account(&db, "user2", dec!(10.00)).await?;
        create_test_bill(&db, "user2", "Rent", dec!(1200.00), 1).await?;

        let snapshot = read_snapshot(&db, "user1").await?;
        assert_eq!(snapshot.spending_balance(), dec!(850.00));
        assert!(snapshot.unpaid_bills.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_excludes_paid_bills() -> Result<()> {
        let db = setup_test_db().await?;
        let bill = create_test_bill(&db, "user1", "Electric", dec!(90.00), 12).await?;
        create_test_bill(&db, "user1", "Water", dec!(40.00), 20).await?;
        crate::core::bill::mark_bill_paid(
            &db,
            bill.id,
            chrono::NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        )
        .await?;

        let snapshot = read_snapshot(&db, "user1").await?;
        assert_eq!(snapshot.unpaid_bills.len(), 1);
        assert_eq!(snapshot.unpaid_bills[0].name, "Water");
        assert_eq!(snapshot.unpaid_bills_total(), dec!(40.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_derived_totals() -> Result<()> {
        let db = setup_test_db().await?;
        create_spending_account(&db, "user1", dec!(500.00)).await?;
        create_bills_account(&db, "user1", dec!(300.00)).await?;
        create_strict_envelope(&db, "user1", "Rent", dec!(1200.00)).await?;
        create_test_envelope(&db, "user1", "Fun", dec!(150.00)).await?;
        create_test_debt(&db, "user1", "Visa", dec!(35.00), 15).await?;
        create_test_debt(&db, "user1", "Car", dec!(250.00), 28).await?;
        create_test_pay_schedule(&db, "user1", "Day job", dec!(2000.00), "2025-06-20").await?;

        let snapshot = read_snapshot(&db, "user1").await?;
        assert_eq!(snapshot.spending_balance(), dec!(500.00));
        assert_eq!(snapshot.bills_balance(), dec!(300.00));
        assert_eq!(snapshot.strict_obligations(), dec!(1200.00));
        assert_eq!(snapshot.debt_payments_total(), dec!(285.00));
        assert_eq!(snapshot.expected_income(), dec!(2000.00));

        Ok(())
    }
}
