//! Urgency ranker - turns due dates into a priority-ordered action list.
//!
//! Each unpaid bill and each debt is measured by how many days remain until
//! its due day, wrapping into next month when the due day has already passed
//! this month. Bills additionally track the day funds must be available,
//! which can be earlier than the due day; the more urgent of the two drives
//! classification. The result is a flat, pre-sorted list the surface layer
//! can render directly.

use crate::{
    config::policy::Policy,
    core::snapshot::read_snapshot,
    entities::{bill, debt},
    errors::Result,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

/// How soon an obligation needs attention, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due today - act now
    Today,
    /// Due within the urgent window
    Urgent,
    /// Coming up within the week (bills only)
    Warning,
}

impl Urgency {
    /// Sort rank: today < urgent < warning.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Today => 0,
            Self::Urgent => 1,
            Self::Warning => 2,
        }
    }
}

/// What kind of obligation an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// An unpaid bill
    Bill,
    /// A debt minimum payment
    Debt,
}

/// One entry in the priority-ordered action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgentAction {
    /// Whether this is a bill or a debt payment
    pub kind: ActionKind,
    /// How soon it needs attention
    pub urgency: Urgency,
    /// Templated title; upper-cased at the "today" tier
    pub title: String,
    /// One-line description with the amount and timing
    pub description: String,
    /// Amount in dollars (bill amount or debt minimum payment)
    pub amount: Decimal,
    /// Days until funds are needed (the smaller of due-day and must-have
    /// distances for bills)
    pub days_until: u32,
    /// Id of the source bill or debt
    pub source_id: i64,
}

/// Number of days in the month containing `today`.
fn days_in_month(today: NaiveDate) -> u32 {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Days from `current_day` until `due_day`, wrapping into next month when
/// the due day has already passed.
const fn days_until(due_day: u32, current_day: u32, month_len: u32) -> u32 {
    if due_day >= current_day {
        due_day - current_day
    } else {
        month_len - current_day + due_day
    }
}

/// Ranks unpaid bills and debts into a priority-ordered action list.
///
/// Classification, first match wins: due (or must-have) today; due within
/// `policy.urgent_window_days` or must-have within
/// `policy.must_have_window_days`; bills only, due within
/// `policy.warning_window_days`. Anything further out produces no action.
/// The result is sorted ascending by (urgency rank, days until).
#[must_use]
pub fn rank_urgent_actions(
    bills: &[bill::Model],
    debts: &[debt::Model],
    today: NaiveDate,
    policy: &Policy,
) -> Vec<UrgentAction> {
    let current_day = today.day();
    let month_len = days_in_month(today);
    let mut actions: Vec<UrgentAction> = Vec::new();

    for bill in bills {
        let due_day = bill.due_day.clamp(1, 31).unsigned_abs();
        let must_have_day = bill
            .must_have_by_day
            .map_or(due_day, |d| d.clamp(1, 31).unsigned_abs());

        let due_in = days_until(due_day, current_day, month_len);
        let must_have_in = days_until(must_have_day, current_day, month_len);
        let funds_needed_in = due_in.min(must_have_in);

        let urgency = if due_in == 0 || must_have_in == 0 {
            Urgency::Today
        } else if due_in <= policy.urgent_window_days
            || must_have_in <= policy.must_have_window_days
        {
            Urgency::Urgent
        } else if due_in <= policy.warning_window_days {
            Urgency::Warning
        } else {
            continue;
        };

        let (title, description) = match urgency {
            Urgency::Today => (
                format!("PAY {} TODAY", bill.name.to_uppercase()),
                format!("{} (${:.2}) needs funds today.", bill.name, bill.amount),
            ),
            Urgency::Urgent => (
                format!("Pay {} soon", bill.name),
                format!(
                    "{} (${:.2}) needs funds within {funds_needed_in} days.",
                    bill.name, bill.amount
                ),
            ),
            Urgency::Warning => (
                format!("{} coming up", bill.name),
                format!("{} (${:.2}) is due in {due_in} days.", bill.name, bill.amount),
            ),
        };

        actions.push(UrgentAction {
            kind: ActionKind::Bill,
            urgency,
            title,
            description,
            amount: bill.amount,
            days_until: funds_needed_in,
            source_id: bill.id,
        });
    }

    for debt in debts {
        let due_day = debt.due_day.clamp(1, 31).unsigned_abs();
        let due_in = days_until(due_day, current_day, month_len);

        // Debts have no heads-up tier; only today/urgent
        let urgency = if due_in == 0 {
            Urgency::Today
        } else if due_in <= policy.urgent_window_days {
            Urgency::Urgent
        } else {
            continue;
        };

        let (title, description) = match urgency {
            Urgency::Today => (
                format!("PAY {} TODAY", debt.name.to_uppercase()),
                format!(
                    "Minimum payment of ${:.2} on {} is due today.",
                    debt.minimum_payment, debt.name
                ),
            ),
            _ => (
                format!("Pay {} soon", debt.name),
                format!(
                    "Minimum payment of ${:.2} on {} is due in {due_in} days.",
                    debt.minimum_payment, debt.name
                ),
            ),
        };

        actions.push(UrgentAction {
            kind: ActionKind::Debt,
            urgency,
            title,
            description,
            amount: debt.minimum_payment,
            days_until: due_in,
            source_id: debt.id,
        });
    }

    actions.sort_by_key(|a| (a.urgency.rank(), a.days_until));
    actions
}

/// Boundary entry point: reads the user's snapshot and ranks obligations.
///
/// # Errors
/// Returns `Error::DataUnavailable` if the snapshot cannot be read.
pub async fn get_urgent_actions(
    db: &DatabaseConnection,
    user_id: &str,
    policy: &Policy,
    today: NaiveDate,
) -> Result<Vec<UrgentAction>> {
    let snapshot = read_snapshot(db, user_id).await?;
    let actions = rank_urgent_actions(&snapshot.unpaid_bills, &snapshot.debts, today, policy);
    info!(user_id, actions = actions.len(), "ranked urgent actions");
    Ok(actions)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_wraps_at_month_boundary() {
        // Bill due on the 1st, seen from the 29th of a 30-day month:
        // 30 - 29 + 1 = 2 days out -> urgent
        let bills = vec![make_bill(1, "Rent", dec!(1200.00), 1, None)];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 6, 29), &Policy::default());

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].urgency, Urgency::Urgent);
        assert_eq!(actions[0].days_until, 2);
    }

    #[test]
    fn test_debt_due_today_gets_uppercase_title() {
        let debts = vec![make_debt(1, "Visa", dec!(35.00), 5)];

        let actions = rank_urgent_actions(&[], &debts, date(2025, 6, 5), &Policy::default());

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].urgency, Urgency::Today);
        assert_eq!(actions[0].days_until, 0);
        assert!(actions[0].title.contains("VISA"));
        assert_eq!(actions[0].kind, ActionKind::Debt);
    }

    #[test]
    fn test_must_have_day_drives_bill_urgency() {
        // Due on the 20th but funds must be there by the 10th
        let bills = vec![make_bill(1, "Insurance", dec!(130.00), 20, Some(10))];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 6, 10), &Policy::default());

        assert_eq!(actions[0].urgency, Urgency::Today);
        assert_eq!(actions[0].days_until, 0);
        assert!(actions[0].title.starts_with("PAY INSURANCE"));
    }

    #[test]
    fn test_bill_warning_tier() {
        // 7 days out is a heads-up; 8 days out is silence
        let bills = vec![
            make_bill(1, "Electric", dec!(90.00), 17, None),
            make_bill(2, "Internet", dec!(60.00), 18, None),
        ];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 6, 10), &Policy::default());

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].source_id, 1);
        assert_eq!(actions[0].urgency, Urgency::Warning);
        assert_eq!(actions[0].days_until, 7);
    }

    #[test]
    fn test_debts_have_no_warning_tier() {
        // 5 days out would be a warning for a bill; debts stay silent
        let debts = vec![make_debt(1, "Visa", dec!(35.00), 15)];

        let actions = rank_urgent_actions(&[], &debts, date(2025, 6, 10), &Policy::default());

        assert!(actions.is_empty());
    }

    #[test]
    fn test_far_out_obligations_produce_no_actions() {
        let bills = vec![make_bill(1, "Rent", dec!(1200.00), 28, None)];
        let debts = vec![make_debt(1, "Car", dec!(250.00), 25)];

        let actions = rank_urgent_actions(&bills, &debts, date(2025, 6, 2), &Policy::default());

        assert!(actions.is_empty());
    }

    #[test]
    fn test_actions_sorted_by_urgency_then_days() {
        let bills = vec![
            make_bill(1, "Internet", dec!(60.00), 16, None), // warning, 6 days
            make_bill(2, "Electric", dec!(90.00), 13, None), // urgent, 3 days
            make_bill(3, "Rent", dec!(1200.00), 10, None),   // today
            make_bill(4, "Water", dec!(40.00), 15, None),    // warning, 5 days
        ];
        let debts = vec![
            make_debt(5, "Visa", dec!(35.00), 12), // urgent, 2 days
        ];

        let actions = rank_urgent_actions(&bills, &debts, date(2025, 6, 10), &Policy::default());

        let order: Vec<i64> = actions.iter().map(|a| a.source_id).collect();
        assert_eq!(order, vec![3, 5, 2, 4, 1]);

        // Sorted ascending by (rank, days_until)
        let keys: Vec<(u8, u32)> = actions
            .iter()
            .map(|a| (a.urgency.rank(), a.days_until))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_must_have_today_sorts_ahead_of_due_in_two_days() {
        let bills = vec![
            make_bill(1, "Electric", dec!(90.00), 12, None), // due in 2
            make_bill(2, "Insurance", dec!(130.00), 25, Some(10)), // must-have today
        ];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 6, 10), &Policy::default());

        assert_eq!(actions[0].source_id, 2);
        assert_eq!(actions[0].urgency, Urgency::Today);
        assert_eq!(actions[1].source_id, 1);
    }

    #[test]
    fn test_february_month_length() {
        // Due on the 1st, seen from Feb 27 of a non-leap year: 28 - 27 + 1 = 2
        let bills = vec![make_bill(1, "Rent", dec!(1200.00), 1, None)];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 2, 27), &Policy::default());

        assert_eq!(actions[0].days_until, 2);
        assert_eq!(actions[0].urgency, Urgency::Urgent);
    }

    #[test]
    fn test_december_wraps_into_january() {
        let bills = vec![make_bill(1, "Rent", dec!(1200.00), 2, None)];

        let actions = rank_urgent_actions(&bills, &[], date(2025, 12, 30), &Policy::default());

        // 31 - 30 + 2 = 3 days out
        assert_eq!(actions[0].days_until, 3);
        assert_eq!(actions[0].urgency, Urgency::Urgent);
    }

    #[tokio::test]
    async fn test_get_urgent_actions_end_to_end() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_bill(&db, "user1", "Rent", dec!(1200.00), 12).await?;
        create_test_debt(&db, "user1", "Visa", dec!(35.00), 10).await?;

        let actions =
            get_urgent_actions(&db, "user1", &Policy::default(), date(2025, 6, 10)).await?;

        assert_eq!(actions.len(), 2);
        // Debt due today outranks the bill due in two days
        assert_eq!(actions[0].kind, ActionKind::Debt);
        assert_eq!(actions[0].urgency, Urgency::Today);
        assert_eq!(actions[1].kind, ActionKind::Bill);

        Ok(())
    }
}
