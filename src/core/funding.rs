//! Payday funding planner - how much is safe to spend after obligations.
//!
//! Given expected income and outstanding obligations (unpaid bills, minimum
//! debt payments, a savings set-aside), computes the discretionary remainder
//! for the pay period and annotates each bill/debt with whether it needs
//! funds in the next few days. Like the affordability evaluator, this is a
//! pure function of the snapshot, the policy, and an explicit `today`.
//!
//! The per-item urgency annotations here deliberately compare raw days of
//! month without month-boundary wraparound; the urgency ranker owns the
//! wraparound-aware math.

use crate::{
    config::policy::Policy,
    core::snapshot::{FinancialSnapshot, read_snapshot},
    errors::Result,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

/// An unpaid bill annotated for the funding plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedBill {
    /// Source bill id
    pub id: i64,
    /// Bill name
    pub name: String,
    /// Amount due in dollars
    pub amount: Decimal,
    /// Day of month the bill is due
    pub due_day: i32,
    /// Day funds must already be available, if earlier than the due day
    pub must_have_by_day: Option<i32>,
    /// Whether the bill pays itself automatically
    pub is_auto_pay: bool,
    /// Whether the bill needs funds within the urgent window
    pub is_urgent: bool,
}

/// A debt annotated for the funding plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDebt {
    /// Source debt id
    pub id: i64,
    /// Debt name
    pub name: String,
    /// Minimum payment due in dollars
    pub minimum_payment: Decimal,
    /// Day of month the payment is due
    pub due_day: i32,
    /// Whether the payment is due within the urgent window
    pub is_urgent: bool,
}

/// A payday-time allocation of expected income across bills, debts, savings,
/// and discretionary spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundingPlan {
    /// Total of unpaid bill amounts
    pub bills_total: Decimal,
    /// Sum of all debts' minimum payments
    pub debt_payments_total: Decimal,
    /// Amount reserved for savings this pay period (policy)
    pub savings_target: Decimal,
    /// Amount reserved for taxes (policy; currently zero)
    pub tax_reserve: Decimal,
    /// Bills + debt payments + savings + tax reserve
    pub total_obligations: Decimal,
    /// Sum of all pay schedules' amounts
    pub expected_income: Decimal,
    /// Earliest upcoming payday across all schedules, if any exist
    pub next_payday: Option<NaiveDate>,
    /// max(0, expected income - total obligations)
    pub safe_to_spend: Decimal,
    /// Unpaid bills with urgency annotations
    pub bills: Vec<PlannedBill>,
    /// Debts with urgency annotations
    pub debts: Vec<PlannedDebt>,
}

/// Computes the funding plan for a snapshot, relative to `today`.
///
/// `safe_to_spend` never goes negative: when obligations exceed expected
/// income the discretionary remainder is zero, and the shortfall shows in
/// the totals.
#[must_use]
pub fn plan_funding(
    snapshot: &FinancialSnapshot,
    policy: &Policy,
    today: NaiveDate,
) -> FundingPlan {
    let bills_total = snapshot.unpaid_bills_total();
    let debt_payments_total = snapshot.debt_payments_total();
    let total_obligations =
        bills_total + debt_payments_total + policy.savings_target + policy.tax_reserve;
    let expected_income = snapshot.expected_income();
    let safe_to_spend = (expected_income - total_obligations).max(Decimal::ZERO);

    // Earliest payday across schedules, not first-in-storage-order
    let next_payday = snapshot.pay_schedules.iter().map(|p| p.next_payday).min();

    let current_day = i32::try_from(today.day()).unwrap_or(31);
    let urgent_cutoff = current_day + i32::try_from(policy.urgent_window_days).unwrap_or(3);

    let bills = snapshot
        .unpaid_bills
        .iter()
        .map(|b| PlannedBill {
            id: b.id,
            name: b.name.clone(),
            amount: b.amount,
            due_day: b.due_day,
            must_have_by_day: b.must_have_by_day,
            is_auto_pay: b.is_auto_pay,
            is_urgent: b.due_day <= urgent_cutoff
                || b.must_have_by_day.is_some_and(|d| d <= current_day),
        })
        .collect();

    let debts = snapshot
        .debts
        .iter()
        .map(|d| PlannedDebt {
            id: d.id,
            name: d.name.clone(),
            minimum_payment: d.minimum_payment,
            due_day: d.due_day,
            is_urgent: d.due_day <= urgent_cutoff,
        })
        .collect();

    FundingPlan {
        bills_total,
        debt_payments_total,
        savings_target: policy.savings_target,
        tax_reserve: policy.tax_reserve,
        total_obligations,
        expected_income,
        next_payday,
        safe_to_spend,
        bills,
        debts,
    }
}

/// Boundary entry point: reads the user's snapshot and computes the plan.
///
/// # Errors
/// Returns `Error::DataUnavailable` if the snapshot cannot be read.
pub async fn get_funding_plan(
    db: &DatabaseConnection,
    user_id: &str,
    policy: &Policy,
    today: NaiveDate,
) -> Result<FundingPlan> {
    let snapshot = read_snapshot(db, user_id).await?;
    let plan = plan_funding(&snapshot, policy, today);
    info!(
        user_id,
        safe_to_spend = %plan.safe_to_spend,
        next_payday = ?plan.next_payday,
        "computed funding plan"
    );
    Ok(plan)
}
