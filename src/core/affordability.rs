//! Affordability evaluator - the "Safe to Spend" purchase check.
//!
//! Given a prospective purchase amount and a financial snapshot, classifies
//! the purchase as affordable, risky, or unaffordable, collects warnings, and
//! derives a recommendation. The evaluation is a pure function of its inputs:
//! the same snapshot and amount always produce the same result, and nothing
//! here moves money. All arithmetic is fixed-point `Decimal`; cent-level
//! comparisons near the low-balance threshold must not drift.

use crate::{
    config::policy::Policy,
    core::snapshot::{FinancialSnapshot, read_snapshot},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

/// Ternary affordability verdict, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AffordabilityStatus {
    /// The purchase is comfortably affordable
    Yes,
    /// Affordable, but something is worth knowing first
    Warning,
    /// The purchase exceeds available spending money
    No,
}

impl std::fmt::Display for AffordabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::Warning => write!(f, "warning"),
            Self::No => write!(f, "no"),
        }
    }
}

/// Full result of an affordability check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffordabilityResult {
    /// Whether the purchase can be made at all (verdict is not "no")
    pub can_buy: bool,
    /// Ternary verdict
    pub status: AffordabilityStatus,
    /// Current spending-account balance - the money that is safe to draw on
    pub safe_to_spend: Decimal,
    /// The amount being evaluated
    pub purchase_amount: Decimal,
    /// Spending balance minus purchase amount (negative when unaffordable)
    pub remaining_after: Decimal,
    /// Everything worth knowing before buying, most severe first
    pub warnings: Vec<String>,
    /// One-line recommendation derived from the verdict
    pub recommendation: String,
    /// Sum of strict envelopes' budgeted amounts
    pub strict_obligations: Decimal,
    /// Total of unpaid bills
    pub upcoming_bills: Decimal,
    /// Sum of all debts' minimum payments
    pub debt_payments: Decimal,
}

/// Evaluates whether a purchase is affordable against a snapshot.
///
/// Rules, in order: the purchase is rejected outright if it exceeds the
/// spending balance; otherwise a low remaining balance (below
/// `policy.low_balance_threshold`, when the user has warnings enabled)
/// downgrades to a warning. Independently, non-strict envelopes the purchase
/// would blow through add a warning, and a purchase large enough to dip into
/// money the underfunded bills account will need adds one more.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a non-positive purchase amount; a
/// surplus must never be computed from invalid input.
pub fn evaluate_affordability(
    snapshot: &FinancialSnapshot,
    purchase_amount: Decimal,
    policy: &Policy,
) -> Result<AffordabilityResult> {
    if purchase_amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount {
            amount: purchase_amount,
        });
    }

    let spending_balance = snapshot.spending_balance();
    let remaining_after = spending_balance - purchase_amount;

    let mut status = AffordabilityStatus::Yes;
    let mut warnings: Vec<String> = Vec::new();

    if purchase_amount > spending_balance {
        status = AffordabilityStatus::No;
        warnings.push(format!(
            "This purchase exceeds your available spending balance of ${spending_balance:.2}."
        ));
    } else if remaining_after < policy.low_balance_threshold
        && snapshot.settings.safe_to_spend_warning
    {
        status = AffordabilityStatus::Warning;
        warnings.push(format!(
            "Only ${remaining_after:.2} would be left in spending after this purchase."
        ));
    }

    // Non-strict envelopes the purchase would exceed the remaining room of
    let affected_envelopes: Vec<&str> = snapshot
        .envelopes
        .iter()
        .filter(|e| {
            !e.is_strict
                && e.current_balance > Decimal::ZERO
                && e.current_balance < purchase_amount
        })
        .map(|e| e.name.as_str())
        .collect();

    if !affected_envelopes.is_empty() && status != AffordabilityStatus::No {
        status = AffordabilityStatus::Warning;
        warnings.push(format!(
            "This purchase is more than what's left in: {}.",
            affected_envelopes.join(", ")
        ));
    }

    // The bills account may be needed: it is short for upcoming bills and the
    // purchase is large relative to spending money. The boolean combination
    // is intentionally literal; it only ever downgrades a clean "yes".
    let upcoming_bills = snapshot.unpaid_bills_total();
    if snapshot.bills_balance() < upcoming_bills
        && purchase_amount > remaining_after
        && purchase_amount > spending_balance * dec!(0.5)
        && status == AffordabilityStatus::Yes
    {
        status = AffordabilityStatus::Warning;
        warnings.push(
            "Your bills account is short for upcoming bills; this purchase may eat into money \
             needed for them."
                .to_string(),
        );
    }

    let can_buy = status != AffordabilityStatus::No;
    let recommendation = match status {
        AffordabilityStatus::Yes => format!(
            "Go ahead - you'd still have ${remaining_after:.2} available after this purchase."
        ),
        AffordabilityStatus::Warning => warnings.first().map_or_else(
            || "Affordable, but proceed with caution.".to_string(),
            |w| format!("Proceed with caution: {w}"),
        ),
        AffordabilityStatus::No => warnings.first().map_or_else(
            || "This purchase doesn't fit your budget right now.".to_string(),
            |w| format!("Hold off: {w}"),
        ),
    };

    Ok(AffordabilityResult {
        can_buy,
        status,
        safe_to_spend: spending_balance,
        purchase_amount,
        remaining_after,
        warnings,
        recommendation,
        strict_obligations: snapshot.strict_obligations(),
        upcoming_bills,
        debt_payments: snapshot.debt_payments_total(),
    })
}

/// Boundary entry point: reads the user's snapshot and evaluates a purchase.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a non-positive amount (rejected before
/// any read) or `Error::DataUnavailable` if the snapshot cannot be read.
pub async fn check_affordability(
    db: &DatabaseConnection,
    user_id: &str,
    purchase_amount: Decimal,
    policy: &Policy,
) -> Result<AffordabilityResult> {
    if purchase_amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount {
            amount: purchase_amount,
        });
    }

    let snapshot = read_snapshot(db, user_id).await?;
    let result = evaluate_affordability(&snapshot, purchase_amount, policy)?;
    info!(
        user_id,
        %purchase_amount,
        status = %result.status,
        "affordability check"
    );
    Ok(result)
}
