//! `SafeSpend` command-line harness.
//!
//! Runs the decision engine against the configured database for one user:
//! with a purchase amount it runs an affordability check, without one it
//! prints the payday funding plan and the urgency-ranked action list.

use chrono::Utc;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use safespend::{
    config,
    core::{affordability, funding, urgency},
    errors::{Error, Result},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenv().ok();
    info!("Attempted to load .env file.");

    let policy = config::policy::load_default_policy()
        .inspect_err(|e| error!("Failed to load policy configuration: {e}"))?;

    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    let mut args = std::env::args().skip(1);
    let user_id = args.next().ok_or_else(|| Error::Validation {
        message: "usage: safespend <user-id> [purchase-amount]".to_string(),
    })?;
    let today = Utc::now().date_naive();

    if let Some(raw_amount) = args.next() {
        let amount: Decimal = raw_amount.parse().map_err(|e| Error::Validation {
            message: format!("'{raw_amount}' is not a valid amount: {e}"),
        })?;

        let result = affordability::check_affordability(&db, &user_id, amount, &policy).await?;
        println!("Safe to spend:   ${:.2}", result.safe_to_spend);
        println!("Purchase:        ${:.2}", result.purchase_amount);
        println!("Remaining after: ${:.2}", result.remaining_after);
        println!("Verdict:         {}", result.status);
        for warning in &result.warnings {
            println!("  ! {warning}");
        }
        println!("{}", result.recommendation);
    } else {
        let plan = funding::get_funding_plan(&db, &user_id, &policy, today).await?;
        println!("Expected income:   ${:.2}", plan.expected_income);
        println!("Bills due:         ${:.2}", plan.bills_total);
        println!("Debt payments:     ${:.2}", plan.debt_payments_total);
        println!("Savings target:    ${:.2}", plan.savings_target);
        println!("Total obligations: ${:.2}", plan.total_obligations);
        println!("Safe to spend:     ${:.2}", plan.safe_to_spend);
        if let Some(payday) = plan.next_payday {
            println!("Next payday:       {payday}");
        }

        let actions = urgency::get_urgent_actions(&db, &user_id, &policy, today).await?;
        if actions.is_empty() {
            println!("Nothing urgent in the next week.");
        } else {
            println!("Action list:");
            for action in &actions {
                println!("  [{:?}] {} - {}", action.urgency, action.title, action.description);
            }
        }
    }

    Ok(())
}
