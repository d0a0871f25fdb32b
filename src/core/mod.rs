//! Core business logic - framework-agnostic budgeting and decision operations.
//!
//! The decision engine lives in [`snapshot`], [`affordability`], [`funding`],
//! and [`urgency`]; the remaining modules are the per-entity record
//! operations that feed it. Nothing in here knows about the surface layer:
//! every function takes a database connection (and, for date-sensitive
//! decisions, an explicit `today`) and returns structured data.

/// Virtual account operations (list, upsert - accounts are never deleted)
pub mod account;
/// Affordability evaluator - the "Safe to Spend" purchase check
pub mod affordability;
/// Bill operations (list, create, update, mark paid, delete)
pub mod bill;
/// Debt operations (list, create, update, delete)
pub mod debt;
/// Envelope operations (list, create, update, delete)
pub mod envelope;
/// Payday funding planner
pub mod funding;
/// Pay schedule operations (list, create, update, delete)
pub mod pay_schedule;
/// User settings operations (get-or-create with defaults, upsert)
pub mod settings;
/// Financial snapshot reader - concurrent point-in-time view of a user's finances
pub mod snapshot;
/// Urgency ranker - due-date-driven action list
pub mod urgency;
