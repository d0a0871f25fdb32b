//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod bill;
pub mod debt;
pub mod envelope;
pub mod pay_schedule;
pub mod user_settings;

// Re-export specific types to avoid conflicts
pub use account::{
    AccountType, Column as AccountColumn, Entity as Account, Model as AccountModel,
};
pub use bill::{Column as BillColumn, Entity as Bill, Model as BillModel};
pub use debt::{Column as DebtColumn, Entity as Debt, Model as DebtModel};
pub use envelope::{Column as EnvelopeColumn, Entity as Envelope, Model as EnvelopeModel};
pub use pay_schedule::{
    Column as PayScheduleColumn, Entity as PaySchedule, Model as PayScheduleModel, PayFrequency,
};
pub use user_settings::{
    Column as UserSettingsColumn, DebtAttackMode, Entity as UserSettings,
    Model as UserSettingsModel,
};
