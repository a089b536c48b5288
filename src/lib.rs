//! Budget estimation and validation for trip planning.
//!
//! - [`budget`]: tier estimates, category breakdowns, feasibility checks
//! - [`offers`]: seeded sample hotel, flight and transport offers
//! - [`settings`]: layered configuration for the reference tables
//! - [`logging`]: subscriber setup for the command-line front end

pub mod budget;
pub mod logging;
pub mod offers;
pub mod settings;

pub use budget::{
    allocate_breakdown, estimate_budget, resolve_travelers, validate_budget, BudgetBreakdown,
    BudgetEngine, BudgetEstimate, ValidationResult,
};
pub use settings::{Settings, SettingsError};
