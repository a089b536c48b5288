//! Trip budget estimation and validation.
//!
//! This module turns trip parameters into consistent money figures used
//! across the planner.
//!
//! # Overview
//!
//! The budget engine consists of:
//! - **ReferenceTables**: cost model, allocation weights and destination minimums
//! - **TravelerDescriptor**: resolves "2 People" / "Family" style text into a headcount
//! - **BudgetEstimator**: economy/standard/premium totals for a trip
//! - **BreakdownAllocator**: splits any total into spend categories
//! - **BudgetValidator**: checks a budget against the destination minimum and
//!   suggests how to close a shortfall
//! - **EstimateResponseParser**: reads tier figures out of assistant replies
//! - **BudgetReport**: all of the above for one trip and budget choice
//!
//! # Example
//!
//! ```
//! use trip_budget::budget::{allocate_breakdown, estimate_budget, validate_budget};
//!
//! let estimate = estimate_budget("Goa", 5, "2 People");
//! assert_eq!(estimate.economy, 850);
//!
//! let breakdown = allocate_breakdown(estimate.standard as f64);
//! assert_eq!(breakdown.lodging, 665);
//!
//! let result = validate_budget("Goa", 5, "2 People", 100);
//! assert!(!result.is_valid);
//! assert_eq!(result.shortfall, 270);
//! ```

mod allocator;
mod engine;
mod estimator;
mod input;
mod parser;
mod report;
mod tables;
mod tier;
mod validator;

pub use allocator::{BreakdownAllocator, BudgetBreakdown};
pub use engine::BudgetEngine;
pub use estimator::{per_person_per_day, BudgetEstimate, BudgetEstimator};
pub use input::{
    resolve_travelers, BudgetAmount, BudgetChoice, TravelerDescriptor, TripDuration,
    TripParameters, CUSTOM_BUDGET_MINIMUM, QUICK_BUDGET_PRESETS,
};
pub use parser::{extract_or_estimate, EstimateResponseParser, ParsedEstimate};
pub use report::{BudgetReport, TierSummary};
pub use tables::{
    AllocationWeights, CategoryCosts, CostModel, DestinationMinimum, DestinationMinimums,
    MinimumMatch, ReferenceTables, TablesError,
};
pub use tier::{Amount, Category, Tier, UnknownTier};
pub use validator::{Adjustment, BudgetValidator, Suggestion, SuggestionKind, ValidationResult};

/// Tier totals using the compiled-in tables.
pub fn estimate_budget(destination: &str, duration_days: i64, travelers: &str) -> BudgetEstimate {
    BudgetEngine::shared().estimator().estimate(
        destination,
        TripDuration::from_days(duration_days),
        TravelerDescriptor::parse(travelers),
    )
}

/// Category split of `total` using the compiled-in weights.
pub fn allocate_breakdown(total: f64) -> BudgetBreakdown {
    BudgetEngine::shared().allocate(total)
}

/// Feasibility check using the compiled-in destination registry.
pub fn validate_budget(
    destination: &str,
    duration_days: i64,
    travelers: &str,
    proposed_budget: Amount,
) -> ValidationResult {
    BudgetEngine::shared().validator().validate(
        destination,
        TripDuration::from_days(duration_days),
        TravelerDescriptor::parse(travelers),
        proposed_budget,
    )
}
