//! Engine facade over a set of reference tables.

use std::sync::OnceLock;

use super::allocator::{BreakdownAllocator, BudgetBreakdown};
use super::estimator::{BudgetEstimate, BudgetEstimator};
use super::input::{TravelerDescriptor, TripDuration, TripParameters};
use super::parser::{extract_or_estimate, ParsedEstimate};
use super::report::BudgetReport;
use super::tables::{ReferenceTables, TablesError};
use super::tier::{Amount, Tier};
use super::validator::{BudgetValidator, ValidationResult};

/// Immutable budget engine. Every operation is a pure function of the tables
/// and its arguments, so one engine can serve any number of callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetEngine {
    tables: ReferenceTables,
}

impl BudgetEngine {
    /// Engine over validated tables.
    pub fn new(tables: ReferenceTables) -> Result<Self, TablesError> {
        Ok(Self {
            tables: tables.validated()?,
        })
    }

    /// Shared engine over the compiled-in tables.
    pub fn shared() -> &'static BudgetEngine {
        static DEFAULT: OnceLock<BudgetEngine> = OnceLock::new();
        DEFAULT.get_or_init(BudgetEngine::default)
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn estimator(&self) -> BudgetEstimator<'_> {
        BudgetEstimator::new(&self.tables.cost_model)
    }

    pub fn allocator(&self) -> BreakdownAllocator<'_> {
        BreakdownAllocator::new(&self.tables.allocation)
    }

    pub fn validator(&self) -> BudgetValidator<'_> {
        BudgetValidator::new(&self.tables.destinations)
    }

    /// Tier totals from raw form fields.
    pub fn estimate(&self, destination: &str, days: &str, travelers: &str) -> BudgetEstimate {
        self.estimator().estimate(
            destination,
            TripDuration::parse(days),
            TravelerDescriptor::parse(travelers),
        )
    }

    pub fn estimate_tier(&self, tier: Tier, trip: &TripParameters) -> Amount {
        self.estimator().estimate_tier(tier, trip.duration, trip.travelers)
    }

    /// Category split of `total`.
    pub fn allocate(&self, total: f64) -> BudgetBreakdown {
        self.allocator().allocate(total)
    }

    /// Feasibility of `proposed` from raw form fields.
    pub fn validate(&self, destination: &str, days: &str, travelers: &str, proposed: Amount) -> ValidationResult {
        self.validator().validate(
            destination,
            TripDuration::parse(days),
            TravelerDescriptor::parse(travelers),
            proposed,
        )
    }

    /// Figures from an assistant reply, or the computed estimate.
    pub fn parse_estimate(&self, response: &str, trip: &TripParameters) -> ParsedEstimate {
        extract_or_estimate(response, &self.estimator(), trip)
    }

    /// Everything the planner shows for one trip.
    pub fn report(&self, trip: &TripParameters) -> BudgetReport {
        BudgetReport::build(self, trip)
    }
}
