//! One-call budget summary for a trip.
//!
//! Combines the tier estimate with the traveler's budget choice: the chosen
//! amount is split into categories and checked against the destination
//! minimum. Without a choice the recommended tier is used.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::allocator::BudgetBreakdown;
use super::engine::BudgetEngine;
use super::estimator::{per_person_per_day, BudgetEstimate};
use super::input::{BudgetChoice, TripParameters};
use super::tier::{Amount, Tier};
use super::validator::ValidationResult;

/// Display data for one tier card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSummary {
    pub tier: Tier,
    pub title: String,
    pub description: String,
    pub total: Amount,
    pub per_person_per_day: Amount,
    pub recommended: bool,
    pub breakdown: BudgetBreakdown,
}

/// Budget summary for a trip and its budget choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub destination: String,
    pub days: u32,
    pub headcount: u32,
    pub estimate: BudgetEstimate,
    pub tiers: Vec<TierSummary>,
    /// Choice the report was built for
    pub choice: BudgetChoice,
    pub selected_amount: Amount,
    pub breakdown: BudgetBreakdown,
    pub per_person_per_day: Amount,
    pub validation: ValidationResult,
}

impl BudgetReport {
    pub fn build(engine: &BudgetEngine, trip: &TripParameters) -> Self {
        let estimate = engine
            .estimator()
            .estimate(&trip.destination, trip.duration, trip.travelers);
        let headcount = trip.headcount();
        let allocator = engine.allocator();

        let tiers = estimate
            .iter()
            .map(|(tier, total)| TierSummary {
                tier,
                title: tier.title().to_string(),
                description: tier.description().to_string(),
                total,
                per_person_per_day: per_person_per_day(total, trip.duration, headcount),
                recommended: tier.is_recommended(),
                breakdown: allocator.allocate_amount(total),
            })
            .collect();

        let choice = trip.budget.unwrap_or(BudgetChoice::Tier(Tier::RECOMMENDED));
        let selected_amount = match choice {
            BudgetChoice::Tier(tier) => estimate.get(tier),
            BudgetChoice::Custom(amount) => amount,
        };

        let validation = engine.validator().validate(
            &trip.destination,
            trip.duration,
            trip.travelers,
            selected_amount,
        );

        debug!(
            destination = %trip.destination,
            ?choice,
            selected_amount,
            is_valid = validation.is_valid,
            "built budget report"
        );

        Self {
            destination: trip.destination.clone(),
            days: trip.duration.days(),
            headcount,
            estimate,
            tiers,
            choice,
            selected_amount,
            breakdown: allocator.allocate_amount(selected_amount),
            per_person_per_day: per_person_per_day(selected_amount, trip.duration, headcount),
            validation,
        }
    }
}
