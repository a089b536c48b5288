//! Tier total estimation.
//!
//! Totals are `days * headcount * daily tier cost`, computed synchronously
//! from the cost model with no intermediate placeholder figures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{TravelerDescriptor, TripDuration};
use super::tables::CostModel;
use super::tier::{Amount, Tier};

/// Total trip cost for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub economy: Amount,
    pub standard: Amount,
    pub premium: Amount,
}

impl BudgetEstimate {
    pub fn new(economy: Amount, standard: Amount, premium: Amount) -> Self {
        Self {
            economy,
            standard,
            premium,
        }
    }

    pub fn get(&self, tier: Tier) -> Amount {
        match tier {
            Tier::Economy => self.economy,
            Tier::Standard => self.standard,
            Tier::Premium => self.premium,
        }
    }

    /// Whether `economy <= standard <= premium` holds.
    pub fn is_ordered(&self) -> bool {
        self.economy <= self.standard && self.standard <= self.premium
    }

    /// Tiers paired with their totals, cheapest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, Amount)> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// Estimates tier totals from a cost model.
#[derive(Debug, Clone, Copy)]
pub struct BudgetEstimator<'a> {
    cost_model: &'a CostModel,
}

impl<'a> BudgetEstimator<'a> {
    pub fn new(cost_model: &'a CostModel) -> Self {
        Self { cost_model }
    }

    /// Total for a single tier.
    pub fn estimate_tier(&self, tier: Tier, duration: TripDuration, travelers: TravelerDescriptor) -> Amount {
        let person_days = Amount::from(duration.days()).saturating_mul(Amount::from(travelers.headcount()));
        self.cost_model.daily_total(tier).saturating_mul(person_days)
    }

    /// Totals for all three tiers.
    ///
    /// The destination does not change the figures; it is accepted so call
    /// sites read the same as validation and is recorded in the log.
    pub fn estimate(&self, destination: &str, duration: TripDuration, travelers: TravelerDescriptor) -> BudgetEstimate {
        let estimate = BudgetEstimate::new(
            self.estimate_tier(Tier::Economy, duration, travelers),
            self.estimate_tier(Tier::Standard, duration, travelers),
            self.estimate_tier(Tier::Premium, duration, travelers),
        );

        debug!(
            destination,
            days = duration.days(),
            headcount = travelers.headcount(),
            economy = estimate.economy,
            standard = estimate.standard,
            premium = estimate.premium,
            "estimated trip budget"
        );

        estimate
    }
}

/// Average spend per traveler per day, rounded half-up.
pub fn per_person_per_day(amount: Amount, duration: TripDuration, headcount: u32) -> Amount {
    let divisor = Amount::from(duration.days()).saturating_mul(Amount::from(headcount.max(1)));
    round_half_up_div(amount, divisor)
}

/// `round(numerator / denominator)` with halves rounded towards +infinity.
pub(crate) fn round_half_up_div(numerator: Amount, denominator: Amount) -> Amount {
    debug_assert!(denominator > 0);
    let numerator = i128::from(numerator);
    let denominator = i128::from(denominator);
    let rounded = (2 * numerator + denominator).div_euclid(2 * denominator);
    Amount::try_from(rounded).unwrap_or(Amount::MAX)
}
