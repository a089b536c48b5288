//! Category breakdown of a total budget.
//!
//! Each category is rounded half-up on its own. The rounded shares can miss
//! the total by up to one unit per category; that drift is left in place.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::estimator::round_half_up_div;
use super::tables::AllocationWeights;
use super::tier::{Amount, Category};

/// A total split into spend categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub lodging: Amount,
    pub food: Amount,
    pub activities: Amount,
    pub transport: Amount,
    pub incidentals: Amount,
}

impl BudgetBreakdown {
    pub fn get(&self, category: Category) -> Amount {
        match category {
            Category::Lodging => self.lodging,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Incidentals => self.incidentals,
        }
    }

    fn set(&mut self, category: Category, amount: Amount) {
        match category {
            Category::Lodging => self.lodging = amount,
            Category::Food => self.food = amount,
            Category::Transport => self.transport = amount,
            Category::Activities => self.activities = amount,
            Category::Incidentals => self.incidentals = amount,
        }
    }

    pub fn total(&self) -> Amount {
        Category::ALL
            .iter()
            .fold(0, |sum: Amount, c| sum.saturating_add(self.get(*c)))
    }

    /// Rounded sum minus the nominal total.
    pub fn drift_from(&self, total: Amount) -> Amount {
        self.total() - total
    }

    /// Categories in display order, largest share first.
    pub fn entries(&self) -> [(Category, Amount); 5] {
        [
            (Category::Lodging, self.lodging),
            (Category::Food, self.food),
            (Category::Activities, self.activities),
            (Category::Transport, self.transport),
            (Category::Incidentals, self.incidentals),
        ]
    }
}

/// Splits totals using fixed percentage weights.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownAllocator<'a> {
    weights: &'a AllocationWeights,
}

impl<'a> BreakdownAllocator<'a> {
    pub fn new(weights: &'a AllocationWeights) -> Self {
        Self { weights }
    }

    /// Split a possibly fractional total. NaN, infinite and negative totals
    /// allocate nothing.
    pub fn allocate(&self, total: f64) -> BudgetBreakdown {
        if !total.is_finite() || total <= 0.0 {
            trace!(total, "non-positive or non-finite total, empty breakdown");
            return BudgetBreakdown::default();
        }

        let mut breakdown = BudgetBreakdown::default();
        for category in Category::ALL {
            let share = total * f64::from(self.weights.percent(category)) / 100.0;
            // `as` saturates for out-of-range floats.
            breakdown.set(category, (share + 0.5).floor() as Amount);
        }
        breakdown
    }

    /// Split a whole-unit total with exact integer rounding.
    pub fn allocate_amount(&self, total: Amount) -> BudgetBreakdown {
        if total <= 0 {
            return BudgetBreakdown::default();
        }

        let mut breakdown = BudgetBreakdown::default();
        for category in Category::ALL {
            let percent = Amount::from(self.weights.percent(category));
            let share = match total.checked_mul(percent) {
                Some(scaled) => round_half_up_div(scaled, 100),
                None => (total / 100).saturating_mul(percent),
            };
            breakdown.set(category, share);
        }
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocator() -> BreakdownAllocator<'static> {
        static WEIGHTS: AllocationWeights = AllocationWeights {
            lodging: 35,
            food: 25,
            activities: 20,
            transport: 15,
            incidentals: 5,
        };
        BreakdownAllocator::new(&WEIGHTS)
    }

    #[test]
    fn test_even_total_splits_exactly() {
        let breakdown = allocator().allocate(1000.0);
        assert_eq!(breakdown.lodging, 350);
        assert_eq!(breakdown.food, 250);
        assert_eq!(breakdown.activities, 200);
        assert_eq!(breakdown.transport, 150);
        assert_eq!(breakdown.incidentals, 50);
        assert_eq!(breakdown.drift_from(1000), 0);
    }

    #[test]
    fn test_half_up_rounding_drift() {
        // 10 * 0.35 = 3.5 -> 4, 10 * 0.15 = 1.5 -> 2, 10 * 0.05 = 0.5 -> 1
        let breakdown = allocator().allocate(10.0);
        assert_eq!(breakdown.lodging, 4);
        assert_eq!(breakdown.transport, 2);
        assert_eq!(breakdown.incidentals, 1);
        assert_eq!(breakdown.total(), 12);
        assert_eq!(breakdown.drift_from(10), 2);
    }

    #[test]
    fn test_drift_is_bounded() {
        let allocator = allocator();
        for total in 0..=5_000 {
            let from_float = allocator.allocate(total as f64);
            let from_int = allocator.allocate_amount(total);
            assert_eq!(from_float, from_int, "total {total}");
            assert!(from_int.drift_from(total).abs() <= 5, "total {total}");
        }
    }

    #[test]
    fn test_invalid_totals_allocate_nothing() {
        let allocator = allocator();
        assert_eq!(allocator.allocate(f64::NAN), BudgetBreakdown::default());
        assert_eq!(allocator.allocate(f64::INFINITY), BudgetBreakdown::default());
        assert_eq!(allocator.allocate(-250.0), BudgetBreakdown::default());
        assert_eq!(allocator.allocate_amount(-250), BudgetBreakdown::default());
        assert_eq!(allocator.allocate(0.0).total(), 0);
    }

    #[test]
    fn test_fractional_total() {
        let breakdown = allocator().allocate(99.9);
        // 34.965 -> 35, 24.975 -> 25, 19.98 -> 20, 14.985 -> 15, 4.995 -> 5
        assert_eq!(breakdown.total(), 100);
    }

    #[test]
    fn test_entries_order() {
        let categories: Vec<Category> = allocator()
            .allocate(100.0)
            .entries()
            .iter()
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(
            categories,
            vec![
                Category::Lodging,
                Category::Food,
                Category::Activities,
                Category::Transport,
                Category::Incidentals
            ]
        );
    }
}
