//! Budget feasibility checks against destination minimums.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::estimator::round_half_up_div;
use super::input::{TravelerDescriptor, TripDuration};
use super::tables::DestinationMinimums;
use super::tier::Amount;

/// Kind of remediation offered for an insufficient budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    ShortenTrip,
    CheaperDestination,
    IncreaseBudget,
}

/// Change a caller can apply to the trip to act on a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Adjustment {
    /// Cut the trip to this many days
    Days { days: i64 },
    /// Pick one of these destinations instead
    Destination { alternatives: Vec<String> },
    /// Raise the budget to `target`, which is `delta` above the current one
    Budget { target: Amount, delta: Amount },
}

/// One remediation option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Amount the suggestion saves; zero when it costs more instead
    pub estimated_savings: Amount,
    pub adjustment: Adjustment,
}

/// Outcome of a feasibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub minimum_required: Amount,
    pub current_budget: Amount,
    pub shortfall: Amount,
    /// Matched registry key, `None` when the default minimum applied
    pub matched_destination: Option<String>,
    pub min_per_day: Amount,
    /// Empty when the budget is valid; otherwise shorten, cheaper, increase
    pub suggestions: Vec<Suggestion>,
}

/// Checks proposed budgets against a destination registry.
#[derive(Debug, Clone, Copy)]
pub struct BudgetValidator<'a> {
    registry: &'a DestinationMinimums,
}

impl<'a> BudgetValidator<'a> {
    pub fn new(registry: &'a DestinationMinimums) -> Self {
        Self { registry }
    }

    pub fn validate(
        &self,
        destination: &str,
        duration: TripDuration,
        travelers: TravelerDescriptor,
        proposed: Amount,
    ) -> ValidationResult {
        let found = self.registry.lookup(destination);
        let headcount = Amount::from(travelers.headcount());
        let daily_group_minimum = found.min_per_day.saturating_mul(headcount);
        let minimum_required = daily_group_minimum.saturating_mul(Amount::from(duration.days()));
        let is_valid = proposed >= minimum_required;
        let shortfall = minimum_required.saturating_sub(proposed).max(0);

        let suggestions = if is_valid {
            Vec::new()
        } else {
            self.suggestions(proposed, daily_group_minimum, minimum_required, shortfall)
        };

        debug!(
            destination,
            matched = found.key.unwrap_or("default"),
            min_per_day = found.min_per_day,
            minimum_required,
            proposed,
            is_valid,
            "validated trip budget"
        );

        ValidationResult {
            is_valid,
            minimum_required,
            current_budget: proposed,
            shortfall,
            matched_destination: found.key.map(str::to_string),
            min_per_day: found.min_per_day,
            suggestions,
        }
    }

    fn suggestions(
        &self,
        proposed: Amount,
        daily_group_minimum: Amount,
        minimum_required: Amount,
        shortfall: Amount,
    ) -> Vec<Suggestion> {
        // Negative budgets would floor to negative days.
        let affordable_days = proposed
            .checked_div_euclid(daily_group_minimum)
            .unwrap_or(0)
            .max(0);
        let alternatives = self.registry.alternatives.clone();

        vec![
            Suggestion {
                kind: SuggestionKind::ShortenTrip,
                title: "Shorter Trip".to_string(),
                description: format!("Try {} days instead", affordable_days),
                estimated_savings: shortfall,
                adjustment: Adjustment::Days {
                    days: affordable_days,
                },
            },
            Suggestion {
                kind: SuggestionKind::CheaperDestination,
                title: "Budget-Friendly Destination".to_string(),
                description: format!("Consider {}", join_alternatives(&alternatives)),
                estimated_savings: round_half_up_div(shortfall.saturating_mul(6), 10),
                adjustment: Adjustment::Destination { alternatives },
            },
            Suggestion {
                kind: SuggestionKind::IncreaseBudget,
                title: "Increase Budget".to_string(),
                description: format!("Add ${} for comfortable trip", shortfall),
                estimated_savings: 0,
                adjustment: Adjustment::Budget {
                    target: minimum_required,
                    delta: shortfall,
                },
            },
        ]
    }
}

/// "A", "A or B", "A, B, or C".
fn join_alternatives(names: &[String]) -> String {
    match names {
        [] => "another destination".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(destination: &str, days: i64, travelers: &str, proposed: Amount) -> ValidationResult {
        let registry = DestinationMinimums::default();
        BudgetValidator::new(&registry).validate(
            destination,
            TripDuration::from_days(days),
            TravelerDescriptor::parse(travelers),
            proposed,
        )
    }

    #[test]
    fn test_goa_insufficient_budget() {
        let result = validate("Goa", 5, "2 People", 100);
        assert!(!result.is_valid);
        assert_eq!(result.minimum_required, 370);
        assert_eq!(result.current_budget, 100);
        assert_eq!(result.shortfall, 270);
        assert_eq!(result.matched_destination.as_deref(), Some("goa"));

        let kinds: Vec<SuggestionKind> = result.suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::ShortenTrip,
                SuggestionKind::CheaperDestination,
                SuggestionKind::IncreaseBudget
            ]
        );

        let shorten = &result.suggestions[0];
        assert_eq!(shorten.adjustment, Adjustment::Days { days: 1 });
        assert_eq!(shorten.description, "Try 1 days instead");
        assert_eq!(shorten.estimated_savings, 270);

        let cheaper = &result.suggestions[1];
        assert_eq!(cheaper.estimated_savings, 162);
        assert_eq!(cheaper.description, "Consider Pondicherry, Rishikesh, or Hampi");

        let increase = &result.suggestions[2];
        assert_eq!(increase.estimated_savings, 0);
        assert_eq!(
            increase.adjustment,
            Adjustment::Budget {
                target: 370,
                delta: 270
            }
        );
    }

    #[test]
    fn test_goa_sufficient_budget() {
        let result = validate("Goa", 5, "2 People", 400);
        assert!(result.is_valid);
        assert_eq!(result.shortfall, 0);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_exact_minimum_is_valid() {
        let result = validate("Goa", 5, "2 People", 370);
        assert!(result.is_valid);
        assert_eq!(result.shortfall, 0);
    }

    #[test]
    fn test_unknown_destination_uses_default() {
        let result = validate("Tromsø", 2, "Solo", 10);
        assert_eq!(result.matched_destination, None);
        assert_eq!(result.min_per_day, 37);
        assert_eq!(result.minimum_required, 74);
    }

    #[test]
    fn test_keyword_travelers_resolve_headcount() {
        let result = validate("Mumbai", 3, "Family", 0);
        assert_eq!(result.minimum_required, 43 * 4 * 3);
    }

    #[test]
    fn test_zero_and_negative_budgets_fail_normally() {
        let zero = validate("Agra", 2, "1", 0);
        assert!(!zero.is_valid);
        assert_eq!(zero.shortfall, 62);
        assert_eq!(zero.suggestions[0].adjustment, Adjustment::Days { days: 0 });

        let negative = validate("Agra", 2, "1", -50);
        assert!(!negative.is_valid);
        assert_eq!(negative.current_budget, -50);
        assert_eq!(negative.shortfall, 112);
        assert_eq!(negative.suggestions[0].adjustment, Adjustment::Days { days: 0 });
        assert_eq!(negative.suggestions[1].estimated_savings, 67);
    }

    #[test]
    fn test_validation_is_idempotent() {
        assert_eq!(
            validate("Jaipur", 4, "Couple", 120),
            validate("Jaipur", 4, "Couple", 120)
        );
    }

    #[test]
    fn test_join_alternatives() {
        assert_eq!(join_alternatives(&[]), "another destination");
        assert_eq!(join_alternatives(&["Hampi".to_string()]), "Hampi");
        assert_eq!(
            join_alternatives(&["Hampi".to_string(), "Gokarna".to_string()]),
            "Hampi or Gokarna"
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(validate("Goa", 5, "2 People", 100)).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["minimumRequired"], 370);
        assert_eq!(json["suggestions"][0]["kind"], "shortenTrip");
        assert_eq!(json["suggestions"][0]["adjustment"]["type"], "days");
        assert_eq!(json["suggestions"][2]["adjustment"]["delta"], 270);
    }
}
