//! Behaviour of the public library API across many inputs.

use trip_budget::budget::{
    allocate_breakdown, estimate_budget, resolve_travelers, validate_budget, Amount, BudgetEngine,
    SuggestionKind, Tier, TripParameters,
};

const DESTINATIONS: [&str; 5] = ["Goa, India", "Mumbai", "Reykjavik", "", "Kerala backwaters"];
const TRAVELERS: [&str; 6] = ["Solo Traveler", "Couple", "Family", "Friends Group", "3 People", "crowd"];

#[test]
fn test_tiers_are_ordered_for_every_trip() {
    for destination in DESTINATIONS {
        for days in [-3, 0, 1, 5, 30] {
            for travelers in TRAVELERS {
                let estimate = estimate_budget(destination, days, travelers);
                assert!(estimate.economy > 0, "{destination} {days} {travelers}");
                assert!(estimate.economy < estimate.standard);
                assert!(estimate.standard < estimate.premium);
            }
        }
    }
}

#[test]
fn test_economy_is_85_per_person_per_day() {
    for days in 1..=10 {
        for travelers in TRAVELERS {
            let headcount = Amount::from(resolve_travelers(travelers));
            let estimate = estimate_budget("anywhere", days, travelers);
            assert_eq!(estimate.economy, 85 * days * headcount);
            assert_eq!(estimate.standard, 190 * days * headcount);
            assert_eq!(estimate.premium, 450 * days * headcount);
        }
    }
}

#[test]
fn test_goa_couple_for_five_days() {
    let estimate = estimate_budget("Goa, India", 5, "2 People");
    assert_eq!(
        (estimate.economy, estimate.standard, estimate.premium),
        (850, 1900, 4500)
    );
}

#[test]
fn test_traveler_resolution() {
    assert_eq!(resolve_travelers("Solo Traveler"), 1);
    assert_eq!(resolve_travelers("Couple"), 2);
    assert_eq!(resolve_travelers("Family (3-5 people)"), 3);
    assert_eq!(resolve_travelers("family"), 4);
    assert_eq!(resolve_travelers("Friends Group"), 6);
    assert_eq!(resolve_travelers("0 People"), 1);
    assert_eq!(resolve_travelers(""), 1);
}

#[test]
fn test_breakdown_drift_is_bounded() {
    for total in (0..20_000).step_by(7) {
        let breakdown = allocate_breakdown(total as f64);
        let total = total as Amount;
        assert!(breakdown.drift_from(total).abs() <= 5, "total {total}");
        assert!(breakdown.lodging >= breakdown.food);
        assert!(breakdown.food >= breakdown.activities);
        assert!(breakdown.activities >= breakdown.transport);
        assert!(breakdown.transport >= breakdown.incidentals);
    }
}

#[test]
fn test_breakdown_of_round_total_is_exact() {
    let breakdown = allocate_breakdown(1000.0);
    assert_eq!(breakdown.lodging, 350);
    assert_eq!(breakdown.food, 250);
    assert_eq!(breakdown.activities, 200);
    assert_eq!(breakdown.transport, 150);
    assert_eq!(breakdown.incidentals, 50);
    assert_eq!(breakdown.total(), 1000);
}

#[test]
fn test_breakdown_of_nonsense_total_is_empty() {
    for total in [f64::NAN, f64::INFINITY, -250.0, 0.0] {
        assert_eq!(allocate_breakdown(total).total(), 0);
    }
}

#[test]
fn test_validation_examples() {
    let result = validate_budget("Goa, India", 5, "2 People", 100);
    assert!(!result.is_valid);
    assert_eq!(result.minimum_required, 370);
    assert_eq!(result.shortfall, 270);
    assert_eq!(result.suggestions.len(), 3);

    let kinds: Vec<SuggestionKind> = result.suggestions.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SuggestionKind::ShortenTrip,
            SuggestionKind::CheaperDestination,
            SuggestionKind::IncreaseBudget
        ]
    );

    let ok = validate_budget("Goa, India", 5, "2 People", 400);
    assert!(ok.is_valid);
    assert_eq!(ok.shortfall, 0);
    assert!(ok.suggestions.is_empty());
}

#[test]
fn test_validation_is_consistent_and_idempotent() {
    for destination in DESTINATIONS {
        for budget in [-100, 0, 50, 370, 5_000] {
            let first = validate_budget(destination, 4, "Couple", budget);
            let second = validate_budget(destination, 4, "Couple", budget);
            assert_eq!(first, second);
            assert_eq!(first.is_valid, budget >= first.minimum_required);
            assert_eq!(first.is_valid, first.suggestions.is_empty());
            assert_eq!(first.shortfall, (first.minimum_required - budget).max(0));
        }
    }
}

#[test]
fn test_unknown_destination_uses_default_minimum() {
    let result = validate_budget("Reykjavik", 2, "Solo", 0);
    assert_eq!(result.matched_destination, None);
    assert_eq!(result.min_per_day, 37);
    assert_eq!(result.minimum_required, 74);
}

#[test]
fn test_report_uses_recommended_tier_by_default() {
    let trip = TripParameters::from_raw("Goa", "5", "2 People");
    let report = BudgetEngine::shared().report(&trip);
    assert_eq!(report.selected_amount, report.estimate.get(Tier::RECOMMENDED));
    assert!(report.validation.is_valid);
    assert_eq!(report.tiers.len(), 3);
    assert_eq!(report.tiers.iter().filter(|t| t.recommended).count(), 1);
}
