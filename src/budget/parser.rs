//! Budget figures from free-form assistant replies.
//!
//! A planning assistant may answer a budget question with prose such as
//! "Budget: $850, Moderate: $1,900, Luxury: $4,500". The parser pulls the
//! first three figures out of such text. Anything it cannot trust falls back
//! to the computed estimate:
//!
//! - no budget-related wording at all
//! - fewer than three figures
//! - figures that are not ordered cheapest to most expensive

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::estimator::{BudgetEstimate, BudgetEstimator};
use super::input::TripParameters;
use super::tier::Amount;

fn keyword_regex() -> &'static Regex {
    static KEYWORDS: OnceLock<Regex> = OnceLock::new();
    KEYWORDS.get_or_init(|| Regex::new(r"(?i)budget|cost|price|\$|usd").expect("valid keyword regex"))
}

fn figure_regex() -> &'static Regex {
    static FIGURES: OnceLock<Regex> = OnceLock::new();
    FIGURES.get_or_init(|| Regex::new(r"\$?[0-9][0-9,]*").expect("valid figure regex"))
}

/// Tier figures together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEstimate {
    pub estimate: BudgetEstimate,
    /// Whether the figures were read from the reply (vs computed)
    pub is_parsed: bool,
    /// "response" or "computed"
    pub source: String,
}

impl ParsedEstimate {
    /// Figures read from a reply.
    pub fn parsed(estimate: BudgetEstimate) -> Self {
        Self {
            estimate,
            is_parsed: true,
            source: "response".to_string(),
        }
    }

    /// Figures computed from the cost model.
    pub fn computed(estimate: BudgetEstimate) -> Self {
        Self {
            estimate,
            is_parsed: false,
            source: "computed".to_string(),
        }
    }
}

/// Reads economy/standard/premium figures out of reply text.
#[derive(Debug, Clone, Default)]
pub struct EstimateResponseParser;

impl EstimateResponseParser {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when the reply has no budget wording or fewer than
    /// three figures. Ordering is not checked here.
    pub fn parse(&self, response: &str) -> Option<ParsedEstimate> {
        if !keyword_regex().is_match(response) {
            return None;
        }

        let figures: Vec<Amount> = figure_regex()
            .find_iter(response)
            .filter_map(|m| Self::parse_figure(m.as_str()))
            .take(3)
            .collect();

        match figures[..] {
            [economy, standard, premium] => Some(ParsedEstimate::parsed(BudgetEstimate::new(
                economy, standard, premium,
            ))),
            _ => None,
        }
    }

    fn parse_figure(raw: &str) -> Option<Amount> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse::<Amount>().ok()
    }
}

/// Figures from `response` if usable, otherwise the computed estimate for `trip`.
pub fn extract_or_estimate(
    response: &str,
    estimator: &BudgetEstimator<'_>,
    trip: &TripParameters,
) -> ParsedEstimate {
    if let Some(parsed) = EstimateResponseParser::new().parse(response) {
        if parsed.estimate.is_ordered() {
            return parsed;
        }
        debug!(
            economy = parsed.estimate.economy,
            standard = parsed.estimate.standard,
            premium = parsed.estimate.premium,
            "discarding out-of-order figures from response"
        );
    }

    ParsedEstimate::computed(estimator.estimate(&trip.destination, trip.duration, trip.travelers))
}
