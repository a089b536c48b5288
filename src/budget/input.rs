//! Typed trip inputs.
//!
//! Trip forms hand over loosely-typed text ("5", "2 People", "$1,500"). Each
//! field gets a small type with its own parse function that defaults instead
//! of failing, so every input yields a well-defined value.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::tier::{Amount, Tier};

/// Smallest explicit amount accepted as a custom budget selection.
pub const CUSTOM_BUDGET_MINIMUM: Amount = 50;

/// One-click budget amounts offered next to the tier cards.
pub const QUICK_BUDGET_PRESETS: [Amount; 8] = [200, 300, 500, 750, 1000, 1500, 2000, 3000];

fn first_integer(text: &str) -> Option<u64> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("valid digits regex"));
    re.find(text)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
}

/// Optional sign followed by plain ASCII digits at the start of `text`.
fn leading_integer(text: &str) -> Option<i64> {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let re = LEADING.get_or_init(|| {
        Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid leading integer regex")
    });
    let caps = re.captures(text)?;
    Some(signed(&caps[1], &caps[2]))
}

/// Like [`leading_integer`], but allows a `$` and thousands separators.
fn leading_amount(text: &str) -> Option<i64> {
    static AMOUNT: OnceLock<Regex> = OnceLock::new();
    let re = AMOUNT.get_or_init(|| {
        Regex::new(r"^\s*\$?\s*([+-]?)\s*\$?([0-9][0-9,]*)").expect("valid amount regex")
    });
    let caps = re.captures(text)?;
    let digits: String = caps[2].chars().filter(|c| *c != ',').collect();
    Some(signed(&caps[1], &digits))
}

/// `digits` is non-empty ASCII, so a failed parse can only mean overflow.
fn signed(sign: &str, digits: &str) -> i64 {
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if sign == "-" {
        -magnitude
    } else {
        magnitude
    }
}

/// Trip length in days, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripDuration(u32);

impl Default for TripDuration {
    fn default() -> Self {
        Self(1)
    }
}

impl TripDuration {
    /// Coerce a day count; anything below one becomes one.
    pub fn from_days(days: i64) -> Self {
        if days < 1 {
            Self::default()
        } else {
            Self(u32::try_from(days).unwrap_or(u32::MAX))
        }
    }

    /// Parse the leading integer of `text`, defaulting to one day.
    pub fn parse(text: &str) -> Self {
        leading_integer(text)
            .map(Self::from_days)
            .unwrap_or_default()
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form traveler descriptor resolved into a headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "count")]
pub enum TravelerDescriptor {
    /// An explicit number appeared in the descriptor ("2 People")
    Count(u32),
    Solo,
    Couple,
    Family,
    Friends,
    Unrecognized,
}

impl Default for TravelerDescriptor {
    fn default() -> Self {
        Self::Unrecognized
    }
}

impl TravelerDescriptor {
    /// The first integer wins ("5 to 10 People" is 5); otherwise keywords
    /// are matched case-insensitively.
    pub fn parse(text: &str) -> Self {
        if let Some(n) = first_integer(text) {
            return Self::Count(u32::try_from(n).unwrap_or(u32::MAX));
        }

        let lower = text.to_lowercase();
        if lower.contains("solo") {
            Self::Solo
        } else if lower.contains("couple") {
            Self::Couple
        } else if lower.contains("family") {
            Self::Family
        } else if lower.contains("friends") {
            Self::Friends
        } else {
            Self::Unrecognized
        }
    }

    /// Resolved headcount, never below one.
    pub fn headcount(&self) -> u32 {
        match self {
            Self::Count(n) => (*n).max(1),
            Self::Solo => 1,
            Self::Couple => 2,
            Self::Family => 4,
            Self::Friends => 6,
            Self::Unrecognized => 1,
        }
    }
}

/// Resolve a traveler descriptor straight to a headcount.
pub fn resolve_travelers(descriptor: &str) -> u32 {
    TravelerDescriptor::parse(descriptor).headcount()
}

/// Explicit budget typed by the traveler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetAmount(Amount);

impl BudgetAmount {
    pub fn new(amount: Amount) -> Self {
        Self(amount)
    }

    /// Leading integer of `text` (a `$` prefix and thousands separators are
    /// tolerated), otherwise zero. Negative amounts are kept as-is.
    pub fn parse(text: &str) -> Self {
        Self(leading_amount(text).unwrap_or(0))
    }

    pub fn amount(&self) -> Amount {
        self.0
    }
}

/// How the traveler picked a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum BudgetChoice {
    Tier(Tier),
    Custom(Amount),
}

impl BudgetChoice {
    /// Accept a custom amount only at or above [`CUSTOM_BUDGET_MINIMUM`].
    pub fn custom(amount: Amount) -> Option<Self> {
        Self::accepts_custom(amount).then_some(Self::Custom(amount))
    }

    pub fn accepts_custom(amount: Amount) -> bool {
        amount >= CUSTOM_BUDGET_MINIMUM
    }

    /// Parse a tier name or a custom amount.
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(tier) = text.parse::<Tier>() {
            return Some(Self::Tier(tier));
        }
        leading_amount(text).and_then(Self::custom)
    }
}

/// Everything the engine needs to know about a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub destination: String,
    pub duration: TripDuration,
    pub travelers: TravelerDescriptor,
    pub budget: Option<BudgetChoice>,
}

impl TripParameters {
    /// One day, one traveler, no budget choice.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            duration: TripDuration::default(),
            travelers: TravelerDescriptor::default(),
            budget: None,
        }
    }

    /// Build from raw form fields.
    pub fn from_raw(destination: &str, days: &str, travelers: &str) -> Self {
        Self::new(destination)
            .with_duration(TripDuration::parse(days))
            .with_travelers(TravelerDescriptor::parse(travelers))
    }

    pub fn with_duration(mut self, duration: TripDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_days(self, days: i64) -> Self {
        self.with_duration(TripDuration::from_days(days))
    }

    pub fn with_travelers(mut self, travelers: TravelerDescriptor) -> Self {
        self.travelers = travelers;
        self
    }

    pub fn with_budget(mut self, budget: BudgetChoice) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn headcount(&self) -> u32 {
        self.travelers.headcount()
    }
}
