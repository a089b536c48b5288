//! Comfort tiers and spend categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Monetary amount in the single implicit currency unit.
pub type Amount = i64;

/// Named comfort level with its own daily cost profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Hostels, street food, public transport
    Economy,
    /// 3-star hotels, mixed dining, taxis and trains
    Standard,
    /// 4-5 star hotels, fine dining, private transfers
    Premium,
}

impl Default for Tier {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

impl Tier {
    /// All tiers, cheapest first.
    pub const ALL: [Tier; 3] = [Tier::Economy, Tier::Standard, Tier::Premium];

    /// The tier highlighted to travelers when they have not picked one.
    pub const RECOMMENDED: Tier = Tier::Standard;

    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Economy => "economy",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    /// Display title for the tier.
    pub fn title(&self) -> &'static str {
        match self {
            Tier::Economy => "Budget Travel",
            Tier::Standard => "Comfortable",
            Tier::Premium => "Luxury",
        }
    }

    /// Short description of what the tier buys.
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Economy => "Hostels, local food, public transport",
            Tier::Standard => "3-star hotels, mix dining, private transport",
            Tier::Premium => "4-5 star hotels, fine dining, premium experiences",
        }
    }

    pub fn is_recommended(&self) -> bool {
        *self == Self::RECOMMENDED
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}' (expected economy, standard or premium)")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    /// Accepts the canonical names and the budget/moderate/luxury labels
    /// used by the trip planner forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" | "budget" => Ok(Tier::Economy),
            "standard" | "moderate" => Ok(Tier::Standard),
            "premium" | "luxury" => Ok(Tier::Premium),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Spend category shared by the cost model and the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lodging,
    Food,
    Transport,
    Activities,
    Incidentals,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Lodging,
        Category::Food,
        Category::Transport,
        Category::Activities,
        Category::Incidentals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lodging => "lodging",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Activities => "activities",
            Category::Incidentals => "incidentals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
