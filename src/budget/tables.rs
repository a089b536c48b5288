//! Reference tables: cost model, allocation weights and destination minimums.
//!
//! All values default to the compiled-in figures and may be overridden from
//! configuration. Tables are validated once on construction; the engine never
//! re-checks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tier::{Amount, Category, Tier};

/// Errors raised when reference tables are malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TablesError {
    /// A category cost is negative.
    #[error("negative {category} cost for {tier} tier: {value}")]
    NegativeCost {
        tier: Tier,
        category: Category,
        value: Amount,
    },

    /// A category gets cheaper when moving to a higher tier.
    #[error("{category} cost for {higher} ({higher_value}) is below {lower} ({lower_value})")]
    NonMonotonicCost {
        category: Category,
        lower: Tier,
        lower_value: Amount,
        higher: Tier,
        higher_value: Amount,
    },

    /// Allocation percentages must add up to exactly 100.
    #[error("allocation weights sum to {0}%, expected 100%")]
    WeightSum(u32),

    /// Allocation percentages too large to add up.
    #[error("allocation weights overflow when summed")]
    WeightOverflow,

    /// Daily costs of a tier too large to add up.
    #[error("daily costs for {0} overflow when summed")]
    CostOverflow(Tier),

    /// Minimum daily spend must be positive.
    #[error("minimum daily spend for '{key}' must be positive, got {value}")]
    NonPositiveMinimum { key: String, value: Amount },

    /// Registry keys must be non-empty.
    #[error("destination registry contains an empty key")]
    EmptyDestinationKey,

    /// Registry keys must be unique.
    #[error("destination registry contains '{0}' more than once")]
    DuplicateDestinationKey(String),

    #[error("TOML error: {0}")]
    Toml(String),
}

/// Per-person-per-day cost of each category for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCosts {
    pub lodging: Amount,
    pub food: Amount,
    pub transport: Amount,
    pub activities: Amount,
    pub incidentals: Amount,
}

impl CategoryCosts {
    pub const fn new(
        lodging: Amount,
        food: Amount,
        transport: Amount,
        activities: Amount,
        incidentals: Amount,
    ) -> Self {
        Self {
            lodging,
            food,
            transport,
            activities,
            incidentals,
        }
    }

    /// Cost of a single category.
    pub fn get(&self, category: Category) -> Amount {
        match category {
            Category::Lodging => self.lodging,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Incidentals => self.incidentals,
        }
    }

    /// Sum over all categories, saturating at `Amount::MAX`.
    pub fn daily_total(&self) -> Amount {
        Category::ALL
            .iter()
            .fold(0, |sum: Amount, c| sum.saturating_add(self.get(*c)))
    }

    /// Sum over all categories, `None` on overflow.
    pub fn checked_daily_total(&self) -> Option<Amount> {
        Category::ALL
            .iter()
            .try_fold(0, |sum: Amount, c| sum.checked_add(self.get(*c)))
    }
}

/// Static cost tables for the three tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub economy: CategoryCosts,
    pub standard: CategoryCosts,
    pub premium: CategoryCosts,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            economy: CategoryCosts::new(25, 20, 15, 15, 10),
            standard: CategoryCosts::new(80, 40, 25, 30, 15),
            premium: CategoryCosts::new(200, 80, 60, 80, 30),
        }
    }
}

impl CostModel {
    /// Build a cost model, rejecting tables that would break tier ordering.
    pub fn new(
        economy: CategoryCosts,
        standard: CategoryCosts,
        premium: CategoryCosts,
    ) -> Result<Self, TablesError> {
        let model = Self {
            economy,
            standard,
            premium,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn costs(&self, tier: Tier) -> &CategoryCosts {
        match tier {
            Tier::Economy => &self.economy,
            Tier::Standard => &self.standard,
            Tier::Premium => &self.premium,
        }
    }

    /// Per-person-per-day cost of a tier across all categories.
    pub fn daily_total(&self, tier: Tier) -> Amount {
        self.costs(tier).daily_total()
    }

    /// Every cost must be non-negative and every category monotonic across
    /// tiers, which makes `economy <= standard <= premium` hold for totals.
    pub fn validate(&self) -> Result<(), TablesError> {
        for tier in Tier::ALL {
            for category in Category::ALL {
                let value = self.costs(tier).get(category);
                if value < 0 {
                    return Err(TablesError::NegativeCost {
                        tier,
                        category,
                        value,
                    });
                }
            }
            if self.costs(tier).checked_daily_total().is_none() {
                return Err(TablesError::CostOverflow(tier));
            }
        }

        for pair in Tier::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            for category in Category::ALL {
                let lower_value = self.costs(lower).get(category);
                let higher_value = self.costs(higher).get(category);
                if higher_value < lower_value {
                    return Err(TablesError::NonMonotonicCost {
                        category,
                        lower,
                        lower_value,
                        higher,
                        higher_value,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Percentage of a total assigned to each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationWeights {
    pub lodging: u32,
    pub food: u32,
    pub activities: u32,
    pub transport: u32,
    pub incidentals: u32,
}

impl Default for AllocationWeights {
    fn default() -> Self {
        Self {
            lodging: 35,
            food: 25,
            activities: 20,
            transport: 15,
            incidentals: 5,
        }
    }
}

impl AllocationWeights {
    pub fn percent(&self, category: Category) -> u32 {
        match category {
            Category::Lodging => self.lodging,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Incidentals => self.incidentals,
        }
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        let sum = Category::ALL
            .iter()
            .try_fold(0u32, |sum, c| sum.checked_add(self.percent(*c)))
            .ok_or(TablesError::WeightOverflow)?;
        if sum != 100 {
            return Err(TablesError::WeightSum(sum));
        }
        Ok(())
    }
}

/// One registry entry: a destination substring and its minimum daily spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationMinimum {
    pub key: String,
    pub min_per_day: Amount,
}

impl DestinationMinimum {
    pub fn new(key: impl Into<String>, min_per_day: Amount) -> Self {
        Self {
            key: key.into(),
            min_per_day,
        }
    }
}

/// Result of a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumMatch<'a> {
    /// Matched key, `None` when the default applied
    pub key: Option<&'a str>,
    pub min_per_day: Amount,
}

/// Ordered destination registry. The first key contained in the lowercased
/// destination wins, so entry order is the tie-break for overlapping keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationMinimums {
    pub default_min_per_day: Amount,
    /// Static alternatives offered when a budget falls short
    pub alternatives: Vec<String>,
    pub entries: Vec<DestinationMinimum>,
}

impl Default for DestinationMinimums {
    fn default() -> Self {
        let entries = [
            ("goa", 37),
            ("mumbai", 43),
            ("delhi", 37),
            ("jaipur", 31),
            ("kerala", 40),
            ("manali", 43),
            ("udaipur", 37),
            ("agra", 31),
            ("bangalore", 40),
            ("hyderabad", 35),
            ("pune", 35),
            ("kolkata", 32),
            ("chennai", 35),
        ]
        .into_iter()
        .map(|(key, min)| DestinationMinimum::new(key, min))
        .collect();

        Self {
            default_min_per_day: 37,
            alternatives: vec![
                "Pondicherry".to_string(),
                "Rishikesh".to_string(),
                "Hampi".to_string(),
            ],
            entries,
        }
    }
}

impl DestinationMinimums {
    /// Build a registry; keys are lowercased and order is preserved.
    pub fn new(default_min_per_day: Amount, entries: Vec<DestinationMinimum>) -> Result<Self, TablesError> {
        let registry = Self {
            default_min_per_day,
            alternatives: Self::default().alternatives,
            entries,
        }
        .normalized();
        registry.validate()?;
        Ok(registry)
    }

    /// Replace the alternative destinations.
    pub fn with_alternatives(mut self, alternatives: Vec<String>) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Lowercase and trim every key.
    pub fn normalized(mut self) -> Self {
        for entry in &mut self.entries {
            entry.key = entry.key.trim().to_lowercase();
        }
        self
    }

    pub fn lookup(&self, destination: &str) -> MinimumMatch<'_> {
        let needle = destination.to_lowercase();
        self.entries
            .iter()
            .find(|entry| needle.contains(entry.key.as_str()))
            .map(|entry| MinimumMatch {
                key: Some(entry.key.as_str()),
                min_per_day: entry.min_per_day,
            })
            .unwrap_or(MinimumMatch {
                key: None,
                min_per_day: self.default_min_per_day,
            })
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        if self.default_min_per_day <= 0 {
            return Err(TablesError::NonPositiveMinimum {
                key: "default".to_string(),
                value: self.default_min_per_day,
            });
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            if entry.key.is_empty() {
                return Err(TablesError::EmptyDestinationKey);
            }
            if entry.min_per_day <= 0 {
                return Err(TablesError::NonPositiveMinimum {
                    key: entry.key.clone(),
                    value: entry.min_per_day,
                });
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(TablesError::DuplicateDestinationKey(entry.key.clone()));
            }
        }
        Ok(())
    }
}

/// Every table the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub cost_model: CostModel,
    pub allocation: AllocationWeights,
    pub destinations: DestinationMinimums,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost model.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Set the allocation weights.
    pub fn with_allocation(mut self, allocation: AllocationWeights) -> Self {
        self.allocation = allocation;
        self
    }

    /// Set the destination registry.
    pub fn with_destinations(mut self, destinations: DestinationMinimums) -> Self {
        self.destinations = destinations.normalized();
        self
    }

    /// Normalize registry keys and check every table.
    pub fn validated(mut self) -> Result<Self, TablesError> {
        self.destinations = self.destinations.normalized();
        self.cost_model.validate()?;
        self.allocation.validate()?;
        self.destinations.validate()?;
        Ok(self)
    }

    /// Parse tables from a TOML document; missing sections keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, TablesError> {
        let tables: Self = toml::from_str(source).map_err(|e| TablesError::Toml(e.to_string()))?;
        tables.validated()
    }

    pub fn to_toml_string(&self) -> Result<String, TablesError> {
        toml::to_string_pretty(self).map_err(|e| TablesError::Toml(e.to_string()))
    }
}
