//! Local and intercity transport offers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{place_or, rating};
use crate::budget::{Amount, Tier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOffer {
    pub mode: String,
    pub price: Amount,
    pub comfort: String,
    pub duration: String,
    pub availability: String,
    pub description: String,
    pub features: Vec<String>,
    pub rating: f32,
}

struct Mode {
    name: &'static str,
    min: f64,
    max: f64,
    comfort: &'static str,
    duration: &'static str,
    availability: &'static str,
    features: &'static [&'static str],
}

static ECONOMY: [Mode; 3] = [
    Mode {
        name: "Public Bus",
        min: 1.0,
        max: 2.0,
        comfort: "Basic",
        duration: "4-6 hours",
        availability: "Every 30 mins",
        features: &["Basic seating", "Luggage space"],
    },
    Mode {
        name: "Shared Taxi",
        min: 2.0,
        max: 5.0,
        comfort: "Standard",
        duration: "3-4 hours",
        availability: "On demand",
        features: &["Shared ride", "Door pickup"],
    },
    Mode {
        name: "Local Train",
        min: 0.5,
        max: 1.5,
        comfort: "Basic",
        duration: "5-7 hours",
        availability: "4-6 daily",
        features: &["Scenic route", "Onboard food"],
    },
];

static STANDARD: [Mode; 3] = [
    Mode {
        name: "AC Bus",
        min: 2.0,
        max: 4.0,
        comfort: "Comfortable",
        duration: "4-5 hours",
        availability: "Every hour",
        features: &["AC", "Comfortable seats", "Entertainment"],
    },
    Mode {
        name: "Private Taxi",
        min: 10.0,
        max: 20.0,
        comfort: "Premium",
        duration: "3-4 hours",
        availability: "On demand",
        features: &["Private ride", "Professional driver", "Door-to-door"],
    },
    Mode {
        name: "Train (AC)",
        min: 3.0,
        max: 6.0,
        comfort: "Comfortable",
        duration: "4-6 hours",
        availability: "2-4 daily",
        features: &["AC", "Meals included", "Comfortable berths"],
    },
];

static PREMIUM: [Mode; 3] = [
    Mode {
        name: "Private Car",
        min: 25.0,
        max: 50.0,
        comfort: "Luxury",
        duration: "3-4 hours",
        availability: "On demand",
        features: &["Luxury interior", "Chauffeur", "Flexible stops"],
    },
    Mode {
        name: "Flight",
        min: 40.0,
        max: 100.0,
        comfort: "Premium",
        duration: "1-2 hours",
        availability: "3-5 daily",
        features: &["Quick travel", "In-flight service", "Baggage included"],
    },
    Mode {
        name: "Luxury Bus",
        min: 6.0,
        max: 15.0,
        comfort: "Luxury",
        duration: "4-5 hours",
        availability: "2-3 daily",
        features: &["Luxury seats", "Entertainment", "Refreshments"],
    },
];

fn modes_for(tier: Tier) -> &'static [Mode; 3] {
    match tier {
        Tier::Economy => &ECONOMY,
        Tier::Standard => &STANDARD,
        Tier::Premium => &PREMIUM,
    }
}

fn describe(mode: &str, destination: &str) -> String {
    let place = place_or(destination, "your destination");
    match mode {
        "Public Bus" => format!("Economical bus service connecting major cities to {}", place),
        "Shared Taxi" => format!("Comfortable shared ride with other travelers to {}", place),
        "Local Train" => format!("Scenic train journey through beautiful landscapes to {}", place),
        "AC Bus" => "Air-conditioned comfortable bus with modern amenities".to_string(),
        "Private Taxi" => "Private comfortable ride with professional driver".to_string(),
        "Train (AC)" => "Air-conditioned train with comfortable seating and dining options".to_string(),
        "Private Car" => "Luxury private car with chauffeur service".to_string(),
        "Flight" => format!("Quick and convenient air travel to {}", place),
        "Luxury Bus" => "Premium bus service with luxury seating and entertainment".to_string(),
        _ => format!("Transportation to {}", place),
    }
}

/// Three transport modes for `tier` with whole-unit prices.
pub fn generate_transport<R: Rng + ?Sized>(rng: &mut R, destination: &str, tier: Tier) -> Vec<TransportOffer> {
    modes_for(tier)
        .iter()
        .map(|mode| TransportOffer {
            mode: mode.name.to_string(),
            price: rng.gen_range(mode.min..mode.max).floor() as Amount,
            comfort: mode.comfort.to_string(),
            duration: mode.duration.to_string(),
            availability: mode.availability.to_string(),
            description: describe(mode.name, destination),
            features: mode.features.iter().map(|f| f.to_string()).collect(),
            rating: rating(&mut *rng, 3.8, 4.8),
        })
        .collect()
}
