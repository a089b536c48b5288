//! Flight offers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{place_or, rating};
use crate::budget::{Amount, Tier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub airline: String,
    pub flight_number: String,
    pub price: Amount,
    pub cabin_class: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    /// Morning, Afternoon or Evening
    pub slot: String,
    pub description: String,
    pub features: Vec<String>,
    pub baggage: String,
    pub rating: f32,
    pub stops: u8,
}

/// (departure, arrival, slot)
const SCHEDULE: [(&str, &str, &str); 3] = [
    ("06:00", "08:30", "Morning"),
    ("12:00", "14:30", "Afternoon"),
    ("18:00", "20:30", "Evening"),
];

struct FlightRange {
    airlines: [&'static str; 3],
    min: Amount,
    max: Amount,
    cabin_class: &'static str,
}

fn range_for(tier: Tier) -> FlightRange {
    match tier {
        Tier::Economy => FlightRange {
            airlines: ["IndiGo", "SpiceJet", "GoFirst"],
            min: 30,
            max: 75,
            cabin_class: "Economy",
        },
        Tier::Standard => FlightRange {
            airlines: ["Air India", "Vistara", "IndiGo"],
            min: 50,
            max: 150,
            cabin_class: "Economy/Premium Economy",
        },
        Tier::Premium => FlightRange {
            airlines: ["Vistara", "Air India", "Emirates"],
            min: 100,
            max: 300,
            cabin_class: "Business/First Class",
        },
    }
}

/// Two-character IATA code, `XX` when unknown.
pub fn airline_code(airline: &str) -> &'static str {
    match airline {
        "IndiGo" => "6E",
        "SpiceJet" => "SG",
        "GoFirst" => "G8",
        "Air India" => "AI",
        "Vistara" => "UK",
        "Emirates" => "EK",
        _ => "XX",
    }
}

fn features_for(tier: Tier) -> Vec<String> {
    let extras: &[&str] = match tier {
        Tier::Premium => &["Priority boarding", "Lounge access", "Extra legroom", "Premium meals"],
        Tier::Standard => &["Extra legroom", "Priority boarding", "Premium snacks"],
        Tier::Economy => &["Comfortable seating"],
    };
    ["In-flight entertainment", "Meals included"]
        .iter()
        .chain(extras)
        .map(|f| f.to_string())
        .collect()
}

fn baggage_for(tier: Tier) -> &'static str {
    match tier {
        Tier::Premium => "30kg + Cabin bag",
        Tier::Standard => "25kg + Cabin bag",
        Tier::Economy => "15kg + Cabin bag",
    }
}

/// One offer per airline serving `tier`; the third flight has a stop.
pub fn generate_flights<R: Rng + ?Sized>(rng: &mut R, destination: &str, tier: Tier) -> Vec<FlightOffer> {
    let range = range_for(tier);
    let place = place_or(destination, "your destination");

    range
        .airlines
        .iter()
        .enumerate()
        .map(|(index, airline)| {
            let (departure, arrival, slot) = SCHEDULE[index % SCHEDULE.len()];
            FlightOffer {
                airline: airline.to_string(),
                flight_number: format!("{}{}", airline_code(airline), rng.gen_range(1000..10000)),
                price: rng.gen_range(range.min..range.max),
                cabin_class: range.cabin_class.to_string(),
                departure: departure.to_string(),
                arrival: arrival.to_string(),
                duration: "2h 30m".to_string(),
                slot: slot.to_string(),
                description: format!("{} flight to {} with {}", slot, place, airline),
                features: features_for(tier),
                baggage: baggage_for(tier).to_string(),
                rating: rating(&mut *rng, 4.0, 4.8),
                stops: if index == 2 { 1 } else { 0 },
            }
        })
        .collect()
}
