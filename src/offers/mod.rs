//! Sample hotel, flight and local transport offers.
//!
//! When no booking data is available the planner shows plausible offers
//! priced for the traveler's tier. Generation is random, so every generator
//! takes the random source explicitly; seed a `StdRng` for reproducible
//! output. None of this feeds the budget engine.

pub mod flights;
pub mod hotels;
pub mod transport;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::budget::{Amount, Tier};

pub use flights::{generate_flights, FlightOffer};
pub use hotels::{generate_hotels, HotelOffer};
pub use transport::{generate_transport, TransportOffer};

/// Days assumed when a trip length is unknown.
pub const DEFAULT_TRIP_DAYS: u32 = 7;

/// Kind of offer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Hotels,
    Flights,
    Transport,
}

impl fmt::Display for OfferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OfferKind::Hotels => "hotels",
            OfferKind::Flights => "flights",
            OfferKind::Transport => "transport",
        })
    }
}

impl FromStr for OfferKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hotels" | "hotel" => Ok(OfferKind::Hotels),
            "flights" | "flight" => Ok(OfferKind::Flights),
            "transport" => Ok(OfferKind::Transport),
            other => Err(format!("unknown offer kind '{}'", other)),
        }
    }
}

/// Tier implied by an explicit trip budget for one kind of offer.
///
/// Each kind looks at its own slice of the budget: lodging takes 35% of a
/// day's spend, flights 30% of the whole budget, local transport 15% of a
/// day's spend. A zero day count means a [`DEFAULT_TRIP_DAYS`] trip.
pub fn tier_for_amount(kind: OfferKind, amount: Amount, days: u32) -> Tier {
    let amount = amount as f64;
    let days = if days == 0 { DEFAULT_TRIP_DAYS } else { days };
    let (share, lower, upper) = match kind {
        OfferKind::Hotels => (amount / f64::from(DEFAULT_TRIP_DAYS) * 0.35, 25.0, 50.0),
        OfferKind::Flights => (amount * 0.3, 100.0, 250.0),
        OfferKind::Transport => (amount / f64::from(days) * 0.15, 4.0, 10.0),
    };

    if share < lower {
        Tier::Economy
    } else if share < upper {
        Tier::Standard
    } else {
        Tier::Premium
    }
}

/// A positive amount wins over a tier; with neither the recommended tier applies.
pub fn resolve_tier(kind: OfferKind, tier: Option<Tier>, amount: Option<Amount>, days: u32) -> Tier {
    match amount {
        Some(amount) if amount > 0 => tier_for_amount(kind, amount, days),
        _ => tier.unwrap_or(Tier::RECOMMENDED),
    }
}

/// Generated offers of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "offers")]
pub enum OfferSet {
    Hotels(Vec<HotelOffer>),
    Flights(Vec<FlightOffer>),
    Transport(Vec<TransportOffer>),
}

impl OfferSet {
    pub fn len(&self) -> usize {
        match self {
            OfferSet::Hotels(offers) => offers.len(),
            OfferSet::Flights(offers) => offers.len(),
            OfferSet::Transport(offers) => offers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a fresh offer list of `kind`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, kind: OfferKind, destination: &str, tier: Tier) -> OfferSet {
    match kind {
        OfferKind::Hotels => OfferSet::Hotels(generate_hotels(rng, destination, tier, Vec::new())),
        OfferKind::Flights => OfferSet::Flights(generate_flights(rng, destination, tier)),
        OfferKind::Transport => OfferSet::Transport(generate_transport(rng, destination, tier)),
    }
}

/// Uniform rating in `[low, high)` rounded to one decimal.
pub(crate) fn rating<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    (rng.gen_range(low..high) * 10.0).round() / 10.0
}

/// Destination label with a fallback for blank input.
pub(crate) fn place_or<'a>(destination: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = destination.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
