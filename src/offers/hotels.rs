//! Hotel offers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{place_or, rating};
use crate::budget::{Amount, Tier};

/// Number of hotel offers shown for a trip.
pub const HOTEL_OFFER_COUNT: usize = 4;

const LOCATIONS: [&str; 4] = ["City Center", "Near Airport", "Tourist District", "Business Area"];

/// Price variation per list position, in percent of the drawn base price.
const PRICE_VARIATION: [Amount; 4] = [80, 100, 120, 140];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    pub name: String,
    pub address: String,
    pub price_per_night: Amount,
    pub rating: f32,
    pub amenities: Vec<String>,
    pub description: String,
}

struct HotelRange {
    min: Amount,
    max: Amount,
    kinds: [&'static str; 4],
    amenities: &'static [&'static str],
}

fn range_for(tier: Tier) -> HotelRange {
    match tier {
        Tier::Economy => HotelRange {
            min: 15,
            max: 35,
            kinds: ["Budget Hotel", "Hostel", "Guest House", "Lodge"],
            amenities: &["Free WiFi", "AC", "24/7 Reception", "Room Service"],
        },
        Tier::Standard => HotelRange {
            min: 30,
            max: 70,
            kinds: ["3-Star Hotel", "Business Hotel", "Boutique Hotel", "Resort"],
            amenities: &["Free WiFi", "AC", "Restaurant", "Gym", "Room Service", "Parking"],
        },
        Tier::Premium => HotelRange {
            min: 60,
            max: 150,
            kinds: ["4-Star Hotel", "5-Star Resort", "Luxury Hotel", "Premium Resort"],
            amenities: &[
                "Free WiFi",
                "AC",
                "Restaurant",
                "Spa",
                "Pool",
                "Gym",
                "Concierge",
                "Valet Parking",
            ],
        },
    }
}

fn describe(kind: &str, destination: &str, index: usize) -> String {
    let kind = kind.to_lowercase();
    match index % 4 {
        0 => format!(
            "Comfortable {} in the heart of {} with modern amenities",
            kind,
            place_or(destination, "the city")
        ),
        1 => format!("Well-located {} offering great value and convenient access to attractions", kind),
        2 => format!("Premium {} featuring excellent service and top-notch facilities", kind),
        _ => format!("Luxury {} providing exceptional comfort and world-class hospitality", kind),
    }
}

/// Top `existing` up to [`HOTEL_OFFER_COUNT`] offers priced for `tier`.
///
/// Existing offers keep their position; surplus ones are dropped.
pub fn generate_hotels<R: Rng + ?Sized>(
    rng: &mut R,
    destination: &str,
    tier: Tier,
    existing: Vec<HotelOffer>,
) -> Vec<HotelOffer> {
    let range = range_for(tier);
    let mut hotels = existing;
    hotels.truncate(HOTEL_OFFER_COUNT);

    for index in hotels.len()..HOTEL_OFFER_COUNT {
        let base = rng.gen_range(range.min..range.max);
        let kind = range.kinds[index % range.kinds.len()];
        let amenity_count = (3 + index).min(range.amenities.len());

        hotels.push(HotelOffer {
            name: format!("{} {} {}", kind, place_or(destination, "Central"), index + 1),
            address: format!(
                "{} - {}",
                place_or(destination, "City"),
                LOCATIONS[index % LOCATIONS.len()]
            ),
            price_per_night: base * PRICE_VARIATION[index] / 100,
            rating: rating(rng, 3.2, 4.8),
            amenities: range.amenities[..amenity_count]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            description: describe(kind, destination, index),
        });
    }

    hotels
}
