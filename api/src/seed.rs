//! Deterministic sample catalog for development and tests.
//!
//! Value ranges: stars 1-5, rate 0.0-5.0 with one decimal, price 50-1000
//! with two decimals.

use payloads::{Hotel, HotelId};
use rust_decimal::Decimal;
use uuid::Uuid;

const NAME_FIRST: [&str; 12] = [
    "Amber", "Cedar", "Golden", "Harbor", "Ivory", "Juniper", "Lakeview",
    "Meridian", "Northern", "Royal", "Summit", "Willow",
];

const NAME_SECOND: [&str; 10] = [
    "Court", "Crown", "Garden", "Grove", "Haven", "Lodge", "Palace", "Plaza",
    "Springs", "Terrace",
];

const STREETS: [&str; 8] = [
    "Beacon Street",
    "Castle Road",
    "Harbor Avenue",
    "King's Way",
    "Market Lane",
    "Ocean Drive",
    "Station Road",
    "Victory Boulevard",
];

/// Generate `count` hotels. Names are unique up to 120 entries; values are
/// derived from the index so repeated runs agree on everything except ids.
pub fn sample_hotels(count: usize) -> Vec<Hotel> {
    (0..count)
        .map(|i| {
            let name = format!(
                "Hotel {} {}",
                NAME_FIRST[i % NAME_FIRST.len()],
                NAME_SECOND[(i / NAME_FIRST.len()) % NAME_SECOND.len()],
            );
            let stars = (i % 5 + 1) as u8;
            let rate = ((i * 7) % 51) as f64 / 10.0;
            // 50.00 ..= 1000.00, in cents
            let cents = 5_000 + (i as i64 * 931) % 95_001;
            Hotel {
                id: HotelId(Uuid::new_v4()),
                name: name.clone(),
                image: format!("https://picsum.photos/600/400?random={i}"),
                address: format!(
                    "{} {}",
                    100 + (i * 13) % 899,
                    STREETS[i % STREETS.len()]
                ),
                stars,
                rate,
                price: Decimal::new(cents, 2),
                description: format!(
                    "{name} is a {stars}-star stay on {street}, a short \
                     walk from the city center.\n\nGuests rate it {rate:.1} \
                     out of 5 for its service, comfortable rooms, and \
                     breakfast. Rooms include free wifi and daily \
                     housekeeping.",
                    street = STREETS[i % STREETS.len()],
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::requests::MAX_PRICE_CEILING;
    use rust_decimal::dec;

    #[test]
    fn generated_values_stay_in_range() {
        for hotel in sample_hotels(200) {
            assert!((1..=5).contains(&hotel.stars));
            assert!((0.0..=5.0).contains(&hotel.rate));
            assert!(hotel.price >= dec!(50));
            assert!(hotel.price <= MAX_PRICE_CEILING);
        }
    }

    #[test]
    fn names_are_unique_within_the_default_catalog() {
        let hotels = sample_hotels(100);
        let mut names: Vec<&str> =
            hotels.iter().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), hotels.len());
    }
}
