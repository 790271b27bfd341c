use std::cmp::Ordering;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use payloads::{
    Hotel, HotelId,
    requests::{ListHotels, SortBy, SortDirection},
};

use super::StoreError;

/// In-memory hotel catalog; the serving side of a `db.json` dataset.
pub struct HotelStore {
    hotels: RwLock<Vec<Hotel>>,
}

impl HotelStore {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: RwLock::new(hotels),
        }
    }

    /// Load a `{ "hotels": [...] }` database file.
    pub fn from_db_file(path: &Path) -> anyhow::Result<Self> {
        #[derive(serde::Deserialize)]
        struct Db {
            hotels: Vec<Hotel>,
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let db: Db = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Self::new(db.hotels))
    }

    /// Filter, sort, and slice one page.
    ///
    /// The second value is the total match count before the page window is
    /// applied. A page past the end yields an empty slice with the total
    /// still reported.
    pub fn list(&self, query: &ListHotels) -> (Vec<Hotel>, u64) {
        let hotels = self.hotels.read().expect("hotel store lock poisoned");

        let name_pattern =
            query.filters.name_pattern().map(|name| name.to_lowercase());
        let mut matches: Vec<&Hotel> = hotels
            .iter()
            .filter(|hotel| match &name_pattern {
                Some(pattern) => hotel.name.to_lowercase().contains(pattern),
                None => true,
            })
            .filter(|hotel| {
                query.filters.selected_stars.is_empty()
                    || query.filters.selected_stars.contains(&hotel.stars)
            })
            .filter(|hotel| match query.filters.rate_floor() {
                Some(floor) => hotel.rate >= floor,
                None => true,
            })
            .filter(|hotel| match query.filters.price_ceiling() {
                Some(ceiling) => hotel.price <= ceiling,
                None => true,
            })
            .collect();

        if let Some(sort_by) = query.sort.sort_by {
            matches.sort_by(|a, b| {
                let ordering = match sort_by {
                    SortBy::Price => a.price.cmp(&b.price),
                    SortBy::Rate => {
                        a.rate.partial_cmp(&b.rate).unwrap_or(Ordering::Equal)
                    }
                    SortBy::Stars => a.stars.cmp(&b.stars),
                    SortBy::Name => {
                        a.name.to_lowercase().cmp(&b.name.to_lowercase())
                    }
                };
                match query.sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total_items = matches.len() as u64;
        let start = (query.page as usize - 1) * query.page_size as usize;
        let page: Vec<Hotel> = matches
            .into_iter()
            .skip(start)
            .take(query.page_size as usize)
            .cloned()
            .collect();
        (page, total_items)
    }

    pub fn get(&self, hotel_id: &HotelId) -> Result<Hotel, StoreError> {
        let hotels = self.hotels.read().expect("hotel store lock poisoned");
        hotels
            .iter()
            .find(|hotel| hotel.id == *hotel_id)
            .cloned()
            .ok_or(StoreError::HotelNotFound(*hotel_id))
    }

    pub fn len(&self) -> usize {
        self.hotels.read().expect("hotel store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::requests::{HotelFilters, HotelSort};
    use rust_decimal::{Decimal, dec};
    use uuid::Uuid;

    fn hotel(name: &str, stars: u8, rate: f64, price: Decimal) -> Hotel {
        Hotel {
            id: HotelId(Uuid::new_v4()),
            name: name.to_string(),
            image: "https://example.com/image.jpg".to_string(),
            address: "1 Test Street".to_string(),
            stars,
            rate,
            price,
            description: String::new(),
        }
    }

    fn test_store() -> HotelStore {
        HotelStore::new(vec![
            hotel("Grand Plaza", 5, 4.8, dec!(320)),
            hotel("Plaza Inn", 3, 3.1, dec!(95)),
            hotel("Seaside Retreat", 4, 4.2, dec!(210)),
            hotel("Budget Stop", 1, 2.0, dec!(55)),
            hotel("City Lights", 4, 3.9, dec!(180)),
        ])
    }

    fn query() -> ListHotels {
        ListHotels {
            page_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn unfiltered_list_returns_everything_in_catalog_order() {
        let store = test_store();
        let (hotels, total) = store.list(&query());
        assert_eq!(total, 5);
        assert_eq!(hotels[0].name, "Grand Plaza");
        assert_eq!(hotels.len(), 5);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let store = test_store();
        let mut query = query();
        query.filters.name = "PLAZA".to_string();
        let (hotels, total) = store.list(&query);
        assert_eq!(total, 2);
        assert!(hotels.iter().all(|h| h.name.contains("Plaza")));
    }

    #[test]
    fn stars_filter_matches_any_selected_value() {
        let store = test_store();
        let mut query = query();
        query.filters.selected_stars = vec![1, 5];
        let (hotels, total) = store.list(&query);
        assert_eq!(total, 2);
        assert!(hotels.iter().all(|h| h.stars == 1 || h.stars == 5));
    }

    #[test]
    fn rate_floor_and_price_ceiling_are_inclusive() {
        let store = test_store();
        let mut query = query();
        query.filters.min_rate = 4.2;
        let (_, total) = store.list(&query);
        assert_eq!(total, 2); // 4.8 and exactly 4.2

        let mut query = self::query();
        query.filters.max_price = dec!(95);
        let (_, total) = store.list(&query);
        assert_eq!(total, 2); // 55 and exactly 95
    }

    #[test]
    fn sorts_by_price_in_both_directions() {
        let store = test_store();
        let mut query = query();
        query.sort = HotelSort {
            sort_by: Some(SortBy::Price),
            direction: SortDirection::Asc,
        };
        let (hotels, _) = store.list(&query);
        assert_eq!(hotels.first().unwrap().name, "Budget Stop");
        assert_eq!(hotels.last().unwrap().name, "Grand Plaza");

        query.sort.direction = SortDirection::Desc;
        let (hotels, _) = store.list(&query);
        assert_eq!(hotels.first().unwrap().name, "Grand Plaza");
    }

    #[test]
    fn pages_past_the_end_are_empty_but_keep_the_total() {
        let store = test_store();
        let mut query = query();
        query.page = 4;
        query.page_size = 2;
        let (hotels, total) = store.list(&query);
        assert!(hotels.is_empty());
        assert_eq!(total, 5);
    }

    #[test]
    fn last_partial_page_is_sliced_correctly() {
        let store = test_store();
        let mut query = query();
        query.page = 3;
        query.page_size = 2;
        let (hotels, total) = store.list(&query);
        assert_eq!(hotels.len(), 1);
        assert_eq!(total, 5);
    }

    #[test]
    fn get_returns_not_found_for_unknown_id() {
        let store = test_store();
        let unknown = HotelId(Uuid::new_v4());
        assert!(matches!(
            store.get(&unknown),
            Err(StoreError::HotelNotFound(id)) if id == unknown
        ));
    }

    #[test]
    fn filters_at_their_defaults_do_not_constrain() {
        // A hotel above the default price ceiling still lists when the
        // filter is untouched.
        let store = HotelStore::new(vec![
            hotel("Penthouse Palace", 5, 5.0, dec!(1200)),
            hotel("Budget Stop", 1, 2.0, dec!(55)),
        ]);
        let (_, total) = store.list(&query());
        assert_eq!(total, 2);

        let mut query = query();
        query.filters.max_price = dec!(999);
        let (_, total) = store.list(&query);
        assert_eq!(total, 1);
    }
}
