use std::collections::HashMap;

use payloads::{
    Hotel, HotelId,
    requests::{HotelFilters, HotelSort, ListHotels, SortBy, SortDirection},
};
use rust_decimal::Decimal;
use yewdux::prelude::*;

/// Page sizes the catalog view offers. Anything else is rejected by
/// [`HotelsState::with_page_size`].
pub const AVAILABLE_PAGE_SIZES: [u32; 4] = [9, 18, 27, 36];

/// Pagination window over the filtered catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPagination {
    /// 1-based page number.
    pub current_page: u32,
    pub page_size: u32,
    /// Total matching hotels across all pages, from the last response.
    pub total_items: u64,
}

impl Default for HotelPagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: AVAILABLE_PAGE_SIZES[0],
            total_items: 0,
        }
    }
}

impl HotelPagination {
    /// Number of pages; an empty catalog still has one (empty) page.
    pub fn total_pages(&self) -> u32 {
        (self.total_items.div_ceil(self.page_size as u64) as u32).max(1)
    }
}

/// The catalog view's single source of truth: current result page plus the
/// filter, sort, and pagination settings that produced it.
///
/// Transitions are pure. Every `with_*` method returns `Some(next)` when the
/// proposed value actually changes something and `None` when it would be a
/// no-op, so callers only refetch on `Some`. Accepted filter and sort changes
/// snap back to page 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HotelsState {
    pub data: Vec<Hotel>,
    pub filters: HotelFilters,
    pub sort: HotelSort,
    pub pagination: HotelPagination,
}

impl HotelsState {
    fn changed_filters(
        &self,
        update: impl FnOnce(&mut HotelFilters),
    ) -> Option<Self> {
        let mut filters = self.filters.clone();
        update(&mut filters);
        if filters == self.filters {
            return None;
        }
        let mut next = self.clone();
        next.filters = filters;
        next.pagination.current_page = 1;
        Some(next)
    }

    pub fn with_name_filter(&self, name: &str) -> Option<Self> {
        self.changed_filters(|f| f.name = name.to_string())
    }

    /// Star selection compares as a set: the same stars in a different order
    /// are not a change.
    pub fn with_stars_filter(&self, stars: Vec<u8>) -> Option<Self> {
        let mut proposed = stars.clone();
        proposed.sort_unstable();
        let mut current = self.filters.selected_stars.clone();
        current.sort_unstable();
        if proposed == current {
            return None;
        }
        let mut next = self.clone();
        next.filters.selected_stars = stars;
        next.pagination.current_page = 1;
        Some(next)
    }

    pub fn with_min_rate_filter(&self, min_rate: f64) -> Option<Self> {
        self.changed_filters(|f| f.min_rate = min_rate)
    }

    pub fn with_max_price_filter(&self, max_price: Decimal) -> Option<Self> {
        self.changed_filters(|f| f.max_price = max_price)
    }

    pub fn with_sort(
        &self,
        sort_by: Option<SortBy>,
        direction: SortDirection,
    ) -> Option<Self> {
        let sort = HotelSort { sort_by, direction };
        if sort == self.sort {
            return None;
        }
        let mut next = self.clone();
        next.sort = sort;
        next.pagination.current_page = 1;
        Some(next)
    }

    /// Rejects sizes outside [`AVAILABLE_PAGE_SIZES`].
    pub fn with_page_size(&self, page_size: u32) -> Option<Self> {
        if !AVAILABLE_PAGE_SIZES.contains(&page_size)
            || page_size == self.pagination.page_size
        {
            return None;
        }
        let mut next = self.clone();
        next.pagination.page_size = page_size;
        next.pagination.current_page = 1;
        Some(next)
    }

    /// Rejects pages outside `1..=total_pages`.
    pub fn with_page(&self, page: u32) -> Option<Self> {
        if page < 1
            || page > self.pagination.total_pages()
            || page == self.pagination.current_page
        {
            return None;
        }
        let mut next = self.clone();
        next.pagination.current_page = page;
        Some(next)
    }

    pub fn next_page(&self) -> Option<Self> {
        self.with_page(self.pagination.current_page + 1)
    }

    pub fn previous_page(&self) -> Option<Self> {
        self.with_page(self.pagination.current_page.saturating_sub(1))
    }

    pub fn first_page(&self) -> Option<Self> {
        self.with_page(1)
    }

    pub fn last_page(&self) -> Option<Self> {
        self.with_page(self.pagination.total_pages())
    }

    /// Restore default filters. With filters already default this only
    /// navigates back to page 1, and is a no-op from page 1.
    pub fn reset_filters(&self) -> Option<Self> {
        if self.filters == HotelFilters::default() {
            return self.with_page(1);
        }
        let mut next = self.clone();
        next.filters = HotelFilters::default();
        next.pagination.current_page = 1;
        Some(next)
    }

    /// Fold a successful response into the state. The current page is
    /// clamped so it never points past the final page of the new total.
    pub fn apply_results(&self, hotels: Vec<Hotel>, total_items: u64) -> Self {
        let mut next = self.clone();
        next.data = hotels;
        next.pagination.total_items = total_items;
        next.pagination.current_page = next
            .pagination
            .current_page
            .min(next.pagination.total_pages());
        next
    }

    /// Fold a failed fetch into the state: no data, pagination back to its
    /// defaults, filters and sort left as the user set them.
    pub fn apply_fetch_error(&self) -> Self {
        Self {
            data: Vec::new(),
            filters: self.filters.clone(),
            sort: self.sort,
            pagination: HotelPagination::default(),
        }
    }

    /// The request corresponding to the current settings.
    pub fn to_query(&self) -> ListHotels {
        ListHotels {
            filters: self.filters.clone(),
            sort: self.sort,
            page: self.pagination.current_page,
            page_size: self.pagination.page_size,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub hotels: HotelsState,
    /// Hotels fetched individually for the detail view, keyed by id.
    pub individual_hotels: HashMap<HotelId, Hotel>,
}

impl State {
    pub fn has_hotel_loaded(&self, id: HotelId) -> bool {
        self.individual_hotels.contains_key(&id)
    }

    pub fn get_hotel(&self, id: HotelId) -> Option<&Hotel> {
        self.individual_hotels.get(&id)
    }

    pub fn set_hotel(&mut self, id: HotelId, hotel: Hotel) {
        self.individual_hotels.insert(id, hotel);
    }
}
