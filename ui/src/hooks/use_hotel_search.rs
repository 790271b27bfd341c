use std::rc::Rc;

use payloads::requests::{SortBy, SortDirection};
use rust_decimal::Decimal;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    contexts::{LoadingHandle, use_loading},
    state::HotelsState,
};

/// Mutator surface for the catalog view.
///
/// Each mutator runs the corresponding [`HotelsState`] transition against
/// the store; when the transition accepts (the value actually changed), the
/// new state is committed and a fetch fires. Rejected transitions do
/// nothing, so typing an unchanged value into a filter never refetches.
///
/// Responses land in whatever order the server returns them and each one
/// overwrites the list wholesale, so the last response wins.
#[derive(Clone)]
pub struct HotelSearch {
    dispatch: Dispatch<State>,
    loading: LoadingHandle,
}

impl HotelSearch {
    fn apply(
        &self,
        transition: impl FnOnce(&HotelsState) -> Option<HotelsState>,
    ) {
        let current = self.dispatch.get();
        if let Some(next) = transition(&current.hotels) {
            self.dispatch.reduce_mut(|s| s.hotels = next);
            self.fetch();
        }
    }

    pub fn update_name_filter(&self, name: &str) {
        self.apply(|h| h.with_name_filter(name));
    }

    pub fn update_stars_filter(&self, stars: Vec<u8>) {
        self.apply(|h| h.with_stars_filter(stars));
    }

    pub fn update_min_rate_filter(&self, min_rate: f64) {
        self.apply(|h| h.with_min_rate_filter(min_rate));
    }

    pub fn update_max_price_filter(&self, max_price: Decimal) {
        self.apply(|h| h.with_max_price_filter(max_price));
    }

    pub fn update_sort(
        &self,
        sort_by: Option<SortBy>,
        direction: SortDirection,
    ) {
        self.apply(|h| h.with_sort(sort_by, direction));
    }

    pub fn update_page_size(&self, page_size: u32) {
        self.apply(|h| h.with_page_size(page_size));
    }

    pub fn go_to_page(&self, page: u32) {
        self.apply(|h| h.with_page(page));
    }

    pub fn next_page(&self) {
        self.apply(|h| h.next_page());
    }

    pub fn previous_page(&self) {
        self.apply(|h| h.previous_page());
    }

    pub fn first_page(&self) {
        self.apply(|h| h.first_page());
    }

    pub fn last_page(&self) {
        self.apply(|h| h.last_page());
    }

    pub fn reset_filters(&self) {
        self.apply(|h| h.reset_filters());
    }

    /// Fetch with the current settings without mutating anything first.
    /// Used for the initial load.
    pub fn initialize_data(&self) {
        self.fetch();
    }

    fn fetch(&self) {
        let dispatch = self.dispatch.clone();
        let loading = self.loading.clone();
        loading.show();
        yew::platform::spawn_local(async move {
            let query = dispatch.get().hotels.to_query();
            let api_client = get_api_client();
            match api_client.list_hotels(&query).await {
                Ok(page) => {
                    dispatch.reduce_mut(|s| {
                        s.hotels =
                            s.hotels.apply_results(page.hotels, page.total_items);
                    });
                }
                Err(e) => {
                    // Failures all collapse to an empty catalog view; the
                    // detail stays in the console.
                    tracing::error!("failed to load hotels: {e}");
                    dispatch
                        .reduce_mut(|s| s.hotels = s.hotels.apply_fetch_error());
                }
            }
            loading.hide();
        });
    }
}

#[hook]
pub fn use_hotel_search() -> (Rc<State>, HotelSearch) {
    let (state, dispatch) = use_store::<State>();
    let loading = use_loading();
    (state, HotelSearch { dispatch, loading })
}
