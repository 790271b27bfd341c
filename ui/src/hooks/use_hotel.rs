use payloads::{Hotel, HotelId};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to manage single hotel data with lazy loading and global state
/// caching. A hotel already seen by the detail view is served from the
/// cache without another request.
#[hook]
pub fn use_hotel(hotel_id: HotelId) -> FetchHookReturn<Hotel> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        hotel_id,
        move || get_cached_state.get_hotel(hotel_id).cloned(),
        move || !should_fetch_state.has_hotel_loaded(hotel_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let hotel = api_client
                    .get_hotel(&hotel_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_hotel(hotel_id, hotel.clone());
                });
                Ok(hotel)
            }
        },
    )
}
