use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Generic fetch hook with global state caching support.
///
/// Takes three closures:
///
/// 1. `get_cached`: Retrieves cached data from global state
/// 2. `should_fetch`: Determines if a fetch is needed (checks cache status)
/// 3. `fetch_and_cache`: Performs the API call and updates global state
///
/// The hook automatically fetches on mount if `should_fetch` returns true,
/// and returns cached data via FetchState to distinguish between "not
/// fetched" and "fetched but empty".
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_hotel(hotel_id: HotelId) -> FetchHookReturn<Hotel> {
///     let (state, dispatch) = use_store::<State>();
///
///     use_fetch_with_cache(
///         hotel_id,
///         move || state.get_hotel(hotel_id).cloned(),
///         move || !state.has_hotel_loaded(hotel_id),
///         move || async move {
///             let api_client = get_api_client();
///             let hotel = api_client.get_hotel(&hotel_id).await
///                 .map_err(|e| e.to_string())?;
///             dispatch.reduce_mut(|s| s.set_hotel(hotel_id, hotel.clone()));
///             Ok(hotel)
///         }
///     )
/// }
/// ```
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_and_cache().await {
                    Ok(_) => {
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount if should_fetch returns true
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps.clone(), move |_| {
            if should_fetch() && !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // Treat the pre-fetch initial state as loading so consumers don't
    // flash an empty view before the mount effect runs.
    let effective_is_loading =
        *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading: effective_is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
