use payloads::{APIClient, HotelId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;

pub use state::State;

use components::{LoadingSpinner, layout::MainLayout};
use contexts::LoadingProvider;
use pages::{HotelDetailPage, HotelListPage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    HotelList,
    #[at("/hotels/:id")]
    HotelDetail { id: HotelId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::HotelList => html! { <HotelListPage /> },
        Route::HotelDetail { id } => html! { <HotelDetailPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <LoadingProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <LoadingSpinner />
            </LoadingProvider>
        </BrowserRouter>
    }
}
