pub mod use_fetch;
pub mod use_hotel;
pub mod use_hotel_search;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_hotel::use_hotel;
pub use use_hotel_search::{HotelSearch, use_hotel_search};
pub use use_title::use_title;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
