pub mod hotel_card;
pub mod hotel_filters;
pub mod hotel_sort;
pub mod layout;
pub mod loading_spinner;
pub mod pagination_controls;
pub mod star_rating;

pub use hotel_card::HotelCard;
pub use hotel_filters::HotelFiltersPanel;
pub use hotel_sort::HotelSortSelect;
pub use loading_spinner::LoadingSpinner;
pub use pagination_controls::PaginationControls;
pub use star_rating::StarRating;
