pub mod hotel_detail;
pub mod hotel_list;
pub mod not_found;

pub use hotel_detail::HotelDetailPage;
pub use hotel_list::HotelListPage;
pub use not_found::NotFoundPage;
