mod hotels;

pub use hotels::HotelStore;

use payloads::HotelId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),
}
