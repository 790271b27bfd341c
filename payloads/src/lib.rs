pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct HotelId(pub Uuid);

impl std::str::FromStr for HotelId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A hotel in the catalog.
///
/// The state layers treat this as opaque beyond the fields they filter and
/// sort on; `price` is a money amount (per night), `rate` a 0.0-5.0 guest
/// rating with one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// URL of the cover image.
    pub image: String,
    pub address: String,
    /// Star classification, 1-5.
    pub stars: u8,
    pub rate: f64,
    pub price: Decimal,
    pub description: String,
}
