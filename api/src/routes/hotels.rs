use actix_web::{HttpRequest, HttpResponse, get, web};
use payloads::{HotelId, requests};

use crate::store::HotelStore;

use super::APIError;

#[tracing::instrument(skip_all)]
#[get("/hotels")]
pub async fn list_hotels(
    req: HttpRequest,
    store: web::Data<HotelStore>,
) -> Result<HttpResponse, APIError> {
    // `stars` may repeat, so the query string is decoded as raw pairs
    // rather than through `web::Query`'s map-shaped deserializer.
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(req.query_string())
            .map_err(|e| APIError::BadRequest(anyhow::Error::new(e)))?;
    let query = requests::ListHotels::from_query_pairs(pairs)
        .map_err(|e| APIError::BadRequest(e.into()))?;

    let (hotels, total_items) = store.list(&query);
    Ok(HttpResponse::Ok()
        .insert_header(("X-Total-Count", total_items.to_string()))
        .json(hotels))
}

#[tracing::instrument(skip_all)]
#[get("/hotels/{id}")]
pub async fn get_hotel(
    path: web::Path<HotelId>,
    store: web::Data<HotelStore>,
) -> Result<HttpResponse, APIError> {
    let hotel_id = path.into_inner();
    let hotel = store.get(&hotel_id)?;
    Ok(HttpResponse::Ok().json(hotel))
}
