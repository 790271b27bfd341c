use crate::Hotel;

/// One page of the hotel catalog.
///
/// On the wire the body is the bare hotel array; the total match count
/// travels out-of-band in the `X-Total-Count` response header. This struct
/// is the assembled, in-memory form.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPage {
    pub hotels: Vec<Hotel>,
    /// Total matches across all pages, before the page window is applied.
    pub total_items: u64,
}
