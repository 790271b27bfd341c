use payloads::{
    ClientError, Hotel, HotelId,
    requests::{HotelSort, ListHotels, SortBy, SortDirection},
};
use rust_decimal::{Decimal, dec};
use test_helpers::{spawn_app, spawn_app_with};
use uuid::Uuid;

fn hotel(name: &str, stars: u8, rate: f64, price: Decimal) -> Hotel {
    Hotel {
        id: HotelId(Uuid::new_v4()),
        name: name.to_string(),
        image: "https://example.com/image.jpg".to_string(),
        address: "1 Test Street".to_string(),
        stars,
        rate,
        price,
        description: "A test hotel.".to_string(),
    }
}

fn small_catalog() -> Vec<Hotel> {
    vec![
        hotel("Grand Plaza", 5, 4.8, dec!(320)),
        hotel("plaza inn", 3, 3.1, dec!(95)),
        hotel("Seaside Retreat", 4, 4.2, dec!(210)),
        hotel("Budget Stop", 1, 2.0, dec!(55)),
        hotel("City Lights", 4, 3.9, dec!(180)),
    ]
}

#[tokio::test]
async fn lists_first_page_with_total_count() -> anyhow::Result<()> {
    let app = spawn_app().await; // 100-hotel sample catalog

    let query = ListHotels {
        page: 1,
        page_size: 9,
        ..Default::default()
    };
    let page = app.client.list_hotels(&query).await?;

    assert_eq!(page.hotels.len(), 9);
    assert_eq!(page.total_items, 100);
    Ok(())
}

#[tokio::test]
async fn paginates_to_the_last_partial_page() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // 100 hotels at 9 per page: page 12 holds the final hotel.
    let mut query = ListHotels {
        page: 12,
        page_size: 9,
        ..Default::default()
    };
    let page = app.client.list_hotels(&query).await?;
    assert_eq!(page.hotels.len(), 1);
    assert_eq!(page.total_items, 100);

    // Past the end: empty page, total still reported.
    query.page = 13;
    let page = app.client.list_hotels(&query).await?;
    assert!(page.hotels.is_empty());
    assert_eq!(page.total_items, 100);
    Ok(())
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let mut query = ListHotels::default();
    query.filters.name = "PLAZA".to_string();
    let page = app.client.list_hotels(&query).await?;

    assert_eq!(page.total_items, 2);
    assert!(
        page.hotels
            .iter()
            .all(|h| h.name.to_lowercase().contains("plaza"))
    );
    Ok(())
}

#[tokio::test]
async fn stars_filter_matches_any_selected_value() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let mut query = ListHotels::default();
    query.filters.selected_stars = vec![4, 5];
    let page = app.client.list_hotels(&query).await?;

    assert_eq!(page.total_items, 3);
    assert!(page.hotels.iter().all(|h| h.stars >= 4));
    Ok(())
}

#[tokio::test]
async fn rate_and_price_bounds_are_inclusive() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let mut query = ListHotels::default();
    query.filters.min_rate = 4.2;
    let page = app.client.list_hotels(&query).await?;
    assert_eq!(page.total_items, 2); // 4.8 and exactly 4.2

    let mut query = ListHotels::default();
    query.filters.max_price = dec!(95);
    let page = app.client.list_hotels(&query).await?;
    assert_eq!(page.total_items, 2); // 55 and exactly 95
    Ok(())
}

#[tokio::test]
async fn default_filters_do_not_constrain_results() -> anyhow::Result<()> {
    // A hotel above the default price ceiling proves the default is
    // omitted from the request rather than sent as price_lte=1000.
    let mut hotels = small_catalog();
    hotels.push(hotel("Penthouse Palace", 5, 5.0, dec!(1200)));
    let app = spawn_app_with(hotels).await;

    let page = app.client.list_hotels(&ListHotels::default()).await?;
    assert_eq!(page.total_items, 6);

    let mut query = ListHotels::default();
    query.filters.max_price = dec!(999);
    let page = app.client.list_hotels(&query).await?;
    assert_eq!(page.total_items, 5);
    Ok(())
}

#[tokio::test]
async fn sorts_by_price_descending() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let query = ListHotels {
        sort: HotelSort {
            sort_by: Some(SortBy::Price),
            direction: SortDirection::Desc,
        },
        ..Default::default()
    };
    let page = app.client.list_hotels(&query).await?;

    let prices: Vec<Decimal> =
        page.hotels.iter().map(|h| h.price).collect();
    let mut sorted = prices.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(prices, sorted);
    assert_eq!(page.hotels[0].name, "Grand Plaza");
    Ok(())
}

#[tokio::test]
async fn sorting_by_name_ignores_case() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let query = ListHotels {
        sort: HotelSort {
            sort_by: Some(SortBy::Name),
            direction: SortDirection::Asc,
        },
        ..Default::default()
    };
    let page = app.client.list_hotels(&query).await?;

    // "plaza inn" sorts between "Grand Plaza" and "Seaside Retreat"
    // rather than after every capitalized name.
    let names: Vec<&str> =
        page.hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Budget Stop",
            "City Lights",
            "Grand Plaza",
            "plaza inn",
            "Seaside Retreat",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn fetches_a_hotel_by_id() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let page = app.client.list_hotels(&ListHotels::default()).await?;
    let expected = page.hotels.first().unwrap();

    let fetched = app.client.get_hotel(&expected.id).await?;
    assert_eq!(&fetched, expected);
    Ok(())
}

#[tokio::test]
async fn unknown_hotel_id_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let result = app.client.get_hotel(&HotelId(Uuid::new_v4())).await;
    assert!(matches!(result, Err(ClientError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn malformed_query_parameters_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app_with(small_catalog()).await;

    let response = app
        .client
        .inner_client
        .get(format!(
            "http://127.0.0.1:{}/api/hotels?_page=one",
            app.port
        ))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    Ok(())
}
