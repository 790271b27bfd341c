use api::{
    Config, build,
    seed::sample_hotels,
    store::HotelStore,
    telemetry::{get_subscriber, init_subscriber},
};

/// Hotel catalog API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root.
///
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port (0 for an OS-assigned port)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or
///   comma-separated list for production)
/// - HOTELS_DB_PATH: Optional path to a `db.json` catalog file; without it
///   a generated 100-hotel sample catalog is served
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// HOTELS_DB_PATH=./db.json
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env();

    let store = match &config.hotels_db_path {
        Some(path) => HotelStore::from_db_file(path)
            .expect("Failed to load hotels database"),
        None => HotelStore::new(sample_hotels(100)),
    };
    tracing::info!("Serving a catalog of {} hotels", store.len());

    let server = build(&mut config, store)?;
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.await
}
