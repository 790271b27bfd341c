pub mod routes;
pub mod seed;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::path::PathBuf;

use crate::store::HotelStore;

pub struct Config {
    pub ip: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Optional `db.json` file to serve instead of the generated catalog.
    pub hotels_db_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            ip: std::env::var("IP_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .collect(),
            hotels_db_path: std::env::var("HOTELS_DB_PATH")
                .ok()
                .map(PathBuf::from),
        }
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: HotelStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins. The total count header
        // must be exposed or browsers hide it from the fetch response.
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .expose_headers(["x-total-count"])
        } else {
            // Production: Only allow specified origins
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .expose_headers(["x-total-count"]);

            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .app_data(store.clone())
            .service(routes::api_services())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
