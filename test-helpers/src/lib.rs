use std::sync::Once;

use api::{Config, seed, store::HotelStore, telemetry};
use payloads::{APIClient, Hotel};

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
}

static TRACING: Once = Once::new();

/// Initialize tracing for tests, once per process. Set TEST_LOG=1 to see
/// api logs during test runs.
fn init_tracing() {
    TRACING.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber("debug".into());
            telemetry::init_subscriber(subscriber);
        }
    });
}

/// Start the api on an ephemeral port with the default 100-hotel sample
/// catalog.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(seed::sample_hotels(100)).await
}

/// Start the api on an ephemeral port with a caller-provided catalog.
pub async fn spawn_app_with(hotels: Vec<Hotel>) -> TestApp {
    init_tracing();

    let mut config = Config {
        ip: "127.0.0.1".to_string(),
        port: 0, // OS-assigned
        allowed_origins: vec!["*".to_string()],
        hotels_db_path: None,
    };
    let store = HotelStore::new(hotels);
    let server = api::build(&mut config, store)
        .expect("Failed to bind the api server");
    let port = config.port;
    tokio::spawn(server);
    tracing::debug!("api listening on port {port}");

    TestApp {
        port,
        client: APIClient {
            address: format!("http://127.0.0.1:{port}"),
            inner_client: reqwest::Client::new(),
        },
    }
}
