use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use board_server::board::{BoardLayout, BoardSnapshot, DepartureFilter, refresh_snapshot};
use board_server::config::{AppConfig, load_stations};
use board_server::resrobot::{ResRobotClient, ResRobotConfig};
use board_server::web::{AppState, create_router};

/// Station list file, overridable via `STATIONS_FILE`.
const DEFAULT_STATIONS_FILE: &str = "stations.json";

/// Icon assets served under `/static`.
const STATIC_DIR: &str = "board-server/static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // All startup configuration is required; bail before the first cycle.
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    let stations_file =
        std::env::var("STATIONS_FILE").unwrap_or_else(|_| DEFAULT_STATIONS_FILE.to_string());
    let stations = load_stations(&stations_file).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });
    info!("Loaded {} station configs from {}", stations.len(), stations_file);

    let client_config = ResRobotConfig::new(&config.access_id, config.api_duration_mins)
        .with_base_url(&config.base_url);
    let client = ResRobotClient::new(client_config).expect("Failed to create ResRobot client");

    let snapshot = Arc::new(RwLock::new(BoardSnapshot::default()));

    // Refresh driver: first cycle immediately, then on every tick. Cycles
    // are awaited in sequence, so a slow cycle delays the next one instead
    // of overlapping it and snapshot writes never interleave.
    let driver_snapshot = snapshot.clone();
    let update_frequency = config.update_frequency;
    tokio::spawn(async move {
        let filter = DepartureFilter::default();
        let layout = BoardLayout::default();
        let mut interval = tokio::time::interval(update_frequency);
        loop {
            interval.tick().await;
            match refresh_snapshot(&client, &stations, &filter, &layout, &driver_snapshot).await {
                Ok(()) => info!("Board refreshed"),
                Err(e) => warn!("Fetch cycle failed, keeping previous board: {e}"),
            }
        }
    });

    let state = AppState::new(snapshot);
    let app = create_router(state, STATIC_DIR);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Departure board listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
