use std::{process::ExitCode, sync::Arc};

use routelens::{
    providers::{NominatimClient, OsrmClient, build_client},
    routing::routing::Navigator,
    structures::Config,
    web::app::server,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    let client = match build_client(&config.providers) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let routes = Arc::new(OsrmClient::new(
        client.clone(),
        &config.providers.routing_url,
    ));
    let places = Arc::new(NominatimClient::new(client, &config.providers.geocoding_url));
    info!(
        "Routing via {}, geocoding via {}",
        config.providers.routing_url, config.providers.geocoding_url
    );

    let navigator = Arc::new(Navigator::new(routes, places, config.view()));
    match server(navigator, config.server.bind.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
