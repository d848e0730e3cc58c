use std::{env, process::ExitCode, str::FromStr, sync::Arc};

use metro_rs::{
    services::{
        build::build_graph,
        system::{MetroSystem, SystemSettings},
    },
    structures::Config,
    web::app::server,
};
use tracing::{Level, error};

#[tokio::main]
async fn main() -> ExitCode {
    let path = env::args().nth(1).unwrap_or_else(|| "config.yml".to_string());

    let config = match Config::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let level = config
        .log_level
        .as_deref()
        .and_then(|l| Level::from_str(l).ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let graph = match build_graph(&config.network) {
        Ok(g) => g,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let system = Arc::new(MetroSystem::new(
        graph,
        SystemSettings {
            accounts: config.accounts,
            admin: config.admin,
            default_routing: config.default_routing,
        },
    ));

    match server(system, &config.server.bind).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
