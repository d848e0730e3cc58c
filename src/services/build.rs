use std::time::SystemTime;

use tracing::{error, info};

use crate::{
    ingestion::{load_seed, load_seed_file, resolve_path},
    structures::{Graph, Ingestor, NetworkConfig},
};

pub fn build_graph(config: &NetworkConfig) -> Result<Graph, String> {
    let mut g = Graph::new();

    let mut ordered: Vec<&Ingestor> = config.inputs.iter().collect();
    ordered.sort_by_key(|i| i.phase());

    for input in ordered {
        info!("Loading '{}'...", input.label());
        let before = SystemTime::now();

        let result = match input {
            Ingestor::SeedYaml(c) => {
                let path = resolve_path(c).inspect_err(|e| {
                    error!("Failed to resolve '{}': {e}", input.label());
                })?;
                load_seed_file(&path, &mut g)
            }
            Ingestor::SeedInline(c) => load_seed(&c.network, &mut g),
        };

        match result {
            Ok(stats) => {
                if let Ok(elapsed) = before.elapsed() {
                    info!(
                        added = stats.stations_added,
                        reused = stats.stations_reused,
                        connections = stats.connections_added,
                        "Loaded '{}' in {}ms",
                        input.label(),
                        elapsed.as_millis()
                    );
                }
            }
            Err(e) => {
                return Err(format!("Failed to ingest '{}': {e}", input.label()));
            }
        }
    }

    info!(
        stations = g.station_count(),
        connections = g.connection_count(),
        "network ready"
    );
    Ok(g)
}
