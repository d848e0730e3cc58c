use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::structures::{Graph, MetroError, StationID};

/// Stations and connections as listed in a seed file. Connections refer to
/// stations by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedNetwork {
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub connections: Vec<SeedConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConnection {
    pub from: String,
    pub to: String,
    pub fare: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub stations_added: usize,
    pub stations_reused: usize,
    pub connections_added: usize,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("connection refers to unknown station '{0}'")]
    UnknownStation(String),
    #[error(transparent)]
    Graph(#[from] MetroError),
}

pub fn load_seed_file(path: &str, g: &mut Graph) -> Result<SeedStats, SeedError> {
    let content = fs::read_to_string(path)?;
    let network: SeedNetwork = serde_yml::from_str(&content)?;
    load_seed(&network, g)
}

/// Adds the seed's stations, reusing any that already exist under the same
/// name, then its connections.
pub fn load_seed(network: &SeedNetwork, g: &mut Graph) -> Result<SeedStats, SeedError> {
    let mut stats = SeedStats::default();

    for name in &network.stations {
        match g.find_station(name) {
            Ok(id) => {
                debug!(%id, name = %name, "station already present");
                stats.stations_reused += 1;
            }
            Err(_) => {
                g.add_station(name.as_str());
                stats.stations_added += 1;
            }
        }
    }

    for connection in &network.connections {
        let from = resolve(g, &connection.from)?;
        let to = resolve(g, &connection.to)?;
        g.add_connection(from, to, connection.fare)?;
        stats.connections_added += 1;
    }

    Ok(stats)
}

fn resolve(g: &Graph, name: &str) -> Result<StationID, SeedError> {
    g.find_station(name)
        .map_err(|_| SeedError::UnknownStation(name.to_string()))
}
