use tracing::debug;

use crate::structures::{Edge, MetroError, Station, StationID};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            stations: Vec::new(),
        }
    }

    /// Appends a station with the next sequential id. Names are not required
    /// to be unique; lookups resolve to the first match.
    pub fn add_station(&mut self, name: impl Into<String>) -> StationID {
        let id = StationID(self.stations.len());
        let name = name.into();

        debug!(%id, name = %name, "adding station");
        self.stations.push(Station {
            id,
            name,
            edges: Vec::new(),
        });
        id
    }

    /// Adds a bidirectional connection as two edges, one on each endpoint.
    pub fn add_connection(
        &mut self,
        from: StationID,
        to: StationID,
        weight: u32,
    ) -> Result<(), MetroError> {
        self.check(from)?;
        self.check(to)?;

        self.stations[from.0].edges.push(Edge {
            destination: to,
            weight,
        });
        self.stations[to.0].edges.push(Edge {
            destination: from,
            weight,
        });
        Ok(())
    }

    pub fn find_station(&self, name: &str) -> Result<StationID, MetroError> {
        let needle = name.to_lowercase();

        self.stations
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
            .map(|s| s.id)
            .ok_or_else(|| MetroError::StationNotFound(name.to_string()))
    }

    pub fn get_station(&self, id: StationID) -> Option<&Station> {
        self.stations.get(id.0)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn edges(&self, id: StationID) -> &[Edge] {
        match self.stations.get(id.0) {
            Some(s) => &s.edges,
            None => &[],
        }
    }

    /// Cheapest direct edge from `from` to `to`, if any.
    pub fn hop_weight(&self, from: StationID, to: StationID) -> Option<u32> {
        self.edges(from)
            .iter()
            .filter(|e| e.destination == to)
            .map(|e| e.weight)
            .min()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of connections, each counted once.
    pub fn connection_count(&self) -> usize {
        self.stations.iter().map(|s| s.edges.len()).sum::<usize>() / 2
    }

    pub fn check(&self, id: StationID) -> Result<(), MetroError> {
        if id.0 < self.stations.len() {
            Ok(())
        } else {
            Err(MetroError::OutOfRange(id))
        }
    }
}
