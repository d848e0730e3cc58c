use std::time::SystemTime;

use tracing::debug;

use crate::routing::{
    dijkstra::shortest_path,
    paths::{SimplePaths, all_simple_paths},
};
use crate::structures::{Graph, MetroError, PathLimits, StationID};

#[derive(Debug, Clone, Copy)]
pub struct RouteQuery {
    pub source: StationID,
    pub destination: StationID,
}

pub fn route(graph: &Graph, query: &RouteQuery) -> Result<Vec<StationID>, MetroError> {
    let before = SystemTime::now();
    let result = shortest_path(graph, query.source, query.destination);

    if let Ok(elapsed) = before.elapsed() {
        debug!(
            source = %query.source,
            destination = %query.destination,
            found = result.is_ok(),
            "shortest path ran in {}us",
            elapsed.as_micros()
        );
    }
    result
}

pub fn all_routes(
    graph: &Graph,
    query: &RouteQuery,
    limits: &PathLimits,
) -> Result<SimplePaths, MetroError> {
    let before = SystemTime::now();
    let result = all_simple_paths(graph, query.source, query.destination, limits)?;

    if let Ok(elapsed) = before.elapsed() {
        debug!(
            source = %query.source,
            destination = %query.destination,
            paths = result.paths.len(),
            truncation = ?result.truncation,
            "path enumeration ran in {}ms",
            elapsed.as_millis()
        );
    }
    Ok(result)
}
