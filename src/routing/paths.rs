use crate::structures::{Graph, MetroError, PathLimits, StationID, Truncation};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimplePaths {
    pub paths: Vec<Vec<StationID>>,
    /// Limit that cut the search short, if any. A limit that stopped the
    /// search (`MaxPaths`, `Deadline`) wins over earlier `MaxHops` pruning.
    pub truncation: Option<Truncation>,
}

/// Scratch state for one enumeration. Nothing here outlives the call.
struct PathSearch<'a> {
    graph: &'a Graph,
    destination: StationID,
    limits: &'a PathLimits,
    visited: Vec<bool>,
    path: Vec<StationID>,
    found: Vec<Vec<StationID>>,
    truncation: Option<Truncation>,
    halted: bool,
}

impl PathSearch<'_> {
    fn truncate(&mut self, reason: Truncation) {
        match (self.truncation, reason) {
            (None, _) | (Some(Truncation::MaxHops), Truncation::MaxPaths | Truncation::Deadline) => {
                self.truncation = Some(reason)
            }
            _ => {}
        }
    }

    fn visit(&mut self, current: StationID) {
        if self.halted {
            return;
        }
        if self.limits.expired() {
            self.truncate(Truncation::Deadline);
            self.halted = true;
            return;
        }

        self.visited[current.0] = true;
        self.path.push(current);

        if current == self.destination {
            self.found.push(self.path.clone());
            if self.limits.max_paths.is_some_and(|max| self.found.len() >= max) {
                self.truncate(Truncation::MaxPaths);
                self.halted = true;
            }
        } else {
            let hops = self.path.len() - 1;
            let graph = self.graph;
            let edges = graph.edges(current);

            for (i, edge) in edges.iter().enumerate() {
                let next = edge.destination;
                // Parallel edges lead to the same node sequence.
                if self.visited[next.0] || edges[..i].iter().any(|e| e.destination == next) {
                    continue;
                }
                if self.limits.max_hops.is_some_and(|max| hops >= max) {
                    self.truncate(Truncation::MaxHops);
                    break;
                }
                self.visit(next);
                if self.halted {
                    break;
                }
            }
        }

        self.visited[current.0] = false;
        self.path.pop();
    }
}

/// Depth-first enumeration of every path from `source` to `destination`
/// that repeats no station, in edge-list order.
pub fn all_simple_paths(
    graph: &Graph,
    source: StationID,
    destination: StationID,
    limits: &PathLimits,
) -> Result<SimplePaths, MetroError> {
    graph.check(source)?;
    graph.check(destination)?;

    if limits.max_paths == Some(0) {
        return Ok(SimplePaths {
            paths: Vec::new(),
            truncation: Some(Truncation::MaxPaths),
        });
    }

    let mut search = PathSearch {
        graph,
        destination,
        limits,
        visited: vec![false; graph.station_count()],
        path: Vec::new(),
        found: Vec::new(),
        truncation: None,
        halted: false,
    };
    search.visit(source);

    Ok(SimplePaths {
        paths: search.found,
        truncation: search.truncation,
    })
}
