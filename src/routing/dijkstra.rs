use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::structures::{Graph, MetroError, StationID};

/// Queue key: cumulative distance, then push order so ties pop FIFO.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
struct DijkstraPriority {
    distance: u64,
    sequence: u64,
}

/// Shortest-path tree rooted at a single source.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: StationID,
    distance: Vec<Option<u64>>,
    previous: Vec<Option<StationID>>,
}

impl ShortestPaths {
    pub fn source(&self) -> StationID {
        self.source
    }

    pub fn distance_to(&self, id: StationID) -> Option<u64> {
        self.distance.get(id.0).copied().flatten()
    }

    /// Walks the predecessor chain back to the source. `None` when the
    /// station was never reached.
    pub fn path_to(&self, id: StationID) -> Option<Vec<StationID>> {
        self.distance_to(id)?;

        let mut path = vec![id];
        let mut current = id;
        while let Some(prev) = self.previous[current.0] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

pub fn dijkstra(graph: &Graph, source: StationID) -> Result<ShortestPaths, MetroError> {
    graph.check(source)?;

    let n = graph.station_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut previous: Vec<Option<StationID>> = vec![None; n];
    let mut pq = PriorityQueue::<StationID, Reverse<DijkstraPriority>>::new();
    let mut sequence = 0;

    distance[source.0] = Some(0);
    pq.push(
        source,
        Reverse(DijkstraPriority {
            distance: 0,
            sequence,
        }),
    );

    while let Some((u, Reverse(p))) = pq.pop() {
        let dist_u = match distance[u.0] {
            Some(d) => d,
            None => continue,
        };
        if p.distance > dist_u {
            continue;
        }

        for edge in graph.edges(u) {
            let v = edge.destination;
            let candidate = dist_u + edge.weight as u64;

            if distance[v.0].is_none_or(|d| candidate < d) {
                distance[v.0] = Some(candidate);
                previous[v.0] = Some(u);
                sequence += 1;
                pq.push(
                    v,
                    Reverse(DijkstraPriority {
                        distance: candidate,
                        sequence,
                    }),
                );
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distance,
        previous,
    })
}

/// Minimum-fare path from `source` to `destination`, both included.
/// `shortest_path(s, s)` is `[s]`.
pub fn shortest_path(
    graph: &Graph,
    source: StationID,
    destination: StationID,
) -> Result<Vec<StationID>, MetroError> {
    graph.check(destination)?;
    dijkstra(graph, source)?
        .path_to(destination)
        .ok_or(MetroError::NoRoute)
}
