use crate::structures::StationID;

/// One direction of a connection. Every connection is stored as a pair of
/// edges, one on each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub destination: StationID,
    pub weight: u32,
}
