use std::fmt::Display;

use crate::structures::Edge;

#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationID,
    pub name: String,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationID(pub usize);

impl Display for StationID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return self.0.fmt(f);
    }
}
