use async_graphql::{Enum, SimpleObject};

use crate::{
    routing::paths::SimplePaths,
    services::ticketing::path_fare,
    structures::{Graph, MetroError, StationID, Truncation, plan::PlanStop},
};

#[derive(Debug, Enum, Copy, Clone, PartialEq, Eq)]
pub enum PlanTruncation {
    MaxPaths,
    MaxHops,
    Deadline,
}

#[derive(Debug, SimpleObject, Clone)]
pub struct PlanRoute {
    pub stops: Vec<PlanStop>,
    pub hops: usize,
    pub fare: u64,
}

#[derive(Debug, SimpleObject)]
pub struct PlanRoutes {
    pub routes: Vec<PlanRoute>,
    pub truncation: Option<PlanTruncation>,
}

impl From<Truncation> for PlanTruncation {
    fn from(t: Truncation) -> Self {
        match t {
            Truncation::MaxPaths => PlanTruncation::MaxPaths,
            Truncation::MaxHops => PlanTruncation::MaxHops,
            Truncation::Deadline => PlanTruncation::Deadline,
        }
    }
}

impl PlanRoute {
    pub fn from_path(g: &Graph, path: &[StationID]) -> Result<PlanRoute, MetroError> {
        let stops = path
            .iter()
            .map(|&id| PlanStop::from_station_id(g, id).ok_or(MetroError::OutOfRange(id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlanRoute {
            stops,
            hops: path.len().saturating_sub(1),
            fare: path_fare(g, path)?,
        })
    }
}

impl PlanRoutes {
    pub fn from_paths(g: &Graph, result: &SimplePaths) -> Result<PlanRoutes, MetroError> {
        Ok(PlanRoutes {
            routes: result
                .paths
                .iter()
                .map(|p| PlanRoute::from_path(g, p))
                .collect::<Result<Vec<_>, _>>()?,
            truncation: result.truncation.map(PlanTruncation::from),
        })
    }
}
