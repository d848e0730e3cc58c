use async_graphql::SimpleObject;

use crate::structures::{Graph, StationID};

#[derive(Debug, Clone, SimpleObject)]
pub struct PlanStop {
    pub id: usize,
    pub name: String,
}

impl PlanStop {
    pub fn from_station_id(g: &Graph, id: StationID) -> Option<PlanStop> {
        let station = g.get_station(id)?;

        Some(PlanStop {
            id: station.id.0,
            name: station.name.clone(),
        })
    }
}
