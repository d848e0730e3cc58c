use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::{
    services::system::MetroSystem,
    structures::{Station, StationID, plan::PlanStop},
};

#[derive(Debug, SimpleObject)]
pub struct PlanStation {
    pub id: usize,
    pub name: String,
    pub connections: Vec<PlanConnection>,
}

#[derive(Debug, SimpleObject, Clone, Copy)]
#[graphql(complex)]
pub struct PlanConnection {
    pub fare: u32,

    #[graphql(skip)]
    pub to: StationID,
}

#[ComplexObject]
impl PlanConnection {
    pub async fn destination(&self, ctx: &Context<'_>) -> Result<Option<PlanStop>> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        Ok(PlanStop::from_station_id(&system.graph(), self.to))
    }
}

impl PlanStation {
    pub fn from_station(station: &Station) -> PlanStation {
        PlanStation {
            id: station.id.0,
            name: station.name.clone(),
            connections: station
                .edges
                .iter()
                .map(|e| PlanConnection {
                    fare: e.weight,
                    to: e.destination,
                })
                .collect(),
        }
    }
}
