use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, Object, Result, Schema,
    http::GraphiQLSource,
};
use async_graphql_poem::GraphQL;
use poem::{Route, Server, get, handler, listener::TcpListener, web::Html};
use tracing::info;

use crate::{
    services::system::MetroSystem,
    structures::{
        MetroError, StationID,
        plan::{PlanAccount, PlanRoute, PlanRoutes, PlanStation, PlanTicket},
    },
};

pub type MetroSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(InputObject)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn ping(&self) -> &str {
        "pong"
    }

    async fn stations(&self, ctx: &Context<'_>) -> Result<Vec<PlanStation>> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        Ok(system
            .list_stations()
            .iter()
            .map(PlanStation::from_station)
            .collect())
    }

    async fn station(&self, ctx: &Context<'_>, name: String) -> Result<Option<PlanStation>> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        match system.find_station(&name) {
            Ok(id) => Ok(system.graph().get_station(id).map(PlanStation::from_station)),
            Err(MetroError::StationNotFound(_)) => Ok(None),
            Err(e) => Err(e.extend()),
        }
    }

    async fn shortest_path(
        &self,
        ctx: &Context<'_>,
        source_id: usize,
        destination_id: usize,
    ) -> Result<PlanRoute> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        let path = system
            .shortest_path(StationID(source_id), StationID(destination_id))
            .map_err(|e| e.extend())?;
        PlanRoute::from_path(&system.graph(), &path).map_err(|e| e.extend())
    }

    async fn all_paths(
        &self,
        ctx: &Context<'_>,
        source_id: usize,
        destination_id: usize,
        max_paths: Option<usize>,
        max_hops: Option<usize>,
    ) -> Result<PlanRoutes> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        let limits = system.path_limits(max_paths, max_hops);
        let result = system
            .all_paths(StationID(source_id), StationID(destination_id), &limits)
            .map_err(|e| e.extend())?;
        PlanRoutes::from_paths(&system.graph(), &result).map_err(|e| e.extend())
    }

    async fn fare(&self, ctx: &Context<'_>, source: String, destination: String) -> Result<u64> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        system
            .calculate_fare(&source, &destination)
            .map_err(|e| e.extend())
    }

    async fn balance(&self, ctx: &Context<'_>, username: String) -> Result<f64> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        system
            .balance(&username)
            .map(|balance| balance.as_amount())
            .map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn login(&self, ctx: &Context<'_>, username: String) -> Result<PlanAccount> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        Ok(system.open_account(&username).into())
    }

    async fn add_station(
        &self,
        ctx: &Context<'_>,
        admin: AdminCredentials,
        name: String,
    ) -> Result<usize> {
        let system = ctx.data::<Arc<MetroSystem>>()?;
        system
            .check_admin(&admin.username, &admin.password)
            .map_err(|e| e.extend())?;

        Ok(system.add_station(&name).0)
    }

    async fn add_connection(
        &self,
        ctx: &Context<'_>,
        admin: AdminCredentials,
        from_id: usize,
        to_id: usize,
        fare: u32,
    ) -> Result<bool> {
        let system = ctx.data::<Arc<MetroSystem>>()?;
        system
            .check_admin(&admin.username, &admin.password)
            .map_err(|e| e.extend())?;

        system
            .add_connection(StationID(from_id), StationID(to_id), fare)
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    async fn book_ticket(
        &self,
        ctx: &Context<'_>,
        username: String,
        source: String,
        destination: String,
    ) -> Result<PlanTicket> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        let ticket = system
            .book_ticket(&username, &source, &destination)
            .map_err(|e| e.extend())?;
        PlanTicket::from_ticket(&system.graph(), &ticket).map_err(|e| e.extend())
    }

    async fn recharge_card(
        &self,
        ctx: &Context<'_>,
        username: String,
        amount: f64,
    ) -> Result<f64> {
        let system = ctx.data::<Arc<MetroSystem>>()?;

        system
            .recharge_card(&username, amount)
            .map(|balance| balance.as_amount())
            .map_err(|e| e.extend())
    }
}

#[handler]
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn schema(system: Arc<MetroSystem>) -> MetroSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(system)
        .finish()
}

pub fn app(system: Arc<MetroSystem>) -> Route {
    Route::new()
        .at("/graphql", GraphQL::new(schema(system)))
        .at("/graphiql", get(graphiql))
}

pub async fn server(system: Arc<MetroSystem>, bind: &str) -> std::io::Result<()> {
    info!("Serving on {bind}");
    Server::new(TcpListener::bind(bind)).run(app(system)).await
}
