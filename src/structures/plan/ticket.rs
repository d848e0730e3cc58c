use async_graphql::SimpleObject;

use crate::{
    services::ticketing::Ticket,
    structures::{Account, Graph, MetroError, plan::PlanRoute},
};

#[derive(Debug, SimpleObject)]
pub struct PlanTicket {
    pub route: PlanRoute,
    pub fare: u64,
    pub balance: f64,
}

#[derive(Debug, SimpleObject)]
pub struct PlanAccount {
    pub username: String,
    pub balance: f64,
}

impl PlanTicket {
    pub fn from_ticket(g: &Graph, ticket: &Ticket) -> Result<PlanTicket, MetroError> {
        Ok(PlanTicket {
            route: PlanRoute::from_path(g, &ticket.route)?,
            fare: ticket.fare,
            balance: ticket.balance.as_amount(),
        })
    }
}

impl From<Account> for PlanAccount {
    fn from(account: Account) -> Self {
        PlanAccount {
            username: account.username,
            balance: account.balance.as_amount(),
        }
    }
}
