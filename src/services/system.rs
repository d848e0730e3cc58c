use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard},
};

use tracing::info;

use crate::{
    routing::{
        paths::SimplePaths,
        routing::{RouteQuery, all_routes, route},
    },
    services::ticketing::{self, Ticket},
    structures::{
        Account, AccountsConfig, AdminConfig, Graph, MetroError, Money, PathLimits,
        RoutingDefaultConfig, Station, StationID,
    },
};

#[derive(Debug, Clone)]
pub struct SystemSettings {
    pub accounts: AccountsConfig,
    pub admin: AdminConfig,
    pub default_routing: RoutingDefaultConfig,
}

/// Shared metro state. The graph has a single writer at a time and any
/// number of concurrent route queries; each account has its own lock so
/// balance check and debit happen in one critical section.
pub struct MetroSystem {
    graph: RwLock<Graph>,
    accounts: RwLock<HashMap<String, Arc<Mutex<Account>>>>,
    settings: SystemSettings,
}

impl MetroSystem {
    pub fn new(graph: Graph, settings: SystemSettings) -> MetroSystem {
        MetroSystem {
            graph: RwLock::new(graph),
            accounts: RwLock::new(HashMap::new()),
            settings,
        }
    }

    /// Read access to the graph for rendering results.
    pub fn graph(&self) -> RwLockReadGuard<'_, Graph> {
        self.graph.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn check_admin(&self, username: &str, password: &str) -> Result<(), MetroError> {
        let admin = &self.settings.admin;
        if admin.username == username && admin.password == password {
            Ok(())
        } else {
            Err(MetroError::Unauthorized)
        }
    }

    pub fn add_station(&self, name: &str) -> StationID {
        let mut graph = self.graph.write().unwrap_or_else(PoisonError::into_inner);
        let id = graph.add_station(name);
        info!(%id, name, "station added");
        id
    }

    pub fn add_connection(
        &self,
        from: StationID,
        to: StationID,
        weight: u32,
    ) -> Result<(), MetroError> {
        let mut graph = self.graph.write().unwrap_or_else(PoisonError::into_inner);
        graph.add_connection(from, to, weight)?;
        info!(%from, %to, weight, "connection added");
        Ok(())
    }

    pub fn find_station(&self, name: &str) -> Result<StationID, MetroError> {
        self.graph().find_station(name)
    }

    pub fn list_stations(&self) -> Vec<Station> {
        self.graph().stations().to_vec()
    }

    pub fn shortest_path(
        &self,
        source: StationID,
        destination: StationID,
    ) -> Result<Vec<StationID>, MetroError> {
        route(
            &self.graph(),
            &RouteQuery {
                source,
                destination,
            },
        )
    }

    pub fn all_paths(
        &self,
        source: StationID,
        destination: StationID,
        limits: &PathLimits,
    ) -> Result<SimplePaths, MetroError> {
        all_routes(
            &self.graph(),
            &RouteQuery {
                source,
                destination,
            },
            limits,
        )
    }

    /// Limits from the routing defaults, with optional overrides.
    pub fn path_limits(&self, max_paths: Option<usize>, max_hops: Option<usize>) -> PathLimits {
        self.settings.default_routing.limits(max_paths, max_hops)
    }

    pub fn calculate_fare(&self, source: &str, destination: &str) -> Result<u64, MetroError> {
        ticketing::calculate_fare(&self.graph(), source, destination)
    }

    /// Returns the user's account, creating it with the starting balance on
    /// first login.
    pub fn open_account(&self, username: &str) -> Account {
        let account = {
            let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
            accounts
                .entry(username.to_string())
                .or_insert_with(|| {
                    info!(username, "account opened");
                    let balance =
                        Money::from_amount(self.settings.accounts.starting_balance)
                            .unwrap_or_default();
                    Arc::new(Mutex::new(Account::new(username, balance)))
                })
                .clone()
        };
        account.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn balance(&self, username: &str) -> Result<Money, MetroError> {
        let account = self.account(username)?;
        let balance = account.lock().unwrap_or_else(PoisonError::into_inner).balance;
        Ok(balance)
    }

    pub fn book_ticket(
        &self,
        username: &str,
        source: &str,
        destination: &str,
    ) -> Result<Ticket, MetroError> {
        let account = self.account(username)?;
        let mut account = account.lock().unwrap_or_else(PoisonError::into_inner);
        ticketing::book_ticket(&mut account, &self.graph(), source, destination)
    }

    pub fn recharge_card(&self, username: &str, amount: f64) -> Result<Money, MetroError> {
        let account = self.account(username)?;
        let mut account = account.lock().unwrap_or_else(PoisonError::into_inner);
        ticketing::recharge_card(&mut account, amount)
    }

    fn account(&self, username: &str) -> Result<Arc<Mutex<Account>>, MetroError> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
            .ok_or_else(|| MetroError::AccountNotFound(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn system(balance: f64) -> MetroSystem {
        let mut g = Graph::new();
        let a = g.add_station("A");
        let b = g.add_station("B");
        let c = g.add_station("C");
        g.add_connection(a, b, 10).unwrap();
        g.add_connection(b, c, 5).unwrap();
        g.add_connection(a, c, 100).unwrap();

        MetroSystem::new(
            g,
            SystemSettings {
                accounts: AccountsConfig {
                    starting_balance: balance,
                },
                admin: AdminConfig {
                    username: "admin".to_string(),
                    password: "secret".to_string(),
                },
                default_routing: RoutingDefaultConfig::default(),
            },
        )
    }

    #[test]
    fn admin_gate() {
        let s = system(50.0);
        assert_eq!(s.check_admin("admin", "secret"), Ok(()));
        assert_eq!(s.check_admin("admin", "password"), Err(MetroError::Unauthorized));
        assert_eq!(s.check_admin("root", "secret"), Err(MetroError::Unauthorized));
    }

    #[test]
    fn admin_mutations_are_visible_to_queries() {
        let s = system(50.0);
        let d = s.add_station("D");
        assert_eq!(d, StationID(3));
        assert_eq!(s.shortest_path(StationID(0), d), Err(MetroError::NoRoute));

        s.add_connection(StationID(2), d, 1).unwrap();
        assert_eq!(
            s.shortest_path(StationID(0), d).unwrap(),
            vec![StationID(0), StationID(1), StationID(2), d]
        );
        assert_eq!(s.calculate_fare("a", "d"), Ok(16));
        assert_eq!(s.find_station("d"), Ok(d));
        assert_eq!(s.list_stations().len(), 4);
        assert_eq!(
            s.add_connection(d, StationID(11), 1),
            Err(MetroError::OutOfRange(StationID(11)))
        );
    }

    #[test]
    fn accounts_open_once() {
        let s = system(50.0);
        assert_eq!(s.balance("angel"), Err(MetroError::AccountNotFound("angel".to_string())));

        assert_eq!(s.open_account("angel").balance, Money::from_units(50));
        s.recharge_card("angel", 20.0).unwrap();
        assert_eq!(s.open_account("angel").balance, Money::from_units(70));
        assert_eq!(s.balance("angel"), Ok(Money::from_units(70)));
    }

    #[test]
    fn booking_through_the_system() {
        let s = system(50.0);
        s.open_account("angel");

        let ticket = s.book_ticket("angel", "A", "C").unwrap();
        assert_eq!(ticket.fare, 15);
        assert_eq!(s.balance("angel"), Ok(Money::from_units(35)));
        assert_eq!(
            s.book_ticket("nobody", "A", "C"),
            Err(MetroError::AccountNotFound("nobody".to_string()))
        );
    }

    #[test]
    fn concurrent_bookings_never_overdraw() {
        let s = Arc::new(system(50.0));
        s.open_account("angel");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let s = Arc::clone(&s);
                thread::spawn(move || s.book_ticket("angel", "A", "C").is_ok())
            })
            .collect();
        let booked = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        // 50 / 15 leaves room for exactly three tickets.
        assert_eq!(booked, 3);
        assert_eq!(s.balance("angel"), Ok(Money::from_units(5)));
    }

    #[test]
    fn path_limits_use_defaults() {
        let s = system(50.0);
        let limits = s.path_limits(None, Some(1));
        assert_eq!(limits.max_paths, Some(1000));
        assert_eq!(limits.max_hops, Some(1));

        let result = s.all_paths(StationID(0), StationID(2), &limits).unwrap();
        assert_eq!(result.paths, vec![vec![StationID(0), StationID(2)]]);
    }
}
