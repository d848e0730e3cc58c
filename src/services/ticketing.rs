use tracing::{info, warn};

use crate::{
    routing::routing::{RouteQuery, route},
    structures::{Account, Graph, MetroError, Money, StationID},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub route: Vec<StationID>,
    pub fare: u64,
    pub balance: Money,
}

/// Sum of the cheapest edge weight for each consecutive pair of the path.
pub fn path_fare(graph: &Graph, path: &[StationID]) -> Result<u64, MetroError> {
    path.windows(2).try_fold(0u64, |acc, hop| {
        graph
            .hop_weight(hop[0], hop[1])
            .map(|w| acc + w as u64)
            .ok_or(MetroError::NoRoute)
    })
}

/// Shortest route between two stations and its fare.
pub fn fare_between(
    graph: &Graph,
    source: StationID,
    destination: StationID,
) -> Result<(Vec<StationID>, u64), MetroError> {
    let path = route(
        graph,
        &RouteQuery {
            source,
            destination,
        },
    )?;
    if path.len() < 2 {
        return Err(MetroError::NoRoute);
    }
    let fare = path_fare(graph, &path)?;
    Ok((path, fare))
}

pub fn calculate_fare(graph: &Graph, source: &str, destination: &str) -> Result<u64, MetroError> {
    let from = graph.find_station(source)?;
    let to = graph.find_station(destination)?;
    fare_between(graph, from, to).map(|(_, fare)| fare)
}

pub fn book_ticket(
    account: &mut Account,
    graph: &Graph,
    source: &str,
    destination: &str,
) -> Result<Ticket, MetroError> {
    let from = graph.find_station(source)?;
    let to = graph.find_station(destination)?;
    if from == to {
        return Err(MetroError::SameStation);
    }

    let (route, fare) = fare_between(graph, from, to)?;

    let Some(balance) = account.balance.checked_sub(Money::from_units(fare)) else {
        warn!(
            username = %account.username,
            fare,
            balance = %account.balance,
            "insufficient balance"
        );
        return Err(MetroError::InsufficientBalance {
            fare,
            balance: account.balance,
        });
    };

    account.balance = balance;
    info!(
        username = %account.username,
        source,
        destination,
        fare,
        balance = %account.balance,
        "ticket booked"
    );

    Ok(Ticket {
        route,
        fare,
        balance: account.balance,
    })
}

/// Credits `amount`, rounded to the nearest hundredth. Amounts that round
/// to zero are rejected like any other non-positive amount.
pub fn recharge_card(account: &mut Account, amount: f64) -> Result<Money, MetroError> {
    let balance = Money::from_amount(amount)
        .filter(|credit| credit.0 > 0)
        .and_then(|credit| account.balance.checked_add(credit));
    let Some(balance) = balance else {
        warn!(username = %account.username, amount, "invalid recharge amount");
        return Err(MetroError::InvalidAmount(amount));
    };

    account.balance = balance;
    info!(
        username = %account.username,
        amount,
        balance = %account.balance,
        "card recharged"
    );
    Ok(account.balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        let a = g.add_station("A");
        let b = g.add_station("B");
        let c = g.add_station("C");
        g.add_connection(a, b, 10).unwrap();
        g.add_connection(b, c, 5).unwrap();
        g.add_connection(a, c, 100).unwrap();
        g.add_station("Island");
        g
    }

    #[test]
    fn fare_follows_shortest_path() {
        let g = triangle();
        assert_eq!(calculate_fare(&g, "A", "C"), Ok(15));
        assert_eq!(calculate_fare(&g, "c", "a"), Ok(15));
        assert_eq!(calculate_fare(&g, "A", "B"), Ok(10));
    }

    #[test]
    fn fare_errors() {
        let g = triangle();
        assert_eq!(
            calculate_fare(&g, "A", "Nowhere"),
            Err(MetroError::StationNotFound("Nowhere".to_string()))
        );
        assert_eq!(calculate_fare(&g, "A", "Island"), Err(MetroError::NoRoute));
        assert_eq!(calculate_fare(&g, "B", "b"), Err(MetroError::NoRoute));
    }

    #[test]
    fn path_fare_of_arbitrary_paths() {
        let g = triangle();
        let ids = |v: &[usize]| v.iter().map(|&i| StationID(i)).collect::<Vec<_>>();

        assert_eq!(path_fare(&g, &ids(&[0, 2])), Ok(100));
        assert_eq!(path_fare(&g, &ids(&[0, 1, 2])), Ok(15));
        assert_eq!(path_fare(&g, &ids(&[1])), Ok(0));
        assert_eq!(path_fare(&g, &ids(&[0, 3])), Err(MetroError::NoRoute));
    }

    #[test]
    fn booking_debits_fare() {
        let g = triangle();
        let mut account = Account::new("angel", Money::from_units(50));

        let ticket = book_ticket(&mut account, &g, "A", "C").unwrap();
        assert_eq!(ticket.fare, 15);
        assert_eq!(ticket.balance, Money::from_units(35));
        assert_eq!(ticket.route, vec![StationID(0), StationID(1), StationID(2)]);
        assert_eq!(account.balance, Money::from_units(35));
    }

    #[test]
    fn booking_with_insufficient_balance_leaves_it_untouched() {
        let g = triangle();
        let mut account = Account::new("angel", Money::from_units(5));

        assert_eq!(
            book_ticket(&mut account, &g, "A", "C"),
            Err(MetroError::InsufficientBalance {
                fare: 15,
                balance: Money::from_units(5)
            })
        );
        assert_eq!(account.balance, Money::from_units(5));
    }

    #[test]
    fn booking_rejections() {
        let g = triangle();
        let mut account = Account::new("angel", Money::from_units(50));

        assert_eq!(
            book_ticket(&mut account, &g, "A", "a"),
            Err(MetroError::SameStation)
        );
        assert_eq!(
            book_ticket(&mut account, &g, "Atlantis", "A"),
            Err(MetroError::StationNotFound("Atlantis".to_string()))
        );
        assert_eq!(
            book_ticket(&mut account, &g, "A", "Island"),
            Err(MetroError::NoRoute)
        );
        assert_eq!(account.balance, Money::from_units(50));
    }

    #[test]
    fn exact_balance_is_enough() {
        let g = triangle();
        let mut account = Account::new("angel", Money::from_units(15));

        assert_eq!(book_ticket(&mut account, &g, "A", "C").unwrap().balance, Money(0));
    }

    #[test]
    fn recharge_rules() {
        let mut account = Account::new("angel", Money::from_units(50));

        assert_eq!(
            recharge_card(&mut account, 0.0),
            Err(MetroError::InvalidAmount(0.0))
        );
        assert_eq!(
            recharge_card(&mut account, -10.0),
            Err(MetroError::InvalidAmount(-10.0))
        );
        assert!(recharge_card(&mut account, f64::NAN).is_err());
        assert!(recharge_card(&mut account, f64::INFINITY).is_err());
        assert!(recharge_card(&mut account, 0.001).is_err());
        assert_eq!(account.balance, Money::from_units(50));

        assert_eq!(recharge_card(&mut account, 20.0), Ok(Money::from_units(70)));
        assert_eq!(account.balance, Money::from_units(70));
    }

    #[test]
    fn small_recharges_add_up_exactly() {
        let mut g = Graph::new();
        let a = g.add_station("A");
        let b = g.add_station("B");
        g.add_connection(a, b, 1).unwrap();
        let mut account = Account::new("angel", Money(0));

        for _ in 0..10 {
            recharge_card(&mut account, 0.1).unwrap();
        }
        assert_eq!(account.balance, Money::from_units(1));

        let ticket = book_ticket(&mut account, &g, "A", "B").unwrap();
        assert_eq!(ticket.fare, 1);
        assert_eq!(ticket.balance, Money(0));
    }
}
