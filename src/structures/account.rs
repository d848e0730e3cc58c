use std::fmt::Display;

/// Amount of money in hundredths of a unit, so repeated recharges and debits
/// stay exact.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub u64);

impl Money {
    pub fn from_units(units: u64) -> Money {
        Money(units.saturating_mul(100))
    }

    /// Rounds to the nearest hundredth. `None` for negative, non-finite or
    /// unrepresentable amounts.
    pub fn from_amount(amount: f64) -> Option<Money> {
        let minor = (amount * 100.0).round();
        if !minor.is_finite() || minor < 0.0 || minor >= u64::MAX as f64 {
            return None;
        }
        Some(Money(minor as u64))
    }

    pub fn as_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub username: String,
    pub balance: Money,
}

impl Account {
    pub fn new(username: impl Into<String>, balance: Money) -> Account {
        Account {
            username: username.into(),
            balance,
        }
    }
}
