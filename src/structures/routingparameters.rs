use std::time::{Duration, Instant};

/// Bounds on the simple-path enumeration, which is exponential on dense
/// graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLimits {
    pub max_paths: Option<usize>,
    pub max_hops: Option<usize>,
    pub deadline: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    MaxPaths,
    MaxHops,
    Deadline,
}

impl PathLimits {
    pub fn unbounded() -> PathLimits {
        PathLimits::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> PathLimits {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
