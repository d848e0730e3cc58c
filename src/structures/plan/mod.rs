mod route;
mod station;
mod stop;
mod ticket;

pub use route::*;
pub use station::*;
pub use stop::*;
pub use ticket::*;
