pub mod build;
pub mod system;
pub mod ticketing;
