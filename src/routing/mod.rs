pub mod dijkstra;
pub mod paths;
pub mod routing;
