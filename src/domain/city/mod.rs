//! City aggregate
//!
//! Cities hotels belong to, and the undirected road graph between them.

pub mod graph;
pub mod model;
pub mod repository;

pub use graph::{nearby_within_radius, validate_graph, Adjacency, Neighbour};
pub use model::{City, CityEdge, NewCity};
pub use repository::CityRepository;
