//! In-memory graph storage: the graph facade, its engines and views.

pub mod builder;
pub mod engine;
pub mod matrix;
pub mod model;
pub mod views;

pub use builder::GraphBuilder;
pub use engine::{AdjIncidenceEngine, EdgeInsertion, GraphEngine, Rejection};
pub use matrix::{adjacency_matrix, incidence_matrix, VertexIndex};
pub use model::Graph;
pub use views::{EdgesMut, EdgesView, IncidenceView, NeighborsView, VerticesMut, VerticesView};
