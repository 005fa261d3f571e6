//! All data types for the erdos library.

pub mod capabilities;
pub mod edge;
pub mod error;
pub mod id;
pub mod vertex;

pub use capabilities::{Capabilities, EdgeDirection};
pub use edge::{Edge, EdgeDescriptor};
pub use error::{GraphError, GraphResult};
pub use id::{EdgeId, IdGenerator, VertexId};
pub use vertex::Vertex;

/// Distance assigned to vertices no path reaches.
pub const INFINITY: f64 = f64::INFINITY;

/// Weight given to edges an algorithm synthesizes without a source edge.
pub const DEFAULT_WEIGHT: f64 = 0.0;
