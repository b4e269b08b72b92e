pub mod edge_walk;

pub use edge_walk::{EdgeSet, GraphError};
