pub mod element;
pub mod graph;

pub use element::{EdgeDescription, Element, Vertex, VertexDescription};
pub use graph::Graph;
