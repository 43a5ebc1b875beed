pub mod construction;
pub mod model;
pub mod serialization;

pub use construction::GraphLoader;
pub use model::{Graph, NodeId};
pub use serialization::GraphWriter;
