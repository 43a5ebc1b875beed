pub mod disjoint;
pub mod graph;
pub mod matching;
pub mod verify;

pub use disjoint::DisjointSets;
pub use graph::{construction::GraphLoader, model::Graph, model::NodeId, serialization::GraphWriter};
pub use matching::{maximum_matching, Matcher, MatcherConfig, Matching};
