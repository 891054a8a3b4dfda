//! Pantheon Graph
//!
//! An in-memory directed graph over the Pantheon dataset of notable
//! people and the hyperlinks between their Wikipedia biography pages,
//! with a pure analysis layer for degree extremums, shortest and
//! farthest paths, and group link-bias statistics.
//!
//! # Architecture
//!
//! - `graph`: the core engine — fixed-field [`Person`] records as
//!   vertex values inside a generic adjacency-list [`DiGraph`] with
//!   breadth-first shortest-path enumeration.
//! - `analysis`: pure query functions over a loaded graph and its name
//!   index. All failure cases (unknown name, empty filter, unreachable
//!   target, empty graph) are explicit errors.
//! - `dataset`: CSV loader producing the graph plus the name index.
//!
//! The graph is write-once: the loader populates it and everything
//! afterwards reads it through shared references, so independent
//! queries need no locking.
//!
//! ## Example Usage
//!
//! ```rust
//! use pantheon_graph::graph::{DiGraph, Field, Person};
//! use pantheon_graph::analysis;
//!
//! let ada = Person {
//!     id: "37021".into(),
//!     name: "Ada Lovelace".into(),
//!     birth_city: "London".into(),
//!     birth_state: "".into(),
//!     country: "United Kingdom".into(),
//!     gender: "Female".into(),
//!     occupation: "Computer Scientist".into(),
//!     industry: "Math".into(),
//!     domain: "SCIENCE & TECHNOLOGY".into(),
//! };
//! let babbage = Person { name: "Charles Babbage".into(), gender: "Male".into(), ..ada.clone() };
//!
//! let mut graph = DiGraph::new();
//! graph.add_vertex(ada.clone());
//! graph.add_vertex(babbage.clone());
//! graph.add_arc(&ada, &babbage).unwrap();
//!
//! let top = analysis::max_out_degree_names(&graph).unwrap();
//! assert_eq!(top, vec!["Ada Lovelace".to_string()]);
//!
//! let by_gender = analysis::grouped_counts(&graph, Field::Gender);
//! assert_eq!(by_gender["Female"], 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod dataset;
pub mod graph;

// Re-export main types for convenience
pub use analysis::{AnalysisError, AnalysisResult};
pub use dataset::{Dataset, LoadError, LoadResult};
pub use graph::{DiGraph, Field, GraphError, GraphResult, Person};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
