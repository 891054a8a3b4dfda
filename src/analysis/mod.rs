//! Analytical queries over the people graph
//!
//! Pure functions: every query takes a shared reference to a fully
//! loaded [`DiGraph<Person>`] (and, for name-based queries, the
//! name index) and returns plain values. Nothing here mutates the
//! graph, so independent queries may run concurrently from a
//! multi-threaded host.
//!
//! Failure cases are explicit: empty graphs, empty filter results,
//! unknown names, and unreachable targets are all surfaced as
//! [`AnalysisError`] variants, never defaulted away.

pub mod degree;
pub mod groups;
pub mod paths;

use crate::graph::{DiGraph, Field, GraphError, Person};
use thiserror::Error;

/// Errors that can occur during analysis queries
#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error("name {0:?} not found in dataset")]
    NameNotFound(String),

    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: String, to: String },

    #[error("no vertices match {field} = {value:?}")]
    EmptyFilter { field: Field, value: String },

    #[error("no vertex with {field} = {value:?} has outgoing arcs")]
    NoOutgoingArcs { field: Field, value: String },

    #[error("query requires a non-empty graph")]
    EmptyGraph,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

// Re-export the query functions
pub use degree::{
    count_in_degree_above, count_with_out_degree, max_in_degree_in_group,
    max_in_degree_name, max_out_degree_names,
};
pub use groups::{
    avg_in_group_link_fraction, group_fraction, grouped_counts, representation_index,
};
pub use paths::{farthest_names, shortest_path};

/// Vertices whose `field` equals `value`, in insertion order.
pub(crate) fn matching<'a>(
    graph: &'a DiGraph<Person>,
    field: Field,
    value: &str,
) -> Vec<&'a Person> {
    graph.vertices().filter(|p| p.field(field) == value).collect()
}
