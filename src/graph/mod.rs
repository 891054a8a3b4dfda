//! Core graph implementation
//!
//! This module implements the people graph data model:
//! - Immutable fixed-field person records as vertex values
//! - A generic adjacency-list directed graph with dual
//!   successor/predecessor indices
//! - Breadth-first shortest-path-tree enumeration

pub mod record;
pub mod store;
pub mod types;

// Re-export main types
pub use record::Person;
pub use store::{DiGraph, GraphError, GraphResult};
pub use types::Field;
