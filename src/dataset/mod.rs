//! Pantheon dataset loader
//!
//! Reads the nodes CSV into [`Person`] vertices and the edges CSV into
//! arcs, producing a populated graph plus a name index for the path
//! queries. Names are unique in the dataset, so the index maps display
//! name to record.
//!
//! Load order matters: every vertex is inserted before any arc, which
//! is what lets [`DiGraph::add_arc`] treat a missing endpoint as a
//! hard error.

use crate::graph::{DiGraph, GraphError, Person};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// One row of the edges CSV
#[derive(Debug, Deserialize)]
struct EdgeRow {
    from_name: String,
    to_name: String,
}

/// A fully loaded dataset: the link graph and the name index.
#[derive(Debug)]
pub struct Dataset {
    pub graph: DiGraph<Person>,
    pub by_name: HashMap<String, Person>,
}

/// Load the nodes and edges CSV files into a [`Dataset`].
///
/// Edge rows naming a person missing from the nodes file are skipped
/// with a warning; the subset edge files reference people outside the
/// subset, so a hard error would make them unloadable.
pub fn load(nodes_path: &Path, edges_path: &Path) -> LoadResult<Dataset> {
    info!("reading vertices from {}", nodes_path.display());
    let mut graph = DiGraph::new();
    let mut by_name = HashMap::new();

    let mut nodes = csv::Reader::from_path(nodes_path)?;
    for row in nodes.deserialize() {
        let person: Person = row?;
        by_name.insert(person.name().to_string(), person.clone());
        graph.add_vertex(person);
    }
    info!("read {} vertices", graph.num_vertices());

    info!("reading edges from {}", edges_path.display());
    let mut skipped = 0usize;
    let mut edges = csv::Reader::from_path(edges_path)?;
    for row in edges.deserialize() {
        let edge: EdgeRow = row?;
        match (by_name.get(&edge.from_name), by_name.get(&edge.to_name)) {
            (Some(from), Some(to)) => graph.add_arc(from, to)?,
            _ => {
                warn!(
                    "skipping edge {} -> {}: endpoint not in nodes file",
                    edge.from_name, edge.to_name
                );
                skipped += 1;
            }
        }
    }
    info!("read {} arcs, skipped {} edge rows", graph.num_arcs(), skipped);

    Ok(Dataset { graph, by_name })
}
