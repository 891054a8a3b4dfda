//! Grouped aggregation and link-bias statistics
//!
//! Group keys are opaque strings: no case folding happens here, so
//! "China" and "CHINA" are distinct groups and callers wanting a
//! combined total must sum the variants themselves.

use super::{matching, AnalysisError, AnalysisResult};
use crate::graph::{DiGraph, Field, Person};
use indexmap::IndexMap;

/// Vertex count per distinct value of `field`, keyed in
/// first-observation order.
pub fn grouped_counts(graph: &DiGraph<Person>, field: Field) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for person in graph.vertices() {
        *counts.entry(person.field(field).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Fraction of all vertices whose `field` equals `value`, in [0, 1].
///
/// Fails with [`AnalysisError::EmptyGraph`] when the graph is empty,
/// guarding the division.
pub fn group_fraction(graph: &DiGraph<Person>, field: Field, value: &str) -> AnalysisResult<f64> {
    let total = graph.num_vertices();
    if total == 0 {
        return Err(AnalysisError::EmptyGraph);
    }
    let in_group = matching(graph, field, value).len();
    Ok(in_group as f64 / total as f64)
}

/// Average, over the group's vertices that have at least one outgoing
/// arc, of the fraction of each vertex's arcs landing on other group
/// members.
///
/// Vertices with no outgoing arcs have no defined fraction and are
/// excluded from the average entirely. Fails with
/// [`AnalysisError::EmptyFilter`] when no vertex matches the filter,
/// and with [`AnalysisError::NoOutgoingArcs`] when every match has
/// out-degree zero.
pub fn avg_in_group_link_fraction(
    graph: &DiGraph<Person>,
    field: Field,
    value: &str,
) -> AnalysisResult<f64> {
    let members = matching(graph, field, value);
    if members.is_empty() {
        return Err(AnalysisError::EmptyFilter {
            field,
            value: value.to_string(),
        });
    }

    let mut sum = 0.0;
    let mut linked_members = 0usize;
    for person in members {
        let successors = graph.successors(person)?;
        if successors.is_empty() {
            continue;
        }
        let in_group = successors.iter().filter(|s| s.field(field) == value).count();
        sum += in_group as f64 / successors.len() as f64;
        linked_members += 1;
    }

    if linked_members == 0 {
        return Err(AnalysisError::NoOutgoingArcs {
            field,
            value: value.to_string(),
        });
    }
    Ok(sum / linked_members as f64)
}

/// Representation index for a group: the average in-group link
/// fraction divided by the group's population fraction.
///
/// A value above 1 means the group links to itself more than chance
/// would predict; below 1, less. This is a composition of
/// [`avg_in_group_link_fraction`] and [`group_fraction`], offered for
/// the reporting layer.
pub fn representation_index(
    graph: &DiGraph<Person>,
    field: Field,
    value: &str,
) -> AnalysisResult<f64> {
    let avg = avg_in_group_link_fraction(graph, field, value)?;
    let fraction = group_fraction(graph, field, value)?;
    Ok(avg / fraction)
}
