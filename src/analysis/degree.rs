//! Degree-extremum queries
//!
//! In- and out-degree maxima over the whole graph and over filtered
//! subgroups, plus threshold counts. Degrees count arc multiplicity.

use super::{matching, AnalysisError, AnalysisResult};
use crate::graph::{DiGraph, Field, Person};

/// Names of all vertices attaining the maximum out-degree.
///
/// Ties are fully enumerated, in insertion order. Fails with
/// [`AnalysisError::EmptyGraph`] when the graph has no vertices.
pub fn max_out_degree_names(graph: &DiGraph<Person>) -> AnalysisResult<Vec<String>> {
    let mut max_degree = 0;
    let mut names: Vec<String> = Vec::new();

    for person in graph.vertices() {
        let degree = graph.out_degree(person)?;
        if names.is_empty() || degree > max_degree {
            max_degree = degree;
            names.clear();
            names.push(person.name().to_string());
        } else if degree == max_degree {
            names.push(person.name().to_string());
        }
    }

    if names.is_empty() {
        return Err(AnalysisError::EmptyGraph);
    }
    Ok(names)
}

/// Number of vertices whose out-degree equals exactly `degree`.
pub fn count_with_out_degree(graph: &DiGraph<Person>, degree: usize) -> usize {
    graph
        .vertices()
        .filter(|p| graph.out_degree(p) == Ok(degree))
        .count()
}

/// Name of a vertex with maximum in-degree.
///
/// Ties resolve to the vertex inserted first, so the answer is stable
/// for a fixed load order. Fails with [`AnalysisError::EmptyGraph`]
/// when the graph has no vertices.
pub fn max_in_degree_name(graph: &DiGraph<Person>) -> AnalysisResult<String> {
    let mut best: Option<(&Person, usize)> = None;

    for person in graph.vertices() {
        let degree = graph.in_degree(person)?;
        match best {
            Some((_, max)) if degree <= max => {}
            _ => best = Some((person, degree)),
        }
    }

    best.map(|(p, _)| p.name().to_string())
        .ok_or(AnalysisError::EmptyGraph)
}

/// The maximum-in-degree vertex among those whose `field` equals
/// `value`.
///
/// Returns the full record so callers can report other attributes of
/// the match alongside its degree. Fails with
/// [`AnalysisError::EmptyFilter`] when nothing matches — never falls
/// back to an arbitrary vertex.
pub fn max_in_degree_in_group<'a>(
    graph: &'a DiGraph<Person>,
    field: Field,
    value: &str,
) -> AnalysisResult<&'a Person> {
    let mut best: Option<(&Person, usize)> = None;

    for person in matching(graph, field, value) {
        let degree = graph.in_degree(person)?;
        match best {
            Some((_, max)) if degree <= max => {}
            _ => best = Some((person, degree)),
        }
    }

    best.map(|(p, _)| p).ok_or_else(|| AnalysisError::EmptyFilter {
        field,
        value: value.to_string(),
    })
}

/// Number of vertices in the filtered subgroup whose in-degree strictly
/// exceeds `threshold`.
pub fn count_in_degree_above(
    graph: &DiGraph<Person>,
    field: Field,
    value: &str,
    threshold: usize,
) -> usize {
    matching(graph, field, value)
        .into_iter()
        .filter(|p| matches!(graph.in_degree(p), Ok(d) if d > threshold))
        .count()
}
