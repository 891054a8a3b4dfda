//! Name-resolved path queries
//!
//! Both queries resolve display names through the loader's name index,
//! run a breadth-first enumeration from the source, and report paths
//! as name sequences.

use super::{AnalysisError, AnalysisResult};
use crate::graph::{DiGraph, Person};
use std::collections::HashMap;

fn resolve<'a>(
    names: &'a HashMap<String, Person>,
    name: &str,
) -> AnalysisResult<&'a Person> {
    names
        .get(name)
        .ok_or_else(|| AnalysisError::NameNotFound(name.to_string()))
}

/// Shortest path between two named people, as a name sequence from
/// `from` to `to` inclusive.
///
/// Asking for a path from a person to themselves yields the singleton
/// `[from]`. If `to` is not reachable from `from`, fails with
/// [`AnalysisError::NoPath`] rather than degenerating to the self-path.
pub fn shortest_path(
    graph: &DiGraph<Person>,
    names: &HashMap<String, Person>,
    from: &str,
    to: &str,
) -> AnalysisResult<Vec<String>> {
    let source = resolve(names, from)?;
    let target = resolve(names, to)?;

    let paths = graph.breadth_first_paths(source)?;
    paths
        .iter()
        .find(|path| path.last().copied() == Some(target))
        .map(|path| path.iter().map(|p| p.name().to_string()).collect())
        .ok_or_else(|| AnalysisError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })
}

/// Names of all people at the maximum breadth-first distance from the
/// named source, ties fully enumerated.
///
/// When the source reaches nothing, the farthest person is the source
/// itself (the singleton path is the longest one produced).
pub fn farthest_names(
    graph: &DiGraph<Person>,
    names: &HashMap<String, Person>,
    from: &str,
) -> AnalysisResult<Vec<String>> {
    let source = resolve(names, from)?;
    let paths = graph.breadth_first_paths(source)?;

    let longest = paths.iter().map(|p| p.len()).max().unwrap_or(0);
    Ok(paths
        .iter()
        .filter(|p| p.len() == longest)
        .map(|p| p.last().map(|v| v.name().to_string()).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::{name_index, small_people_graph};

    #[test]
    fn test_shortest_path_direct_beats_indirect() {
        let g = small_people_graph();
        let names = name_index(&g);
        // Ada links to Marie directly; the two-hop route via Grace loses
        let path = shortest_path(&g, &names, "Ada Lovelace", "Marie Curie").unwrap();
        assert_eq!(path, vec!["Ada Lovelace", "Marie Curie"]);
    }

    #[test]
    fn test_shortest_path_multi_hop() {
        let g = small_people_graph();
        let names = name_index(&g);
        let path = shortest_path(&g, &names, "Ada Lovelace", "Alan Turing").unwrap();
        assert_eq!(path, vec!["Ada Lovelace", "Grace Hopper", "Alan Turing"]);
    }

    #[test]
    fn test_shortest_path_to_self_is_singleton() {
        let g = small_people_graph();
        let names = name_index(&g);
        let path = shortest_path(&g, &names, "Grace Hopper", "Grace Hopper").unwrap();
        assert_eq!(path, vec!["Grace Hopper"]);
    }

    #[test]
    fn test_shortest_path_unreachable_fails() {
        let g = small_people_graph();
        let names = name_index(&g);
        assert_eq!(
            shortest_path(&g, &names, "Ada Lovelace", "Frida Kahlo"),
            Err(AnalysisError::NoPath {
                from: "Ada Lovelace".to_string(),
                to: "Frida Kahlo".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_name_fails() {
        let g = small_people_graph();
        let names = name_index(&g);
        assert_eq!(
            shortest_path(&g, &names, "Ada Lovelace", "Nobody"),
            Err(AnalysisError::NameNotFound("Nobody".to_string()))
        );
        assert_eq!(
            farthest_names(&g, &names, "Nobody"),
            Err(AnalysisError::NameNotFound("Nobody".to_string()))
        );
    }

    #[test]
    fn test_farthest_names() {
        let g = small_people_graph();
        let names = name_index(&g);
        // Alan sits two hops from Ada, farther than anyone else
        assert_eq!(
            farthest_names(&g, &names, "Ada Lovelace").unwrap(),
            vec!["Alan Turing"]
        );
    }

    #[test]
    fn test_farthest_from_sink_is_self() {
        let g = small_people_graph();
        let names = name_index(&g);
        assert_eq!(
            farthest_names(&g, &names, "Frida Kahlo").unwrap(),
            vec!["Frida Kahlo"]
        );
    }
}
