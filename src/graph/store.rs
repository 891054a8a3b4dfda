//! In-memory adjacency-list directed graph
//!
//! The graph is generic over its vertex value and stores vertices in an
//! arena: each vertex gets a dense slot in insertion order, with a hash
//! index from value to slot. Outgoing and incoming adjacency are kept
//! as dual slot lists, so successor and predecessor lookups are both
//! O(degree) without scanning the arc set.
//!
//! Lifecycle: constructed empty, populated once by the loader, then
//! read-only for the whole analysis phase. There are no deletion
//! operations.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("vertex not found in graph")]
    VertexNotFound,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Adjacency-list directed graph over generic vertex values.
///
/// Iteration over vertices follows insertion order, so every query
/// built on top of it is deterministic for a fixed load order. Arcs
/// are kept as a multiset: adding the same arc twice yields parallel
/// arcs, and degrees count multiplicity. Self-loops are allowed.
#[derive(Debug, Clone)]
pub struct DiGraph<V> {
    /// Vertex arena, in insertion order
    vertices: Vec<V>,

    /// Vertex value -> arena slot
    index: FxHashMap<V, usize>,

    /// Outgoing adjacency: slot -> target slots, in arc insertion order
    outgoing: Vec<Vec<usize>>,

    /// Incoming adjacency: slot -> source slots
    incoming: Vec<Vec<usize>>,

    /// Total number of arcs
    arc_count: usize,
}

impl<V: Eq + Hash + Clone> DiGraph<V> {
    /// Create a new empty graph
    pub fn new() -> Self {
        DiGraph {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            arc_count: 0,
        }
    }

    /// Insert a vertex. A no-op if the vertex is already present.
    ///
    /// Returns `true` if the vertex was newly inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        let slot = self.vertices.len();
        self.index.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        true
    }

    /// Record a directed arc between two already-inserted vertices.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint was
    /// never inserted; arcs never register vertices implicitly, so a
    /// mis-ordered load surfaces here instead of corrupting the graph.
    pub fn add_arc(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let from_slot = self.slot(from)?;
        let to_slot = self.slot(to)?;
        self.outgoing[from_slot].push(to_slot);
        self.incoming[to_slot].push(from_slot);
        self.arc_count += 1;
        Ok(())
    }

    /// Check whether a vertex is present
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Vertices directly reachable via one outgoing arc, in arc
    /// insertion order. Parallel arcs yield repeated entries.
    pub fn successors(&self, vertex: &V) -> GraphResult<Vec<&V>> {
        let slot = self.slot(vertex)?;
        Ok(self.outgoing[slot].iter().map(|&t| &self.vertices[t]).collect())
    }

    /// Vertices with an arc directed into the given vertex
    pub fn predecessors(&self, vertex: &V) -> GraphResult<Vec<&V>> {
        let slot = self.slot(vertex)?;
        Ok(self.incoming[slot].iter().map(|&s| &self.vertices[s]).collect())
    }

    /// Number of outgoing arcs
    pub fn out_degree(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.outgoing[self.slot(vertex)?].len())
    }

    /// Number of incoming arcs
    pub fn in_degree(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.incoming[self.slot(vertex)?].len())
    }

    /// Total vertex count
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Total arc count, counting parallel arcs
    pub fn num_arcs(&self) -> usize {
        self.arc_count
    }

    /// Breadth-first enumeration of shortest paths from a source.
    ///
    /// Produces exactly one minimal-length simple path per vertex
    /// reachable from `source`, in discovery order. The first path is
    /// always the singleton `[source]`; every path starts at `source`
    /// and ends at the vertex it belongs to. Ties between equal-length
    /// paths resolve to the first-discovered one, which is fixed by
    /// FIFO traversal over successors in arc insertion order.
    ///
    /// Unreachable vertices contribute no path.
    pub fn breadth_first_paths(&self, source: &V) -> GraphResult<Vec<Vec<&V>>> {
        let source_slot = self.slot(source)?;

        // parent[slot] = Some(predecessor) once discovered; the source
        // is its own root with no parent.
        let mut parent: FxHashMap<usize, Option<usize>> = FxHashMap::default();
        let mut discovered = Vec::new();
        let mut queue = VecDeque::new();

        parent.insert(source_slot, None);
        discovered.push(source_slot);
        queue.push_back(source_slot);

        while let Some(current) = queue.pop_front() {
            for &next in &self.outgoing[current] {
                if !parent.contains_key(&next) {
                    parent.insert(next, Some(current));
                    discovered.push(next);
                    queue.push_back(next);
                }
            }
        }

        // Reconstruct one path per reached vertex by walking parents
        // back to the source.
        let mut paths = Vec::with_capacity(discovered.len());
        for &slot in &discovered {
            let mut path = Vec::new();
            let mut current = Some(slot);
            while let Some(s) = current {
                path.push(&self.vertices[s]);
                current = parent[&s];
            }
            path.reverse();
            paths.push(path);
        }
        Ok(paths)
    }

    fn slot(&self, vertex: &V) -> GraphResult<usize> {
        self.index.get(vertex).copied().ok_or(GraphError::VertexNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DiGraph<&'static str> {
        // A -> B, A -> C, B -> C
        let mut g = DiGraph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_vertex("C");
        g.add_arc(&"A", &"B").unwrap();
        g.add_arc(&"A", &"C").unwrap();
        g.add_arc(&"B", &"C").unwrap();
        g
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = DiGraph::new();
        assert!(g.add_vertex("A"));
        assert!(!g.add_vertex("A"));
        assert_eq!(g.num_vertices(), 1);
    }

    #[test]
    fn test_degrees() {
        let g = triangle();
        assert_eq!(g.out_degree(&"A").unwrap(), 2);
        assert_eq!(g.out_degree(&"B").unwrap(), 1);
        assert_eq!(g.out_degree(&"C").unwrap(), 0);
        assert_eq!(g.in_degree(&"A").unwrap(), 0);
        assert_eq!(g.in_degree(&"B").unwrap(), 1);
        assert_eq!(g.in_degree(&"C").unwrap(), 2);
    }

    #[test]
    fn test_degree_sums_equal_arc_count() {
        let g = triangle();
        let out_sum: usize = g.vertices().map(|v| g.out_degree(v).unwrap()).sum();
        let in_sum: usize = g.vertices().map(|v| g.in_degree(v).unwrap()).sum();
        assert_eq!(out_sum, g.num_arcs());
        assert_eq!(in_sum, g.num_arcs());
    }

    #[test]
    fn test_successors_predecessors() {
        let g = triangle();
        assert_eq!(g.successors(&"A").unwrap(), vec![&"B", &"C"]);
        assert_eq!(g.predecessors(&"C").unwrap(), vec![&"A", &"B"]);
        assert!(g.successors(&"C").unwrap().is_empty());
    }

    #[test]
    fn test_missing_vertex_fails() {
        let mut g = triangle();
        assert_eq!(g.successors(&"Z"), Err(GraphError::VertexNotFound));
        assert_eq!(g.add_arc(&"A", &"Z"), Err(GraphError::VertexNotFound));
        assert_eq!(g.add_arc(&"Z", &"A"), Err(GraphError::VertexNotFound));
        // A failed add_arc must not record a partial arc
        assert_eq!(g.num_arcs(), 3);
    }

    #[test]
    fn test_parallel_arcs_count_multiplicity() {
        let mut g = DiGraph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_arc(&"A", &"B").unwrap();
        g.add_arc(&"A", &"B").unwrap();
        assert_eq!(g.out_degree(&"A").unwrap(), 2);
        assert_eq!(g.in_degree(&"B").unwrap(), 2);
        assert_eq!(g.num_arcs(), 2);
    }

    #[test]
    fn test_insertion_order_iteration() {
        let g = triangle();
        let order: Vec<_> = g.vertices().copied().collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_bfs_paths_shortest_per_vertex() {
        let g = triangle();
        let paths = g.breadth_first_paths(&"A").unwrap();

        // One path per reachable vertex; source first as a singleton.
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], vec![&"A"]);
        for path in &paths {
            assert_eq!(path[0], &"A");
        }

        // C is directly reachable, so its path is [A, C], not [A, B, C].
        let to_c = paths.iter().find(|p| *p.last().unwrap() == &"C").unwrap();
        assert_eq!(*to_c, vec![&"A", &"C"]);
    }

    #[test]
    fn test_bfs_excludes_unreachable() {
        let mut g = triangle();
        g.add_vertex("D");
        let paths = g.breadth_first_paths(&"A").unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| *p.last().unwrap() != &"D"));

        // From the sink only the singleton comes back.
        let from_c = g.breadth_first_paths(&"C").unwrap();
        assert_eq!(from_c, vec![vec![&"C"]]);
    }

    #[test]
    fn test_bfs_missing_source_fails() {
        let g = triangle();
        assert_eq!(g.breadth_first_paths(&"Z"), Err(GraphError::VertexNotFound));
    }
}
