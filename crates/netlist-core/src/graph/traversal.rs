//! Depth-first traversal algorithms over a [`Graph`] arena.
//!
//! Two strategies are provided and they do not visit in the same order:
//!
//! - [`dfs_recursive`] follows edges in insertion order using the call stack.
//! - [`dfs_iterative`] uses an explicit LIFO stack. Every outgoing edge is
//!   pushed without a visited check; duplicates are discarded when popped.
//!   Edges pushed last are popped first, and the netlist trace depends on
//!   this exact pop order.
//!
//! Both visit each vertex reachable from the start exactly once and
//! terminate on cyclic graphs. Traversals borrow the graph immutably, so the
//! graph cannot gain edges while one is running.

use std::collections::HashSet;
use std::convert::Infallible;
use std::ops::ControlFlow;

use super::store::Graph;
use super::vertex::{Vertex, VertexId};

/// A vertex reached during a traversal.
#[derive(Debug)]
pub struct Visit<'g, T> {
    /// Id of the visited vertex.
    pub id: VertexId,
    /// The visited vertex.
    pub vertex: &'g Vertex<T>,
    /// Whether the vertex has at least one outgoing edge.
    pub has_edges: bool,
}

impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

impl<'g, T> Visit<'g, T> {
    fn new(id: VertexId, vertex: &'g Vertex<T>) -> Self {
        Self {
            id,
            vertex,
            has_edges: vertex.has_edges(),
        }
    }
}

/// Recursive depth-first traversal from `start`.
///
/// Marks `start` in `visited`, then recurses into each not-yet-visited edge
/// target in insertion order. Pass a non-empty `visited` set to exclude
/// vertices from the walk. Recursion depth equals the longest simple path
/// explored, so very deep chains are better served by [`dfs_iterative`].
///
/// # Panics
///
/// Panics if `start` does not belong to `graph`.
pub fn dfs_recursive<T>(graph: &Graph<T>, start: VertexId, visited: &mut HashSet<VertexId>) {
    dfs_recursive_with(graph, start, visited, |_| {});
}

/// Recursive depth-first traversal that reports each vertex to `visit`.
///
/// `visit` runs when a vertex is marked, before its edges are explored.
pub fn dfs_recursive_with<T, F>(
    graph: &Graph<T>,
    start: VertexId,
    visited: &mut HashSet<VertexId>,
    mut visit: F,
) where
    F: FnMut(Visit<'_, T>),
{
    descend(graph, start, visited, &mut visit);
}

fn descend<T, F>(graph: &Graph<T>, current: VertexId, visited: &mut HashSet<VertexId>, visit: &mut F)
where
    F: FnMut(Visit<'_, T>),
{
    visited.insert(current);
    let vertex = &graph[current];
    visit(Visit::new(current, vertex));

    for &target in vertex.edges() {
        if !visited.contains(&target) {
            descend(graph, target, visited, visit);
        }
    }
}

/// Iterative depth-first traversal from `start`.
///
/// `callback` fires exactly once per reachable vertex, in stack-pop order,
/// after the vertex's edges have been pushed.
///
/// # Example
///
/// ```rust
/// use netlist_core::graph::{traversal::dfs_iterative, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex("root", (), 2);
/// let left = graph.add_vertex("left", (), 0);
/// let right = graph.add_vertex("right", (), 0);
/// graph.add_edge(root, left).unwrap();
/// graph.add_edge(root, right).unwrap();
///
/// let mut names = Vec::new();
/// dfs_iterative(&graph, root, |visit| names.push(visit.vertex.name().to_string()));
/// assert_eq!(names, ["root", "right", "left"]);
/// ```
///
/// # Panics
///
/// Panics if `start` does not belong to `graph`.
pub fn dfs_iterative<T, F>(graph: &Graph<T>, start: VertexId, mut callback: F)
where
    F: FnMut(Visit<'_, T>),
{
    let ControlFlow::Continue(()) = try_dfs_iterative(graph, start, |visit| {
        callback(visit);
        ControlFlow::<Infallible>::Continue(())
    });
}

/// Iterative depth-first traversal that can stop early.
///
/// Visits in the same order as [`dfs_iterative`]. Returning
/// `ControlFlow::Break` from `callback` ends the traversal and hands the break
/// value back to the caller.
///
/// # Panics
///
/// Panics if `start` does not belong to `graph`.
pub fn try_dfs_iterative<T, B, F>(graph: &Graph<T>, start: VertexId, mut callback: F) -> ControlFlow<B>
where
    F: FnMut(Visit<'_, T>) -> ControlFlow<B>,
{
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    let mut flow = ControlFlow::Continue(());

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        let vertex = &graph[current];
        stack.extend_from_slice(vertex.edges());
        flow = callback(Visit::new(current, vertex));
        if flow.is_break() {
            break;
        }
    }

    tracing::debug!(
        start = %start,
        visited = visited.len(),
        stopped_early = flow.is_break(),
        "Iterative traversal finished"
    );
    flow
}

/// Returns every vertex reachable from `start`, including `start`.
#[must_use]
pub fn reachable<T>(graph: &Graph<T>, start: VertexId) -> HashSet<VertexId> {
    let mut visited = HashSet::new();
    dfs_recursive(graph, start, &mut visited);
    visited
}
