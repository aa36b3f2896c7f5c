//! Property-based tests for the capacity invariant and traversal completeness.
//!
//! Random graphs are built from vertex capacities and a list of edge attempts;
//! results are checked against a plain breadth-first reachability reference.

use std::collections::{HashSet, VecDeque};

use netlist_core::graph::traversal::{dfs_iterative, dfs_recursive_with};
use netlist_core::{Graph, VertexId};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const PROP_CASES: u32 = 256;

fn graph_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize)>)> {
    vec(0_usize..4, 1..12).prop_flat_map(|capacities| {
        let n = capacities.len();
        let attempts = vec((0..n, 0..n), 0..40);
        (proptest::strategy::Just(capacities), attempts)
    })
}

fn build(capacities: &[usize], attempts: &[(usize, usize)]) -> (Graph<usize>, Vec<VertexId>, usize) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = capacities
        .iter()
        .enumerate()
        .map(|(i, &cap)| graph.add_vertex(format!("v{i}"), i, cap))
        .collect();
    let rejected = attempts
        .iter()
        .filter(|&&(from, to)| graph.add_edge(ids[from], ids[to]).is_err())
        .count();
    (graph, ids, rejected)
}

fn reference_reachable(graph: &Graph<usize>, start: VertexId) -> HashSet<VertexId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for &next in graph.edges(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn capacity_is_never_exceeded((capacities, attempts) in graph_strategy()) {
        let (graph, ids, rejected) = build(&capacities, &attempts);

        for (&id, &cap) in ids.iter().zip(&capacities) {
            prop_assert!(graph[id].edges().len() <= cap);
        }
        prop_assert_eq!(graph.edge_count() + rejected, attempts.len());
    }

    #[test]
    fn both_traversals_visit_reachable_set_once((capacities, attempts) in graph_strategy()) {
        let (graph, ids, _) = build(&capacities, &attempts);
        let start = ids[0];
        let expected = reference_reachable(&graph, start);

        let mut iterative = Vec::new();
        dfs_iterative(&graph, start, |visit| iterative.push(visit.id));
        let mut recursive = Vec::new();
        dfs_recursive_with(&graph, start, &mut HashSet::new(), |visit| recursive.push(visit.id));

        prop_assert_eq!(iterative.len(), expected.len());
        prop_assert_eq!(recursive.len(), expected.len());
        prop_assert_eq!(iterative.iter().copied().collect::<HashSet<_>>(), expected.clone());
        prop_assert_eq!(recursive.iter().copied().collect::<HashSet<_>>(), expected);
        prop_assert_eq!(iterative[0], start);
        prop_assert_eq!(recursive[0], start);
    }

    #[test]
    fn simple_chain_orders_agree(len in 1_usize..30) {
        let mut graph = Graph::new();
        let ids: Vec<VertexId> = (0..len).map(|i| graph.add_vertex(format!("v{i}"), i, 1)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]).unwrap();
        }

        let mut iterative = Vec::new();
        dfs_iterative(&graph, ids[0], |visit| iterative.push(visit.id));
        let mut recursive = Vec::new();
        dfs_recursive_with(&graph, ids[0], &mut HashSet::new(), |visit| recursive.push(visit.id));

        prop_assert_eq!(&iterative, &ids);
        prop_assert_eq!(&recursive, &ids);
    }
}
