use std::collections::HashSet;

use nefasto::{AntennaGraph, EdgeOrder, GraphConfig};
use proptest::prelude::*;

/// Small text maps over a four-frequency alphabet.
fn map_strategy(max_rows: usize, max_cols: usize) -> impl Strategy<Value = String> {
    let row = proptest::collection::vec(prop_oneof![Just('.'), Just('A'), Just('B'), Just('C')], 1..=max_cols)
        .prop_map(|cells| cells.into_iter().collect::<String>());
    proptest::collection::vec(row, 1..=max_rows).prop_map(|rows| rows.join("\n"))
}

fn order_strategy() -> impl Strategy<Value = EdgeOrder> {
    prop_oneof![Just(EdgeOrder::Sorted), Just(EdgeOrder::Prepend)]
}

proptest! {
    #[test]
    fn test_edges_link_exactly_same_symbol_pairs(map in map_strategy(6, 8), order in order_strategy()) {
        let graph = AntennaGraph::from_grid(&map, GraphConfig::default().with_edge_order(order)).unwrap();
        let n = graph.vertex_count();

        for i in 0..n {
            prop_assert!(!graph.has_edge(i, i), "self-loop on {}", i);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let same = graph.vertex(i).unwrap().symbol() == graph.vertex(j).unwrap().symbol();
                prop_assert_eq!(graph.has_edge(i, j), same, "edge {} -> {}", i, j);
                prop_assert_eq!(graph.has_edge(i, j), graph.has_edge(j, i));
            }
        }
    }

    #[test]
    fn test_traversals_visit_component_once(map in map_strategy(6, 8), order in order_strategy()) {
        let graph = AntennaGraph::from_grid(&map, GraphConfig::default().with_edge_order(order)).unwrap();
        let components = graph.connected_components();

        for start in 0..graph.vertex_count() {
            let expected: HashSet<usize> = (0..graph.vertex_count())
                .filter(|&v| components[v] == components[start])
                .collect();

            for visit in [graph.dfs(start).unwrap(), graph.bfs(start).unwrap()] {
                prop_assert_eq!(visit[0], start);
                let unique: HashSet<usize> = visit.iter().copied().collect();
                prop_assert_eq!(unique.len(), visit.len(), "vertex visited twice");
                prop_assert_eq!(&unique, &expected);
            }
        }
    }

    #[test]
    fn test_dfs_follows_adjacency_order(map in map_strategy(4, 6), order in order_strategy()) {
        // In a clique component the first vertex after the start is the
        // start's first neighbor under either policy.
        let graph = AntennaGraph::from_grid(&map, GraphConfig::default().with_edge_order(order)).unwrap();
        for start in 0..graph.vertex_count() {
            let nbrs = graph.neighbors(start).unwrap();
            let visit = graph.dfs(start).unwrap();
            let bfs = graph.bfs(start).unwrap();
            if let Some(&first) = nbrs.first() {
                prop_assert_eq!(visit[1], first);
                prop_assert_eq!(&bfs[1..=nbrs.len()], nbrs);
            } else {
                prop_assert_eq!(visit, vec![start]);
            }
        }
    }

    #[test]
    fn test_enumerated_paths_are_simple_and_connected(map in map_strategy(3, 3)) {
        let graph = AntennaGraph::from_grid(&map, GraphConfig::default()).unwrap();
        let n = graph.vertex_count();

        for origin in 0..n {
            for destination in 0..n {
                let mut seen = HashSet::new();
                for path in graph.all_paths(origin, destination).unwrap() {
                    prop_assert_eq!(path.first(), Some(&origin));
                    prop_assert_eq!(path.last(), Some(&destination));
                    let unique: HashSet<usize> = path.iter().copied().collect();
                    prop_assert_eq!(unique.len(), path.len());
                    for step in path.windows(2) {
                        prop_assert!(graph.has_edge(step[0], step[1]));
                    }
                    prop_assert!(seen.insert(path), "path enumerated twice");
                }
                if origin == destination {
                    prop_assert_eq!(seen.len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_close_pairs_respect_bound(map in map_strategy(5, 5), max in 0.0f64..6.0) {
        let graph = AntennaGraph::from_grid(&map, GraphConfig::default()).unwrap();
        let pairs = graph.close_pairs('A', 'B', max);
        for pair in &pairs {
            prop_assert!(pair.distance <= max);
            prop_assert_eq!(graph.vertex(pair.first).unwrap().symbol(), 'A');
            prop_assert_eq!(graph.vertex(pair.second).unwrap().symbol(), 'B');
        }

        let brute = graph
            .vertices()
            .iter()
            .filter(|a| a.symbol() == 'A')
            .flat_map(|a| graph.vertices().iter().filter(|b| b.symbol() == 'B').map(move |b| (a, b)))
            .filter(|(a, b)| a.position().distance(b.position()) <= max)
            .count();
        prop_assert_eq!(pairs.len(), brute);
    }
}
