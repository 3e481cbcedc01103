//! Property-based tests for modorder-graph using proptest.
//!
//! These check the ordering invariants over randomly generated graphs and
//! sources rather than hand-picked fixtures.

use proptest::prelude::*;

use crate::scanner::scan_references;
use crate::{DependencyGraph, FileId, Limits, Project, sequence};

/// Random DAG: `n` nodes, edges only from lower to higher index.
fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=24).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..=n * 3).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect::<Vec<_>>()
        });
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> DependencyGraph {
    let limits = Limits::default();
    let mut graph = DependencyGraph::with_nodes(n);
    for &(from, to) in edges {
        graph
            .add_edge(FileId::new(from), FileId::new(to), &limits)
            .expect("edge within limits");
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every node of an acyclic graph is placed exactly once, and
    /// every edge `D -> F` puts `D` before `F`.
    #[test]
    fn prop_dag_order_respects_every_edge((n, edges) in dag_strategy()) {
        let graph = build(n, &edges);
        let order = sequence(&graph).expect("graph is acyclic");

        prop_assert_eq!(order.len(), n);

        let mut position = vec![usize::MAX; n];
        for (i, id) in order.iter().enumerate() {
            prop_assert_eq!(position[id.index()], usize::MAX, "{} placed twice", id);
            position[id.index()] = i;
        }
        for (from, to) in edges {
            prop_assert!(position[from] < position[to], "#{} not before #{}", from, to);
        }
    }

    /// Property: sequencing is deterministic.
    #[test]
    fn prop_sequence_is_deterministic((n, edges) in dag_strategy()) {
        let graph = build(n, &edges);
        prop_assert_eq!(sequence(&graph), sequence(&graph));
    }

    /// Property: adding an edge twice changes nothing.
    #[test]
    fn prop_edges_are_idempotent((n, edges) in dag_strategy()) {
        let once = build(n, &edges);
        let doubled: Vec<_> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(n, &doubled);

        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.in_degrees(), twice.in_degrees());
        prop_assert_eq!(sequence(&once), sequence(&twice));
    }

    /// Property: closing a back edge along a DAG path makes ordering fail.
    #[test]
    fn prop_back_edge_is_a_cycle(n in 2usize..=16, back in any::<prop::sample::Index>()) {
        let mut chain: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let from = back.index(n - 1) + 1;
        chain.push((from, 0));

        let graph = build(n, &chain);
        let err = sequence(&graph).unwrap_err();
        prop_assert_eq!(err.unsorted.len(), n);
    }

    /// Property: a self-loop anywhere fails the whole order.
    #[test]
    fn prop_self_loop_is_a_cycle((n, edges) in dag_strategy(), node in any::<prop::sample::Index>()) {
        let mut graph = build(n, &edges);
        let looped = FileId::new(node.index(n));
        graph.add_edge(looped, looped, &Limits::default()).expect("edge within limits");

        let err = sequence(&graph).unwrap_err();
        prop_assert!(err.unsorted.contains(&looped));
    }

    /// Property: references come back lowercase, unique, in first-seen order,
    /// however the `use` lines are cased and spaced.
    #[test]
    fn prop_references_are_deduplicated(
        lines in prop::collection::vec(("[a-c]{1,2}", "[ \t]{1,3}", any::<bool>(), any::<bool>()), 0..=40)
    ) {
        let mut source = String::new();
        let mut expected: Vec<String> = Vec::new();
        for (name, gap, upper, only) in &lines {
            let keyword = if *upper { "USE" } else { "use" };
            let shown = if *upper { name.to_uppercase() } else { name.clone() };
            let suffix = if *only { ", only: x" } else { "" };
            source.push_str(&format!("  {keyword}{gap}{shown}{suffix}\n"));
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }

        let references = scan_references(&source, &Limits::default()).unwrap();
        prop_assert_eq!(&references, &expected);

        let rescanned = scan_references(&references
            .iter()
            .map(|name| format!("use {name}\n"))
            .collect::<String>(), &Limits::default()).unwrap();
        prop_assert_eq!(rescanned, references);
    }

    /// Property: a generated project with uses only to earlier-defined
    /// modules orders whatever the discovery order.
    #[test]
    fn prop_text_project_orders_definers_first(
        (n, edges) in dag_strategy(),
        seed in any::<u64>(),
    ) {
        let mut sources: Vec<(String, String)> = (0..n)
            .map(|i| {
                let mut text = format!("module m{i}\n");
                for &(from, to) in &edges {
                    if to == i {
                        text.push_str(&format!("  use m{from}\n"));
                    }
                }
                text.push_str(&format!("end module m{i}\n"));
                (format!("f{i}.f90"), text)
            })
            .collect();
        let rotate = (seed as usize) % n;
        sources.rotate_left(rotate);

        let project = Project::from_sources(sources, &Limits::default()).unwrap();
        let plan = project.plan().expect("generated project is acyclic");
        prop_assert_eq!(plan.len(), n);

        let position_of = |module: &str| {
            let id = project.registry().lookup(module).expect("module is defined");
            plan.position(id).expect("file is placed")
        };
        for (from, to) in edges {
            let (definer, user) = (format!("m{from}"), format!("m{to}"));
            prop_assert!(
                position_of(&definer) < position_of(&user),
                "{} not before {}",
                definer,
                user
            );
        }
    }
}
