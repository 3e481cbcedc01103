//! Build-order computation (Kahn's algorithm).
//!
//! Every node is in one of three states: waiting (in-degree > 0), queued, or
//! emitted. The ready queue is seeded with the in-degree-zero nodes in
//! ascending id order and is strictly FIFO, so among files that become ready
//! together the one discovered first is built first. The result is fully
//! determined by the discovery order of the input files.
//!
//! The outcome is all-or-nothing: if any node is left waiting once the queue
//! drains, the whole sort fails and no order is returned.

use std::collections::VecDeque;

use tracing::debug;

use super::graph::DependencyGraph;
use super::source_file::FileId;

/// The graph has at least one cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cyclic dependency among {} file(s)", .unsorted.len())]
pub struct CycleDetected {
    /// Files that never became ready, in ascending id order. This includes
    /// the cycle members and everything downstream of them.
    pub unsorted: Vec<FileId>,
}

/// Compute a build order for `graph`.
pub fn sequence(graph: &DependencyGraph) -> Result<Vec<FileId>, CycleDetected> {
    let mut in_degree = graph.in_degrees().to_vec();
    let mut ready: VecDeque<FileId> = graph
        .nodes()
        .filter(|id| in_degree[id.index()] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = ready.pop_front() {
        order.push(node);
        for &next in graph.dependents(node) {
            let degree = &mut in_degree[next.index()];
            *degree -= 1;
            if *degree == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() != graph.node_count() {
        let unsorted: Vec<FileId> = graph
            .nodes()
            .filter(|id| in_degree[id.index()] > 0)
            .collect();
        debug!(
            emitted = order.len(),
            stuck = unsorted.len(),
            "topological sort stalled"
        );
        return Err(CycleDetected { unsorted });
    }

    Ok(order)
}
