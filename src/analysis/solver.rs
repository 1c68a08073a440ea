// SPDX-License-Identifier: BSD-3-Clause
//! Worklist fixpoint solver. Propagation is a monotone union over a finite
//! powerset lattice, so any processing order reaches the same fixpoint and
//! termination is guaranteed: node, edge, and points-to growth are all
//! bounded by the number of declarations.

use tracing::trace;

use crate::location::LocationId;

use super::graph::ConstraintGraph;

/// LIFO worklist with a per-node membership flag, so a node queued twice is
/// processed once per queueing.
struct Worklist {
    stack: Vec<LocationId>,
    queued: Vec<bool>,
}

impl Worklist {
    fn new(num_nodes: usize) -> Self {
        Worklist {
            stack: Vec::with_capacity(num_nodes),
            queued: vec![false; num_nodes],
        }
    }

    fn push(&mut self, v: LocationId) {
        if !self.queued[v.index()] {
            self.queued[v.index()] = true;
            self.stack.push(v);
        }
    }

    fn pop(&mut self) -> Option<LocationId> {
        let v = self.stack.pop()?;
        self.queued[v.index()] = false;
        Some(v)
    }
}

/// Solve the graph in place. For each worklist node `v`, its current targets
/// are wired into the deferred load/store constraints keyed by `v`, then
/// pts(v) flows along every outgoing subset edge. Re-running after
/// convergence performs zero mutations.
pub fn solve(graph: &mut ConstraintGraph) {
    let mut worklist = Worklist::new(graph.num_nodes());
    for v in graph.nodes() {
        if !graph.points_to(v).is_empty() {
            worklist.push(v);
        }
    }

    while let Some(v) = worklist.pop() {
        let targets: Vec<LocationId> = graph.points_to(v).iter().copied().collect();
        let loads: Vec<LocationId> = graph.load_sinks(v).iter().copied().collect();
        let stores: Vec<LocationId> = graph.store_sources(v).iter().copied().collect();

        for &a in &targets {
            // p = *v: everything a may point to must flow into p, so a gets
            // an edge to p and is requeued to push its existing facts.
            for &p in &loads {
                if graph.add_edge(a, p) {
                    trace!(from = a.index(), to = p.index(), "new load edge");
                    worklist.push(a);
                }
            }
            // *v = q: q's targets must flow into each location v points to.
            for &q in &stores {
                if graph.add_edge(q, a) {
                    trace!(from = q.index(), to = a.index(), "new store edge");
                    worklist.push(q);
                }
            }
        }

        // Outgoing edges are re-read here: the loop above may have created
        // edges leaving v itself.
        let successors: Vec<LocationId> = graph.successors(v).iter().copied().collect();
        for q in successors {
            if graph.merge_pts(q, v) {
                worklist.push(q);
            }
        }
    }
}
