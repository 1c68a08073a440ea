// SPDX-License-Identifier: BSD-3-Clause
//! The per-procedure analysis entry point and its result type.

use tracing::trace_span;

use crate::ir::Procedure;
use crate::location::{LocationId, LocationTable};

use super::constraint::{collect, Constraint};
use super::graph::ConstraintGraph;
use super::solver::solve;

/// The solved analysis of one procedure. Queries are by declaration name;
/// result sets come back in declaration order, so output is deterministic.
#[derive(Debug)]
pub struct Output {
    pub procedure: String,
    pub locations: LocationTable,
    pub constraints: Vec<Constraint>,
    pub graph: ConstraintGraph,
}

impl Output {
    /// The may-point-to set of the named declaration. `None` if no such
    /// declaration exists.
    pub fn points_to(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.locations.lookup(name)?;
        let mut targets: Vec<LocationId> = self.graph.points_to(id).iter().copied().collect();
        targets.sort_unstable();
        Some(targets.into_iter().map(|t| self.locations.name(t)).collect())
    }

    /// Two declarations may alias if their points-to sets intersect.
    pub fn may_alias(&self, a: &str, b: &str) -> Option<bool> {
        let a = self.locations.lookup(a)?;
        let b = self.locations.lookup(b)?;
        Some(!self.graph.points_to(a).is_disjoint(self.graph.points_to(b)))
    }

    /// Every location with a non-empty points-to set, in declaration order,
    /// with its targets in declaration order.
    pub fn facts(&self) -> impl Iterator<Item = (LocationId, Vec<LocationId>)> + '_ {
        self.graph.nodes().filter_map(move |v| {
            let set = self.graph.points_to(v);
            if set.is_empty() {
                return None;
            }
            let mut targets: Vec<LocationId> = set.iter().copied().collect();
            targets.sort_unstable();
            Some((v, targets))
        })
    }
}

/// Run the full pipeline on one procedure: collect constraints, initialize
/// the constraint graph, solve to a fixpoint. Never fails; ill-formed input
/// fragments were already excluded during collection.
pub fn analysis(procedure: &Procedure) -> Output {
    let span = trace_span!("analysis", procedure = %procedure.name);
    let _guard = span.enter();

    let collection = collect(procedure);
    let mut graph = ConstraintGraph::new(collection.locations.len());
    graph.init(&collection.constraints);
    solve(&mut graph);

    Output {
        procedure: procedure.name.clone(),
        locations: collection.locations,
        constraints: collection.constraints,
        graph,
    }
}
