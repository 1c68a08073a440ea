// SPDX-License-Identifier: BSD-3-Clause
//! The constraint graph: per-location points-to sets, mirrored subset edges,
//! and the deferred load/store constraint maps. All tables are vectors
//! indexed by [`LocationId`]; sets only ever grow.

use rustc_hash::FxHashSet;

use crate::location::LocationId;

use super::constraint::{Constraint, ConstraintKind};

#[derive(Clone, Debug, Default)]
pub struct ConstraintGraph {
    /// pts(v): the locations v may point to.
    pts: Vec<FxHashSet<LocationId>>,
    /// Subset edges `v -> q`: propagate pts(v) into pts(q). `out_edges` and
    /// `in_edges` are mirror images of each other.
    out_edges: Vec<FxHashSet<LocationId>>,
    in_edges: Vec<FxHashSet<LocationId>>,
    /// load_of[v]: destinations of `p = *v` constraints. These cannot become
    /// static edges up front; the propagation target depends on the current
    /// pts(v).
    load_of: Vec<FxHashSet<LocationId>>,
    /// store_into[v]: sources of `*v = q` constraints, same deferral.
    store_into: Vec<FxHashSet<LocationId>>,
}

impl ConstraintGraph {
    /// A graph over `num_locations` nodes, one per declaration. Every
    /// declaration is a node from the start, whether or not any constraint
    /// mentions it.
    pub fn new(num_locations: usize) -> Self {
        ConstraintGraph {
            pts: vec![FxHashSet::default(); num_locations],
            out_edges: vec![FxHashSet::default(); num_locations],
            in_edges: vec![FxHashSet::default(); num_locations],
            load_of: vec![FxHashSet::default(); num_locations],
            store_into: vec![FxHashSet::default(); num_locations],
        }
    }

    /// Partition the constraints: `Base` seeds points-to sets, `Simple`
    /// becomes a static edge, and the complex forms are registered for
    /// deferred handling keyed by the dereferenced side.
    pub fn init(&mut self, constraints: &[Constraint]) {
        for c in constraints {
            match c.kind {
                ConstraintKind::Simple => {
                    self.add_edge(c.rhs, c.lhs);
                }
                ConstraintKind::Base => {
                    self.add_to_pts(c.lhs, c.rhs);
                }
                ConstraintKind::LoadRhs => {
                    self.load_of[c.rhs.index()].insert(c.lhs);
                }
                ConstraintKind::StoreLhs => {
                    self.store_into[c.lhs.index()].insert(c.rhs);
                }
            }
        }
    }

    /// Add the edge `from -> to`, recording it in both directions. Returns
    /// whether the edge is new.
    pub fn add_edge(&mut self, from: LocationId, to: LocationId) -> bool {
        if !self.out_edges[from.index()].insert(to) {
            return false;
        }
        self.in_edges[to.index()].insert(from);
        true
    }

    pub fn add_to_pts(&mut self, loc: LocationId, target: LocationId) {
        self.pts[loc.index()].insert(target);
    }

    /// pts(dst) ∪= pts(src). Returns whether pts(dst) grew.
    pub fn merge_pts(&mut self, dst: LocationId, src: LocationId) -> bool {
        if dst == src {
            return false;
        }
        let before = self.pts[dst.index()].len();
        // Split the borrow: take the source set out, extend, put it back.
        let src_set = std::mem::take(&mut self.pts[src.index()]);
        self.pts[dst.index()].extend(src_set.iter().copied());
        self.pts[src.index()] = src_set;
        self.pts[dst.index()].len() != before
    }

    pub fn points_to(&self, loc: LocationId) -> &FxHashSet<LocationId> {
        &self.pts[loc.index()]
    }

    pub fn successors(&self, loc: LocationId) -> &FxHashSet<LocationId> {
        &self.out_edges[loc.index()]
    }

    pub fn predecessors(&self, loc: LocationId) -> &FxHashSet<LocationId> {
        &self.in_edges[loc.index()]
    }

    /// Destinations `p` of registered `p = *loc` constraints.
    pub fn load_sinks(&self, loc: LocationId) -> &FxHashSet<LocationId> {
        &self.load_of[loc.index()]
    }

    /// Sources `q` of registered `*loc = q` constraints.
    pub fn store_sources(&self, loc: LocationId) -> &FxHashSet<LocationId> {
        &self.store_into[loc.index()]
    }

    pub fn num_nodes(&self) -> usize {
        self.pts.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = LocationId> {
        (0..self.pts.len()).map(LocationId::from_index)
    }
}
