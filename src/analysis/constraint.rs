// SPDX-License-Identifier: BSD-3-Clause
//! Constraint collection: every assignment-like operation in a procedure is
//! resolved on both sides and classified into one of four canonical pointer
//! constraint forms. Operations that cannot be classified contribute nothing;
//! this silent dropping is the analysis' main source of incompleteness.

use std::fmt::Display;

use tracing::debug;

use crate::ir::Procedure;
use crate::location::{LocationId, LocationTable};

use super::resolve::resolve;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ConstraintKind {
    /// `a = b`
    Simple,
    /// `a = &b`
    Base,
    /// `a = *b`
    LoadRhs,
    /// `*a = b`
    StoreLhs,
}

impl ConstraintKind {
    /// Classify by the indirection depths of the value and address sides of
    /// a store. The four supported shapes are kept exactly as primitives;
    /// anything else is unsupported and dropped.
    fn classify(value_depth: u32, address_depth: u32) -> Option<Self> {
        match (value_depth, address_depth) {
            (1, 1) => Some(ConstraintKind::StoreLhs),
            (0, 0) => Some(ConstraintKind::Base),
            (1, 0) => Some(ConstraintKind::Simple),
            (2, 0) => Some(ConstraintKind::LoadRhs),
            _ => None,
        }
    }
}

/// One directional fact derived from one assignment. Immutable once built;
/// the solver only derives graph structure from these.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Constraint {
    pub lhs: LocationId,
    pub rhs: LocationId,
    pub kind: ConstraintKind,
}

impl Constraint {
    pub fn display<'a>(&'a self, locations: &'a LocationTable) -> DisplayConstraint<'a> {
        DisplayConstraint {
            constraint: self,
            locations,
        }
    }
}

pub struct DisplayConstraint<'a> {
    constraint: &'a Constraint,
    locations: &'a LocationTable,
}

impl Display for DisplayConstraint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lhs = self.locations.name(self.constraint.lhs);
        let rhs = self.locations.name(self.constraint.rhs);
        match self.constraint.kind {
            ConstraintKind::Simple => write!(f, "{} = {}", lhs, rhs),
            ConstraintKind::Base => write!(f, "{} = &{}", lhs, rhs),
            ConstraintKind::LoadRhs => write!(f, "{} = *{}", lhs, rhs),
            ConstraintKind::StoreLhs => write!(f, "*{} = {}", lhs, rhs),
        }
    }
}

/// The collector's output: the location table for the procedure and the
/// constraints derived from its assignments.
#[derive(Debug)]
pub struct Collection {
    pub locations: LocationTable,
    pub constraints: Vec<Constraint>,
}

/// Scan the procedure's assignments and classify each into a constraint.
/// Declarations are registered first so that every one is a graph node, even
/// if no assignment mentions it.
pub fn collect(procedure: &Procedure) -> Collection {
    let mut locations = LocationTable::new();
    for decl in &procedure.decls {
        locations.insert(decl);
    }

    let mut constraints = Vec::with_capacity(procedure.assigns.len());
    for assign in &procedure.assigns {
        let Some((rhs, value_depth)) = resolve(&locations, &assign.src) else {
            debug!(src = %assign.src, "dropped assignment: unresolved value operand");
            continue;
        };
        let Some((lhs, address_depth)) = resolve(&locations, &assign.dst) else {
            debug!(dst = %assign.dst, "dropped assignment: unresolved address operand");
            continue;
        };
        let Some(kind) = ConstraintKind::classify(value_depth, address_depth) else {
            debug!(
                value_depth,
                address_depth, "dropped assignment: unsupported indirection shape"
            );
            continue;
        };
        if locations.name(rhs).is_empty() {
            debug!("dropped assignment: value location has no name");
            continue;
        }
        constraints.push(Constraint { lhs, rhs, kind });
    }

    Collection {
        locations,
        constraints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Assign, Decl, Operand};

    fn decl(name: &str) -> Operand {
        Operand::Decl(name.to_string())
    }

    fn deref(op: Operand) -> Operand {
        Operand::Deref(Box::new(op))
    }

    fn procedure(assigns: Vec<Assign>) -> Procedure {
        Procedure {
            name: "f".to_string(),
            decls: vec![Decl::new("a"), Decl::new("b")],
            assigns,
        }
    }

    fn kind_of(collection: &Collection) -> ConstraintKind {
        assert_eq!(collection.constraints.len(), 1);
        collection.constraints[0].kind
    }

    #[test]
    fn depth_pairs_classify_to_the_four_forms() {
        // a = &b: both sides resolve at depth 0.
        let c = collect(&procedure(vec![Assign {
            dst: decl("a"),
            src: decl("b"),
        }]));
        assert_eq!(kind_of(&c), ConstraintKind::Base);

        // a = b: the value is read through one load.
        let c = collect(&procedure(vec![Assign {
            dst: decl("a"),
            src: deref(decl("b")),
        }]));
        assert_eq!(kind_of(&c), ConstraintKind::Simple);

        // *a = b
        let c = collect(&procedure(vec![Assign {
            dst: deref(decl("a")),
            src: deref(decl("b")),
        }]));
        assert_eq!(kind_of(&c), ConstraintKind::StoreLhs);

        // a = *b
        let c = collect(&procedure(vec![Assign {
            dst: decl("a"),
            src: deref(deref(decl("b"))),
        }]));
        assert_eq!(kind_of(&c), ConstraintKind::LoadRhs);
    }

    #[test]
    fn unsupported_shapes_are_dropped() {
        // Depth pair (2, 1) has no constraint form.
        let c = collect(&procedure(vec![Assign {
            dst: deref(decl("a")),
            src: deref(deref(decl("b"))),
        }]));
        assert!(c.constraints.is_empty());
    }

    #[test]
    fn unresolved_sides_are_dropped() {
        let c = collect(&procedure(vec![
            Assign {
                dst: decl("a"),
                src: Operand::Other,
            },
            Assign {
                dst: Operand::Other,
                src: decl("b"),
            },
        ]));
        assert!(c.constraints.is_empty());
    }

    #[test]
    fn unnamed_value_is_dropped() {
        let p = Procedure {
            name: "f".to_string(),
            decls: vec![Decl::new("a"), Decl::new("")],
            assigns: vec![Assign {
                dst: decl("a"),
                src: decl(""),
            }],
        };
        assert!(collect(&p).constraints.is_empty());
    }
}
