// SPDX-License-Identifier: BSD-3-Clause
//! Intra-procedural, flow-insensitive, inclusion-based points-to analysis
//! (Andersen's algorithm). For each pointer-typed storage declaration in a
//! procedure, computes an over-approximation of the set of declarations it
//! may point to.
//!
//! The pipeline per procedure: [`analysis::constraint::collect`] classifies
//! every assignment into one of four constraint forms,
//! [`analysis::graph::ConstraintGraph::init`] seeds the constraint graph,
//! [`analysis::solver::solve`] propagates to a fixpoint, and [`report`]
//! renders the resulting facts. [`analysis::pointer::analysis`] ties these
//! together.
//!
//! Known soundness gaps, by design: operands the resolver cannot trace to a
//! declaration (immediates, opaque casts, unsupported producing operations)
//! and indirection shapes outside the four supported forms contribute no
//! constraints at all.

pub mod analysis;
pub mod ir;
pub mod location;
pub mod report;

pub use analysis::constraint::{collect, Collection, Constraint, ConstraintKind};
pub use analysis::graph::ConstraintGraph;
pub use analysis::pointer;
pub use analysis::pointer::Output;
pub use analysis::solver::solve;
pub use ir::{Assign, Decl, Module, Operand, Procedure};
pub use location::{LocationId, LocationTable, SourceInfo};
