// SPDX-License-Identifier: BSD-3-Clause
//! Textual reporting over an explicit sink. The core never opens or owns
//! files; the caller picks the sink and its truncate-vs-append semantics.

use std::io::{self, Write};

use crate::analysis::pointer::Output;

/// One line per location with a non-empty points-to set:
/// `file:line name ===> {a, b}`. Locations with empty sets are omitted; they
/// simply never received a fact.
pub fn report<W: Write>(output: &Output, sink: &mut W) -> io::Result<()> {
    for (v, targets) in output.facts() {
        write!(
            sink,
            "{} {} ===> {{",
            output.locations.source(v),
            output.locations.name(v)
        )?;
        for (i, t) in targets.iter().enumerate() {
            if i > 0 {
                write!(sink, ", ")?;
            }
            write!(sink, "{}", output.locations.name(*t))?;
        }
        writeln!(sink, "}}")?;
    }
    Ok(())
}

/// The collected constraints, one per line, in collection order.
pub fn dump_constraints<W: Write>(output: &Output, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "constraints:")?;
    for c in &output.constraints {
        writeln!(sink, "\t{}", c.display(&output.locations))?;
    }
    Ok(())
}

/// Full per-node points-to and edge listing, including nodes with no facts.
pub fn dump_graph<W: Write>(output: &Output, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "pts:")?;
    for v in output.graph.nodes() {
        write!(
            sink,
            "\t({} {}: ",
            output.locations.source(v),
            output.locations.name(v)
        )?;
        let mut targets: Vec<_> = output.graph.points_to(v).iter().copied().collect();
        targets.sort_unstable();
        for (i, t) in targets.iter().enumerate() {
            if i > 0 {
                write!(sink, ", ")?;
            }
            write!(sink, "{}", output.locations.name(*t))?;
        }
        writeln!(sink, ")")?;
    }
    writeln!(sink, "edges:")?;
    for v in output.graph.nodes() {
        let mut successors: Vec<_> = output.graph.successors(v).iter().copied().collect();
        successors.sort_unstable();
        for q in successors {
            writeln!(
                sink,
                "\t{} -> {}",
                output.locations.name(v),
                output.locations.name(q)
            )?;
        }
    }
    Ok(())
}
