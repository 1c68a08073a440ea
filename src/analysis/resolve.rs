// SPDX-License-Identifier: BSD-3-Clause
//! Operand resolution: walking an operand backward through dereference hops
//! to the storage declaration it ultimately reads.

use tracing::debug;

use crate::ir::Operand;
use crate::location::{LocationId, LocationTable};

/// Dereference chains deeper than this are treated as unresolved. Valid IR
/// should never come close, but cyclic definition chains must not hang the
/// resolver.
pub const MAX_DEREF_DEPTH: u32 = 64;

/// Trace `operand` to its originating declaration, counting how many
/// dereference (load) hops separate them. `None` means unresolved: an
/// immediate, an opaque reinterpretation, an unknown name, or an unsupported
/// producing operation. Unresolved operands are dropped, not approximated.
pub fn resolve(table: &LocationTable, operand: &Operand) -> Option<(LocationId, u32)> {
    let mut current = operand;
    let mut depth = 0u32;
    loop {
        match current {
            Operand::Decl(name) => {
                return match table.lookup(name) {
                    Some(id) => Some((id, depth)),
                    None => {
                        debug!(%name, "operand names no declaration in this procedure");
                        None
                    }
                };
            }
            Operand::Deref(inner) => {
                depth += 1;
                if depth > MAX_DEREF_DEPTH {
                    debug!(depth, "dereference chain exceeds resolver depth cap");
                    return None;
                }
                current = inner;
            }
            // The original operand under a reinterpretation is opaque, so the
            // chain is dropped rather than guessed.
            Operand::Reinterpret(_) => return None,
            Operand::Other => return None,
        }
    }
}
