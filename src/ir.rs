// SPDX-License-Identifier: BSD-3-Clause
//! Representation of a procedure's IR that is amenable to analysis. The
//! frontend that extracts instructions from compiled code is not part of this
//! crate; it hands us, per procedure, the pointer-typed storage declarations
//! and the assignment operations, with every operand already classified into
//! one of the shapes in [`Operand`]. The analysis never inspects anything
//! finer-grained than these variants.

use std::collections::HashSet;
use std::fmt::Display;

mod error;
pub use error::*;

/// An IR operand, classified by the frontend into the shapes the analysis can
/// act on. Anything it cannot express becomes [`Operand::Other`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operand {
    /// The direct result of a storage declaration, referenced by name.
    Decl(String),
    /// A dereference (load) of another operand.
    Deref(Box<Operand>),
    /// A type reinterpretation whose original operand is opaque: the resolver
    /// does not look inside.
    Reinterpret(Box<Operand>),
    /// Immediate values, arithmetic, calls, and every other producing
    /// operation.
    Other,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Decl(name) => write!(f, "{}", name),
            Operand::Deref(op) => write!(f, "*{}", op),
            Operand::Reinterpret(op) => write!(f, "(cast){}", op),
            Operand::Other => write!(f, "<other>"),
        }
    }
}

/// A pointer-typed storage declaration. `file` and `line` come from the
/// debug-info adapter and may be absent.
#[derive(Clone, Debug, Hash, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Decl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Decl {
    pub fn new(name: impl Into<String>) -> Self {
        Decl {
            name: name.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(name: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Decl {
            name: name.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

/// One assignment-like operation: a store of `src` into the address `dst`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Assign {
    pub dst: Operand,
    pub src: Operand,
}

/// A single procedure: the unit of analysis. Each procedure is analyzed in
/// isolation; no state crosses procedure boundaries.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Procedure {
    pub name: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
    #[serde(default)]
    pub assigns: Vec<Assign>,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Module {
    pub procedures: Vec<Procedure>,
}

impl Module {
    /// Storage declarations are identified by name within their procedure, so
    /// duplicates would conflate distinct locations.
    pub fn validate(&self) -> Result<(), Error> {
        for p in &self.procedures {
            let mut seen = HashSet::with_capacity(p.decls.len());
            for d in &p.decls {
                if !seen.insert(d.name.as_str()) {
                    return Err(Error(format!(
                        "duplicate declaration {:?} in procedure {}",
                        d.name, p.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_decl_rejected() {
        let module = Module {
            procedures: vec![Procedure {
                name: "f".to_string(),
                decls: vec![Decl::new("a"), Decl::new("a")],
                assigns: vec![],
            }],
        };
        assert!(module.validate().is_err());
    }

    #[test]
    fn operand_json_round_trip() {
        let op = Operand::Deref(Box::new(Operand::Decl("a".to_string())));
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"deref":{"decl":"a"}}"#);
        assert_eq!(op, serde_json::from_str(&json).unwrap());
    }
}
