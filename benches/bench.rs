use criterion::{black_box, criterion_group, criterion_main, Criterion};

use anders::analysis::pointer;
use anders::{Assign, Decl, Operand, Procedure};

// ------------------------------------------------------------------
// Helpers

fn decl(name: &str) -> Operand {
    Operand::Decl(name.to_string())
}

fn deref(op: Operand) -> Operand {
    Operand::Deref(Box::new(op))
}

/// A long copy chain seeded at one end: p0 = &t; p1 = p0; ...; pN = pN-1.
fn chain(n: usize) -> Procedure {
    let mut decls = vec![Decl::new("t")];
    let mut assigns = vec![Assign {
        dst: decl("p0"),
        src: decl("t"),
    }];
    for i in 0..n {
        decls.push(Decl::new(format!("p{i}")));
        if i > 0 {
            assigns.push(Assign {
                dst: decl(&format!("p{i}")),
                src: deref(decl(&format!("p{}", i - 1))),
            });
        }
    }
    Procedure {
        name: "chain".to_string(),
        decls,
        assigns,
    }
}

/// Dense store/load traffic through a hub pointer: hub = &pi for all i,
/// *hub = src, and every qi = *hub.
fn hub(n: usize) -> Procedure {
    let mut decls = vec![Decl::new("hub"), Decl::new("src"), Decl::new("t")];
    let mut assigns = vec![Assign {
        dst: decl("src"),
        src: decl("t"),
    }];
    for i in 0..n {
        decls.push(Decl::new(format!("p{i}")));
        decls.push(Decl::new(format!("q{i}")));
        assigns.push(Assign {
            dst: decl("hub"),
            src: decl(&format!("p{i}")),
        });
        assigns.push(Assign {
            dst: deref(decl("hub")),
            src: deref(decl("src")),
        });
        assigns.push(Assign {
            dst: decl(&format!("q{i}")),
            src: deref(deref(decl("hub"))),
        });
    }
    Procedure {
        name: "hub".to_string(),
        decls,
        assigns,
    }
}

// ------------------------------------------------------------------

pub fn chain_256(c: &mut Criterion) {
    let p = chain(256);
    c.bench_function("pointer::analysis(chain-256)", |b| {
        b.iter(|| pointer::analysis(black_box(&p)))
    });
}

pub fn chain_1024(c: &mut Criterion) {
    let p = chain(1024);
    c.bench_function("pointer::analysis(chain-1024)", |b| {
        b.iter(|| pointer::analysis(black_box(&p)))
    });
}

pub fn hub_64(c: &mut Criterion) {
    let p = hub(64);
    c.bench_function("pointer::analysis(hub-64)", |b| {
        b.iter(|| pointer::analysis(black_box(&p)))
    });
}

pub fn hub_256(c: &mut Criterion) {
    let p = hub(256);
    c.bench_function("pointer::analysis(hub-256)", |b| {
        b.iter(|| pointer::analysis(black_box(&p)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = chain_256, chain_1024, hub_64, hub_256
}
criterion_main!(benches);
