// SPDX-License-Identifier: BSD-3-Clause
use std::fs::OpenOptions;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tracing_subscriber::{fmt, prelude::*};

use anders::analysis::pointer;
use anders::{ir, report};

mod cli;

fn setup_global_subscriber() {
    let filter_layer = tracing::level_filters::LevelFilter::TRACE;
    let fmt_layer = fmt::Layer::default();
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    if args.tracing {
        setup_global_subscriber();
    }

    let module_string = std::fs::read_to_string(&args.module)
        .with_context(|| format!("Couldn't read IR module at {}", args.module.display()))?;
    let module: ir::Module =
        serde_json::from_str(&module_string).context("Couldn't deserialize IR module")?;
    module.validate()?;

    // The results sink is owned here, not by the analysis; truncate vs.
    // append is the caller's call.
    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            OpenOptions::new()
                .create(true)
                .write(true)
                .append(args.append)
                .truncate(!args.append)
                .open(path)
                .with_context(|| format!("Couldn't open results sink at {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    for procedure in &module.procedures {
        let out = pointer::analysis(procedure);
        if args.constraints {
            report::dump_constraints(&out, &mut io::stderr().lock())?;
        }
        if args.debug {
            report::dump_graph(&out, &mut io::stderr().lock())?;
        }
        if !args.quiet {
            report::report(&out, &mut sink)?;
        }
    }

    Ok(())
}
