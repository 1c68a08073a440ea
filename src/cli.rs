// SPDX-License-Identifier: BSD-3-Clause
use std::path::PathBuf;

/// Intra-procedural Andersen-style points-to analysis
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Append to the output file instead of truncating it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Dump the collected constraints to stderr
    #[arg(long)]
    pub constraints: bool,

    /// Dump the solved graph (points-to sets and edges) to stderr
    #[arg(long)]
    pub debug: bool,

    /// IR module (JSON)
    #[arg()]
    pub module: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet
    #[arg(long)]
    pub quiet: bool,

    /// Tracing
    #[arg(long)]
    pub tracing: bool,
}
