//! Implementation of the `resloc probe` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::{configuration, load_chains, parse_language};
use crate::output::table::format_probe_table;

/// Arguments for the probe command.
#[derive(Debug, clap::Args)]
pub struct ProbeArgs {
    /// Requested language (e.g., lv-LV, fr-BE)
    #[arg(long, required = true)]
    pub lang: String,

    /// Fallback chain file (JSON)
    #[arg(long, env = "RESLOC_CHAINS")]
    pub chains: Option<PathBuf>,

    /// Probe the invariant language last
    #[arg(long)]
    pub invariant: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for probe results.
#[derive(Serialize)]
struct ProbeResult {
    requested: String,
    probe_order: Vec<String>,
}

/// Run the probe command.
pub fn run_probe(args: ProbeArgs) -> Result<i32> {
    let requested = parse_language(&args.lang)?;
    let chains = load_chains(args.chains.as_deref())?;
    let config = configuration(chains, args.invariant);

    let probe_order: Vec<String> = config
        .probe_order(&requested)
        .iter()
        .map(ToString::to_string)
        .collect();

    if args.json {
        let output = ProbeResult {
            requested: requested.to_string(),
            probe_order,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_probe_table(&probe_order));
    }

    Ok(exitcode::OK)
}
