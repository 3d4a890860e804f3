//! resloc CLI entry point.
//!
//! Developer tools for JSON translation dumps:
//! - `resloc probe` - Print the language probe order for a language
//! - `resloc lookup` - Resolve one key through the fallback chains
//! - `resloc coverage` - Report translation coverage per language

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CoverageArgs, LookupArgs, ProbeArgs, run_coverage, run_lookup, run_probe,
};

/// resloc translation tools.
#[derive(Debug, Parser)]
#[command(name = "resloc")]
#[command(about = "resloc translation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Print the probe order and resolved language
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the languages probed for a requested language
    Probe(ProbeArgs),
    /// Look up a key in a translation dump
    Lookup(LookupArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
}

fn setup_colors(color_when: ColorWhen) {
    match color_when {
        // owo-colors checks TTY, NO_COLOR and FORCE_COLOR
        ColorWhen::Auto => {}
        ColorWhen::Always => owo_colors::set_override(true),
        ColorWhen::Never => owo_colors::set_override(false),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Probe(args) => run_probe(args),
        Commands::Lookup(args) => run_lookup(args, cli.verbose),
        Commands::Coverage(args) => run_coverage(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
