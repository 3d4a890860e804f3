//! Implementation of the `resloc lookup` command.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use miette::{IntoDiagnostic, Result, miette};
use owo_colors::{OwoColorize, Stream};
use resloc::{
    Arg, ConfigurationContext, Diagnostic, DiagnosticHook, LocalizationProvider, Value,
};
use serde::Serialize;

use super::{load_chains, load_store, parse_language};

/// Arguments for the lookup command.
#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// Translation dump (JSON)
    #[arg(long, env = "RESLOC_STORE")]
    pub store: PathBuf,

    /// Fallback chain file (JSON)
    #[arg(long, env = "RESLOC_CHAINS")]
    pub chains: Option<PathBuf>,

    /// Resource key (e.g., Pages.Home.title)
    #[arg(long, required = true)]
    pub key: String,

    /// Requested language
    #[arg(long, required = true)]
    pub lang: String,

    /// Probe the invariant language last
    #[arg(long)]
    pub invariant: bool,

    /// Positional arguments for `{0}` style messages (repeatable)
    #[arg(short = 'a', long = "arg", conflicts_with = "params")]
    pub args: Vec<String>,

    /// Named placeholders in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for lookup results.
#[derive(Serialize)]
struct LookupResult {
    key: String,
    requested: String,
    resolved_from: Option<String>,
    text: Option<String>,
    warnings: Vec<String>,
}

/// Parse a name=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Numbers stay numbers so format specifiers apply to them.
fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(n) = raw.parse::<u64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs, verbose: bool) -> Result<i32> {
    let requested = parse_language(&args.lang)?;
    let chains = load_chains(args.chains.as_deref())?;
    let store = Arc::new(load_store(&args.store)?);

    let warnings = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&warnings);
    let config = ConfigurationContext::builder()
        .fallback(chains)
        .enable_invariant_fallback(args.invariant)
        .diagnostics(DiagnosticHook::new(move |event: &Diagnostic| {
            if let Diagnostic::FormattingFailure { error, .. } = event {
                if let Ok(mut sink) = sink.lock() {
                    sink.push(error.to_string());
                }
            }
        }))
        .build();

    let probe_order = config.probe_order(&requested);
    let resolved_from = store
        .resource(&args.key)
        .and_then(|resource| resource.first_available(&probe_order))
        .map(|(language, _)| language.to_string());

    let provider = LocalizationProvider::builder()
        .config(config)
        .store(store)
        .build();

    let placeholders: HashMap<String, Value> = args
        .params
        .iter()
        .map(|(name, raw)| (name.clone(), parse_value(raw)))
        .collect();
    let format_args: Vec<Arg<'_>> = if placeholders.is_empty() {
        args.args.iter().map(|raw| Arg::Scalar(parse_value(raw))).collect()
    } else {
        vec![Arg::object(&placeholders)]
    };

    let text = provider
        .get_string_formatted(&args.key, &requested, &format_args)
        .map_err(|e| miette!("{e}"))?;
    let warnings = match warnings.lock() {
        Ok(collected) => collected.clone(),
        Err(_) => Vec::new(),
    };

    if args.json {
        let output = LookupResult {
            key: args.key,
            requested: requested.to_string(),
            resolved_from,
            text: text.clone(),
            warnings,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        if verbose {
            let order: Vec<String> = probe_order.iter().map(ToString::to_string).collect();
            eprintln!("probed: {}", order.join(" -> "));
            if let Some(language) = &resolved_from {
                eprintln!("resolved from: {language}");
            }
        }
        for warning in &warnings {
            eprintln!(
                "{} {warning}",
                "warning:".if_supports_color(Stream::Stderr, |t| t.yellow())
            );
        }
        match &text {
            Some(text) => println!("{text}"),
            None => eprintln!(
                "{} no translation for '{}' in {requested}",
                "missing:".if_supports_color(Stream::Stderr, |t| t.red()),
                args.key
            ),
        }
    }

    if text.is_some() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
