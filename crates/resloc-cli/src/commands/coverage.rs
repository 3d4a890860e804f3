//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use resloc::{LanguageTag, TranslatedResource, TranslationStore};
use serde::Serialize;

use super::{configuration, load_chains, load_store, parse_language};
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Translation dump (JSON)
    #[arg(long, env = "RESLOC_STORE")]
    pub store: PathBuf,

    /// Fallback chain file (JSON)
    #[arg(long, env = "RESLOC_CHAINS")]
    pub chains: Option<PathBuf>,

    /// Languages to check (comma-separated). Defaults to every stored language.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Count invariant texts as resolved
    #[arg(long)]
    pub invariant: bool,

    /// Exit with non-zero code if any key is missing in any language.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    exact: usize,
    fallback: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let store = load_store(&args.store)?;
    let config = configuration(load_chains(args.chains.as_deref())?, args.invariant);
    let resources = store.all_resources();

    let languages = if args.lang.is_empty() {
        stored_languages(&resources)
    } else {
        args.lang
            .iter()
            .map(|tag| parse_language(tag))
            .collect::<Result<Vec<_>>>()?
    };

    let coverage_data: Vec<LanguageCoverage> = languages
        .iter()
        .map(|language| {
            let probe_order = config.probe_order(language);
            let mut coverage = LanguageCoverage {
                language: language.to_string(),
                exact: 0,
                fallback: 0,
                missing: Vec::new(),
            };
            for resource in &resources {
                if resource.has_language(language) {
                    coverage.exact += 1;
                } else if resource.first_available(&probe_order).is_some() {
                    coverage.fallback += 1;
                } else {
                    coverage.missing.push(resource.key.to_string());
                }
            }
            coverage
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                exact: c.exact,
                fallback: c.fallback,
                total: resources.len(),
                missing: c.missing.clone(),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(resources.len(), &coverage_data));

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Every non-invariant language with at least one stored text, sorted.
fn stored_languages(resources: &[TranslatedResource]) -> Vec<LanguageTag> {
    let languages: BTreeSet<&LanguageTag> = resources
        .iter()
        .flat_map(TranslatedResource::translations)
        .map(|translation| &translation.language)
        .filter(|language| !language.is_invariant())
        .collect();
    languages.into_iter().cloned().collect()
}
