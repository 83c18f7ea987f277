//! Command implementations.
//!
//! Extraction is one pass: read the document, build and validate the catalog,
//! then write it. Nothing is written when any step fails.
use crate::catalog::{build_catalog, Catalog};
use crate::cli::{ConfigArgs, ExtractArgs};
use crate::config::{
    config_stub, default_config, load_config, validate_config, write_config, CatalogConfig,
};
use crate::output::{render_catalog_json, write_catalog};
use crate::util::{display_path, normalize_newlines};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Input and output paths after applying config and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExtractPlan {
    input: PathBuf,
    output: PathBuf,
    skip_sections: Vec<String>,
}

fn resolve_plan(args: &ExtractArgs) -> Result<ExtractPlan> {
    let config: CatalogConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config(),
    };
    validate_config(&config)?;
    Ok(ExtractPlan {
        input: args.input.clone().unwrap_or(config.input),
        output: args.output.clone().unwrap_or(config.output),
        skip_sections: config.skip_sections,
    })
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let plan = resolve_plan(args)?;
    let cwd = std::env::current_dir().ok();
    let input_label = display_path(&plan.input, cwd.as_deref());

    if !args.stdout {
        println!("Parsing {input_label}...");
    }
    let raw = std::fs::read_to_string(&plan.input)
        .with_context(|| format!("read {}", plan.input.display()))?;
    let document = normalize_newlines(&raw);
    tracing::info!(input = %input_label, bytes = document.len(), "read specification");

    let catalog = build_catalog(&document, &plan.skip_sections)?;
    tracing::info!(features = catalog.features.len(), "catalog validated");

    if args.stdout {
        println!("{}", render_catalog_json(&catalog.features)?);
        return Ok(());
    }

    println!("Extracted {} features", catalog.features.len());
    println!("All features validated successfully");
    write_catalog(&plan.output, &catalog.features)?;
    println!(
        "Successfully wrote {} features to {}",
        catalog.features.len(),
        display_path(&plan.output, cwd.as_deref())
    );
    print_breakdown(&catalog);
    Ok(())
}

fn print_breakdown(catalog: &Catalog) {
    println!();
    println!("Category breakdown:");
    for (category, count) in &catalog.counts {
        println!("  {category}: {count}");
    }
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    match &args.out {
        Some(path) => {
            write_config(path, &default_config(), args.force)?;
            println!("Wrote default config to {}", path.display());
        }
        None => println!("{}", config_stub()?),
    }
    Ok(())
}
