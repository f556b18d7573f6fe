#!/usr/bin/env rust
//! Scaler Fitting
//!
//! Fits the fault density, hub distance and magnitude MinMax scalers over an
//! earthquake catalog and writes them as the scalers artifact the service
//! loads at startup.
//!
//! Fault density is fitted over known values only, so unknown densities do
//! not drag the minimum to zero.
//!
//! Usage:
//!   cargo run --bin fit_scalers
//!
//! Options:
//!   --catalog PATH   Catalog CSV (default: artifacts.catalog_csv from config)
//!   --output PATH    Where to write scalers JSON (default: artifacts.scalers_json)
//!   --dry-run        Print the fitted ranges without writing
//!
//! Environment:
//!   BHUKAMP_CONFIG - config file path (default: bhukamp.toml)

use bhukamp_service::config;
use bhukamp_service::logging;
use bhukamp_service::normalize::ScalerSet;
use bhukamp_service::store::SeismicStore;
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📐 Scaler Fitting");
    println!("=================\n");

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let path_arg = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(PathBuf::from)
    };
    let catalog_arg = path_arg("--catalog");
    let output_arg = path_arg("--output");
    let dry_run = args.contains(&"--dry-run".to_string());

    let service_config = config::load_config()?;
    logging::init(&service_config.logging);

    let catalog = catalog_arg.unwrap_or(service_config.artifacts.catalog_csv);
    let output = output_arg.unwrap_or(service_config.artifacts.scalers_json);

    println!("📋 Loading catalog {}...", catalog.display());
    let store = SeismicStore::load_csv(&catalog)?;
    println!("✓ {} records\n", store.len());

    let scalers = ScalerSet::fit(&store)?;
    println!("✓ Fitted ranges:");
    println!(
        "  - fault density: {:.4} – {:.4}",
        scalers.fault_density.min, scalers.fault_density.max
    );
    println!(
        "  - hub distance:  {:.1} – {:.1} m",
        scalers.hub_distance.min, scalers.hub_distance.max
    );
    println!(
        "  - magnitude:     {:.2} – {:.2}\n",
        scalers.magnitude.min, scalers.magnitude.max
    );

    if dry_run {
        println!("Dry run: nothing written");
        return Ok(());
    }

    scalers.save(&output)?;
    println!("✓ Wrote {}", output.display());
    Ok(())
}
