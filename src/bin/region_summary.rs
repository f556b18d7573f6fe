#!/usr/bin/env rust
//! Regional Risk Summary
//!
//! Groups the earthquake catalog by seismic region and prints event counts
//! per risk level, the largest magnitude and a weighted risk score.
//!
//! Usage:
//!   cargo run --bin region_summary
//!
//! Options:
//!   --json    Print summaries as JSON instead of a table
//!
//! Environment:
//!   BHUKAMP_CONFIG - config file path (default: bhukamp.toml)

use bhukamp_service::analysis::groupings::summarize_regions;
use bhukamp_service::config;
use bhukamp_service::logging;
use bhukamp_service::regions::find_region;
use bhukamp_service::store::SeismicStore;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let as_json = args.contains(&"--json".to_string());

    let service_config = config::load_config()?;
    logging::init(&service_config.logging);

    let store = SeismicStore::load_csv(&service_config.artifacts.catalog_csv)?;
    let summaries = summarize_regions(store.records());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("🗺️  Regional Seismic Risk");
    println!("========================\n");
    println!(
        "{:<16} {:>6} {:>6} {:>6} {:>6} {:>8} {:>9} {:>6}",
        "Region", "High", "Mod", "Low", "Total", "Max Mag", "Dominant", "Score"
    );
    println!("{}", "-".repeat(72));

    for summary in &summaries {
        println!(
            "{:<16} {:>6} {:>6} {:>6} {:>6} {:>8.1} {:>9} {:>6.2}",
            summary.region,
            summary.high,
            summary.moderate,
            summary.low,
            summary.total,
            summary.max_magnitude,
            summary.dominant_risk.to_string(),
            summary.risk_score
        );
    }

    println!();
    for summary in &summaries {
        if let Some(region) = find_region(summary.region) {
            println!("  {}: {}", region.name, region.states.join(", "));
        }
    }

    let unassigned = store.len() - summaries.iter().map(|s| s.total).sum::<usize>();
    if unassigned > 0 {
        println!("\n{} records fall outside every region", unassigned);
    }

    Ok(())
}
