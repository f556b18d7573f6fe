//! Bhukamp Susceptibility Service - Main Entry Point
//!
//! Loads the earthquake catalog, scalers and classifier once, then either:
//! 1. Assesses a single geocoded location and prints the result, or
//! 2. Serves assessments over HTTP until stopped
//!
//! Usage:
//!   cargo run --release -- assess 30.55 79.56 Joshimath   # One-off assessment
//!   cargo run --release -- assess 12.97 77.59 --json       # Same, as JSON
//!   cargo run --release -- --endpoint 8080                 # HTTP endpoint on port 8080
//!   cargo run --release -- --config other.toml --endpoint 8080
//!
//! Environment:
//!   BHUKAMP_CONFIG - config file path (default: bhukamp.toml)
//!   RUST_LOG       - overrides the configured log level

use bhukamp_service::assess::SusceptibilityAssessor;
use bhukamp_service::config::{self, ServiceConfig};
use bhukamp_service::endpoint;
use bhukamp_service::logging;
use bhukamp_service::model::RiskAssessment;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

enum Command {
    Assess { latitude: f64, longitude: f64, place: String },
    Serve { port: u16 },
}

fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {0} [--config PATH] assess LAT LON [PLACE...] [--json]\n  {0} [--config PATH] --endpoint PORT",
        program
    )
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bhukamp_service");

    // Parse command-line arguments
    let mut config_override: Option<PathBuf> = None;
    let mut command: Option<Command> = None;
    let mut as_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a path");
                    std::process::exit(1);
                }
            }
            "--endpoint" => {
                match args.get(i + 1).and_then(|p| p.parse().ok()) {
                    Some(port) => command = Some(Command::Serve { port }),
                    None => {
                        eprintln!("Error: --endpoint requires a port number");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--json" => {
                as_json = true;
                i += 1;
            }
            "assess" => {
                let latitude = args.get(i + 1).and_then(|v| v.parse::<f64>().ok());
                let longitude = args.get(i + 2).and_then(|v| v.parse::<f64>().ok());
                let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
                    eprintln!("Error: assess requires numeric LAT and LON");
                    eprintln!("{}", usage(program));
                    std::process::exit(1);
                };

                // Remaining words up to the next flag form the place name
                let mut words = Vec::new();
                i += 3;
                while i < args.len() && !args[i].starts_with("--") {
                    words.push(args[i].clone());
                    i += 1;
                }
                command = Some(Command::Assess { latitude, longitude, place: words.join(" ") });
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("{}", usage(program));
                std::process::exit(1);
            }
        }
    }

    let Some(command) = command else {
        eprintln!("{}", usage(program));
        std::process::exit(1);
    };

    // Load configuration
    let config_file = config_override.unwrap_or_else(config::config_path);
    let service_config = match config::load_config_from(&config_file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("\n❌ Failed to load {}: {}\n", config_file.display(), e);
            std::process::exit(1);
        }
    };
    logging::init(&service_config.logging);

    match command {
        Command::Assess { latitude, longitude, place } => {
            let assessor = load_assessor(&service_config, !as_json);
            match assessor.assess_location(latitude, longitude, &place) {
                Ok(assessment) if as_json => match serde_json::to_string_pretty(&assessment) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("❌ Failed to serialise assessment: {}", e);
                        std::process::exit(1);
                    }
                },
                Ok(assessment) => print_assessment(&place, &assessment),
                Err(e) => {
                    eprintln!("\n❌ Assessment failed: {}\n", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Serve { port } => {
            let assessor = Arc::new(load_assessor(&service_config, true));
            println!("🚀 Starting HTTP endpoint server...");
            if let Err(e) =
                endpoint::start_endpoint_server(port, assessor, service_config.endpoint.workers)
            {
                eprintln!("❌ Endpoint server error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_assessor(config: &ServiceConfig, banner: bool) -> SusceptibilityAssessor {
    if banner {
        println!("🌍 Bhukamp Susceptibility Service");
        println!("=================================\n");
        println!("📊 Loading catalog and model artifacts...");
    }
    match SusceptibilityAssessor::from_config(config) {
        Ok(assessor) => {
            if banner {
                println!(
                    "✓ {} catalog records, {} model\n",
                    assessor.store().len(),
                    assessor.model_name()
                );
            }
            assessor
        }
        Err(e) => {
            eprintln!("\n❌ Initialization failed: {}\n", e);
            std::process::exit(1);
        }
    }
}

fn print_assessment(place: &str, assessment: &RiskAssessment) {
    let label = if place.is_empty() { "Location" } else { place };
    println!(
        "📍 {} ({:.4}, {:.4})",
        label, assessment.latitude, assessment.longitude
    );
    if let Some(region) = assessment.region {
        println!("   Region:            {}", region);
    }
    println!("   Susceptibility:    {}", assessment.predicted_class);
    println!("   Safety rating:     {:.1} / 5.0", assessment.safety_rating);
    if let Some([safe, moderate, unsafe_p]) = assessment.confidence_per_class {
        println!(
            "   Confidence:        safe {:.0}% | moderate {:.0}% | unsafe {:.0}%",
            safe * 100.0,
            moderate * 100.0,
            unsafe_p * 100.0
        );
    }

    let features = &assessment.features;
    println!(
        "   Magnitude:         {:.2} ({})",
        features.magnitude, assessment.magnitude_severity
    );
    println!("   Hub distance:      {:.1} km", features.hub_distance_m / 1000.0);
    match features.fault_density {
        Some(density) => println!("   Fault density:     {:.3}", density),
        None => println!("   Fault density:     unknown"),
    }
    if let Some(hub) = &features.fault_hub_name {
        println!("   Fault hub:         {}", hub);
    }
    if assessment.terrain_risky {
        println!("   ⚠️  Landslide-prone terrain");
    }
    for warning in &assessment.warnings {
        println!("   ⚠️  {}", warning);
    }
}
