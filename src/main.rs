//! Food Web CLI - Select the largest self-sustaining species subset from JSON.

use std::path::{Path, PathBuf};
use std::time::Instant;

use food_web::{
    compute::{SpeciesGenerator, partition_zones},
    schema::{SolverConfig, Species, StrategyKind, load_species_file},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <species.json> [--legacy] [--config <config.json>]", args[0]);
        eprintln!();
        eprintln!("Select the largest self-sustaining species subset.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  species.json      JSON array of species records");
        eprintln!("  --legacy          Use the longest-chain strategy (names only)");
        eprintln!("  --config FILE     Solver configuration as JSON");
        eprintln!();
        eprintln!("Other modes:");
        eprintln!("  --example         Print an example input");
        eprintln!("  --generate N [S]  Print N synthetic species (optional seed S)");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--example" => {
            print_json(&example_species());
            return;
        }
        "--generate" => {
            let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);
            let mut generator = match args.get(3).and_then(|s| s.parse().ok()) {
                Some(seed) => SpeciesGenerator::new(seed),
                None => SpeciesGenerator::random(),
            };
            print_json(&generator.generate(count));
            return;
        }
        _ => {}
    }

    let species_path = PathBuf::from(&args[1]);
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let mut config = match config_path {
        Some(path) => load_config(&path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => SolverConfig::default(),
    };
    if args.iter().skip(2).any(|a| a == "--legacy") {
        config.strategy = StrategyKind::LongestChain;
    }

    let species = load_species_file(&species_path).unwrap_or_else(|e| {
        eprintln!("Error loading species: {}", e);
        std::process::exit(1);
    });

    eprintln!(
        "Species: {} across {} zone(s)",
        species.len(),
        partition_zones(&species).len()
    );

    let strategy = config.strategy.build(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let output = strategy.run(&species).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    eprintln!(
        "Strategy: {} ({} species, {:.3}s)",
        strategy.name(),
        output.len(),
        start.elapsed().as_secs_f32()
    );
    print_json(&output);
}

fn load_config(path: &Path) -> Result<SolverConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn example_species() -> Vec<Species> {
    vec![
        Species::producer("Producer1", 1000, "0-30m").with_temperature_range("28.3-30"),
        Species::producer("Producer2", 2000, "0-30m").with_temperature_range("28.3-30"),
        Species::producer("Producer3", 3000, "0-30m").with_temperature_range("28.3-30"),
        Species::consumer(
            "Animal1",
            100,
            1000,
            "0-30m",
            ["Producer1", "Producer2", "Producer3"],
        )
        .with_temperature_range("28.3-30"),
    ]
}
