use clap::{Parser, Subcommand};
use std::path::PathBuf;

use orgfit::scoring::{self, Allocation};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every organization in the dataset (default if no subcommand)
    Rank,
    /// Show the best match with highlight notes and a score chart
    Top,
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "orgfit")]
#[command(about = "Rank organizations against your preference weights", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/orgfit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the dataset CSV (overrides the config)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Override allocated points, e.g. -p growth=5 (repeatable)
    #[arg(short = 'p', long = "points", global = true, value_name = "ATTR=POINTS")]
    points: Vec<String>,

    /// Emit JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Parse one `-p` override of the form `attribute=points`.
fn parse_point_override(raw: &str) -> Result<(String, u32), String> {
    let (attribute, points) = raw
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not in ATTR=POINTS form", raw))?;
    let attribute = attribute.trim();
    if attribute.is_empty() {
        return Err(format!("'{}' has an empty attribute name", raw));
    }
    let points: u32 = points
        .trim()
        .parse()
        .map_err(|_| format!("'{}' does not end in a whole number of points", raw))?;
    Ok((attribute.to_string(), points))
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank);

    if let Commands::Init = command {
        if let Err(e) = orgfit::config::run_init_wizard(cli.config.map(PathBuf::from)) {
            eprintln!("Init failed: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match orgfit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let profile = config.profile.unwrap_or_default();
    if let Err(errors) = scoring::validate_profile(&profile) {
        eprintln!("Profile errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Build the allocation: zero for every attribute, then config values,
    // then -p overrides. The engine always sees a complete mapping.
    let mut allocation = Allocation::zeroed(&profile);
    if let Some(configured) = &config.allocation {
        for (attribute, points) in configured.iter() {
            allocation.set(attribute, points);
        }
    }
    for raw in &cli.points {
        match parse_point_override(raw) {
            Ok((attribute, points)) => allocation.set(attribute, points),
            Err(e) => {
                eprintln!("Invalid --points override: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Budget and range checks run here, before the engine is invoked
    if let Err(errors) = scoring::validate_allocation(&allocation, &profile) {
        eprintln!("Allocation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Allocated {} of {} points across {} attributes",
            allocation.total(),
            profile.max_total_points,
            profile.attributes.len()
        );
    }

    // Load the dataset snapshot
    let dataset_path = match cli.dataset.or(config.dataset) {
        Some(path) => path,
        None => {
            eprintln!("No dataset configured. Set `dataset:` in the config or pass --dataset.");
            std::process::exit(EXIT_CONFIG);
        }
    };
    let organizations = match orgfit::dataset::load_organizations(&dataset_path, &profile) {
        Ok(orgs) => orgs,
        Err(e) => {
            eprintln!("Dataset error: {}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} organizations from {}",
            organizations.len(),
            dataset_path.display()
        );
    }

    let ranked = match scoring::rank(&organizations, &allocation, &profile) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    let use_colors = orgfit::output::should_use_colors();

    match command {
        Commands::Rank => {
            if cli.json {
                match serde_json::to_string_pretty(&ranked) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize ranking: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            } else {
                println!(
                    "{}",
                    orgfit::output::format_ranked_table(&ranked, &profile, use_colors)
                );
            }
        }
        Commands::Top => {
            let Some(top) = ranked.first() else {
                eprintln!("No organizations in dataset.");
                std::process::exit(EXIT_DATA);
            };
            let highlights =
                scoring::derive_highlights(&top.organization, &allocation, &profile);

            if cli.json {
                let payload = serde_json::json!({
                    "top": top,
                    "highlights": highlights,
                });
                match serde_json::to_string_pretty(&payload) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            } else {
                println!(
                    "{}",
                    orgfit::output::format_top_summary(top, &highlights, use_colors)
                );
                println!();
                println!(
                    "{}",
                    orgfit::output::format_bar_chart(top, &profile, use_colors)
                );
            }
        }
        Commands::Init => unreachable!("handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}
