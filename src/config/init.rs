use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{get_config_path, Config};
use crate::scoring::{Allocation, ScoringProfile};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Interactive `orgfit init`: asks for the dataset, the attribute profile
/// and a starting allocation, then writes config.yaml.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!("orgfit configuration wizard");
    println!("===========================");
    println!();

    // 1. Dataset
    println!("The dataset is a CSV with a 'name' column plus one 0..1 score");
    println!("column per attribute.");
    let dataset = loop {
        let path = prompt("Path to the dataset CSV: ")?;
        if !path.is_empty() {
            break PathBuf::from(path);
        }
        println!("  Dataset path is required.");
    };

    // 2. Attribute profile
    println!();
    let defaults = ScoringProfile::default();
    println!(
        "Default attributes: {}",
        defaults.attributes.join(", ")
    );
    let use_default_attributes = prompt_yes_no("Use the default attribute set?", true)?;

    let profile = if use_default_attributes {
        defaults
    } else {
        let attributes = loop {
            let input = prompt("Attribute names (comma-separated): ")?;
            let names: Vec<String> = input
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !names.is_empty() {
                break names;
            }
            println!("  At least one attribute is required.");
        };

        let max_points_per_attribute = loop {
            let input = prompt_with_default("Max points per attribute", "5")?;
            match input.parse::<u32>() {
                Ok(v) if v > 0 => break v,
                _ => println!("  Invalid: must be a positive integer. Try again."),
            }
        };

        let max_total_points = loop {
            let input = prompt_with_default("Total point budget", "15")?;
            match input.parse::<u32>() {
                Ok(v) if v > 0 => break v,
                _ => println!("  Invalid: must be a positive integer. Try again."),
            }
        };

        ScoringProfile {
            attributes,
            max_points_per_attribute,
            max_total_points,
        }
    };

    // 3. Starting allocation, with live remaining-budget feedback
    println!();
    println!(
        "Allocate up to {} points in total, at most {} per attribute.",
        profile.max_total_points, profile.max_points_per_attribute
    );
    let mut allocation = Allocation::new();
    let mut remaining = profile.max_total_points;
    for attribute in &profile.attributes {
        let points = loop {
            let ceiling = profile.max_points_per_attribute.min(remaining);
            let input = prompt_with_default(
                &format!("  {} (0-{}, {} left)", attribute, ceiling, remaining),
                "0",
            )?;
            match input.parse::<u32>() {
                Ok(v) if v <= ceiling => break v,
                Ok(v) => println!("  Invalid: {} exceeds the {} available. Try again.", v, ceiling),
                Err(_) => println!("  Invalid: must be a whole number. Try again."),
            }
        };
        allocation.set(attribute.clone(), points);
        remaining -= points;
    }
    println!("  {} points left unallocated.", remaining);

    // 4. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 5. Write config
    let config = Config {
        dataset: Some(dataset),
        profile: Some(profile),
        allocation: Some(allocation),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `orgfit` to rank your catalog, or `orgfit top` for the best match.");

    Ok(())
}
