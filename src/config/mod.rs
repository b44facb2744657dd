mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/orgfit/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("orgfit")
}

/// Get the default config file path (~/.config/orgfit/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/orgfit/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `orgfit init` to create one.",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
dataset: scores.csv
profile:
  attributes: [compensation, growth]
  max_points_per_attribute: 5
  max_total_points: 8
allocation:
  compensation: 5
  growth: 3
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.dataset.unwrap().to_str(), Some("scores.csv"));
        let profile = config.profile.unwrap();
        assert_eq!(profile.attributes, vec!["compensation", "growth"]);
        assert_eq!(profile.max_total_points, 8);
        let allocation = config.allocation.unwrap();
        assert_eq!(allocation.get("compensation"), Some(5));
        assert_eq!(allocation.total(), 8);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_saphyr::from_str("dataset: scores.csv").unwrap();
        assert!(config.dataset.is_some());
        assert!(config.profile.is_none());
        assert!(config.allocation.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.dataset.is_none());
    }
}
