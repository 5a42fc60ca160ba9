// Configuration loader
// Loads engine settings from ~/.banter/config.toml, falling back to defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::settings::EngineConfig;

/// Load configuration from the default location, or defaults when absent
pub fn load_config() -> Result<EngineConfig> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".banter/config.toml");

    if !config_path.exists() {
        tracing::debug!("No config file found, using defaults");
        return Ok(EngineConfig::default());
    }

    load_config_from(&config_path)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: EngineConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    tracing::info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_count = 3\ntarget_threshold = 50").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.candidate_count, 3);
        assert_eq!(config.target_threshold, 50);
        // Untouched fields keep their defaults
        assert_eq!(config.max_context_chars, 1000);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_count = \"five\"").unwrap();

        assert!(load_config_from(file.path()).is_err());
    }
}
