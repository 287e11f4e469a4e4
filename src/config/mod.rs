//! Application configuration: built-in defaults, optional TOML file,
//! CLI overrides — later sources win.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::util::paths::config_path;

/// Default tracer service endpoint.
pub const DEFAULT_TRACER_URL: &str = "http://localhost:8000";

/// Sample program seeded into the editor on startup.
pub const SAMPLE_PROGRAM: &str = r#"# Character Frequency Counter
text = "hello"
counts = {}

for char in range(len(text)):
    if text[char] in counts:
        counts[text[char]] = counts[text[char]] + 1
    else:
        counts[text[char]] = 1
"#;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the tracer service.
    pub tracer_url: String,
    /// Program source loaded into the editor at startup.
    pub initial_source: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracer_url: DEFAULT_TRACER_URL.to_string(),
            initial_source: SAMPLE_PROGRAM.to_string(),
        }
    }
}

/// On-disk configuration file shape (`~/.stepview/config.toml`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    tracer_url: Option<String>,
}

impl Config {
    /// Load the config file if present, then apply CLI overrides.
    pub fn load(
        tracer_url_override: Option<String>,
        source_file: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();

        let path = config_path();
        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("read config file {}", path.display()))?;
            let file: ConfigFile = toml::from_str(&raw)
                .with_context(|| format!("parse config file {}", path.display()))?;
            if let Some(url) = file.tracer_url {
                config.tracer_url = url;
            }
        }

        if let Some(url) = tracer_url_override {
            config.tracer_url = url;
        }
        if let Some(file) = source_file {
            config.initial_source = fs::read_to_string(&file)
                .with_context(|| format!("read source file {}", file.display()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_tracer() {
        let config = Config::default();
        assert_eq!(config.tracer_url, DEFAULT_TRACER_URL);
        assert!(config.initial_source.contains("counts = {}"));
    }

    #[test]
    fn config_file_shape_parses() {
        let file: ConfigFile = toml::from_str("tracer-url = \"http://tracer:9000\"").unwrap();
        assert_eq!(file.tracer_url.as_deref(), Some("http://tracer:9000"));

        let empty: ConfigFile = toml::from_str("").unwrap();
        assert!(empty.tracer_url.is_none());
    }
}
