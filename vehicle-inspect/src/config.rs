use anyhow::Context;
use osi_vehicle::SchemaVersion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_filter: String,
    pub pretty: bool,
    /// Frames of the other revision are skipped.
    pub expect_version: Option<SchemaVersion>,
    /// Print `path = value` lines for present fields instead of full JSON.
    pub show_present_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            pretty: false,
            expect_version: None,
            show_present_only: false,
        }
    }
}

impl Config {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            create_default_config(path)?;
        }
        let config_file = std::fs::File::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        let reader = std::io::BufReader::new(config_file);
        serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))
    }
}

pub fn create_default_config(path: &std::path::Path) -> anyhow::Result<()> {
    use std::io::prelude::*;
    let mut config_file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let config = Config::default();
    let config_str = serde_json::to_vec_pretty(&config)?;
    config_file.write_all(&config_str)?;
    Ok(())
}
