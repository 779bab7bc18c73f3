use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".creditsrc.json";

/// Names that never make it into the credits: service accounts, placeholder
/// strings left in catalog headers, and second identities of people who are
/// already credited under another spelling.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "root",
    "friendica",
    "bavatar",
    "tony baldwin",
    "Taek",
    "silke m",
    "leberwurscht",
    "abinoam",
    "fabrixxm",
    "FULL NAME",
    "Hauke Zuehl",
    "Michal Supler",
    "michal_s",
    "Manuel Pérez",
    "rabuzarus",
    "Alberto Díaz",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_seed_names")]
    pub seed_names: Vec<String>,
    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<String>,
    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,
    #[serde(default = "default_catalog_patterns")]
    pub catalog_patterns: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_seed_names() -> Vec<String> {
    vec!["Andi Stadler".to_string()]
}

fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_repositories() -> Vec<String> {
    [".", "addon"].map(String::from).to_vec()
}

fn default_catalog_patterns() -> Vec<String> {
    ["view/*/messages.po", "addon/*/lang/*/messages.po"]
        .map(String::from)
        .to_vec()
}

fn default_output() -> String {
    "util/credits.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_names: default_seed_names(),
            exclusions: default_exclusions(),
            repositories: default_repositories(),
            catalog_patterns: default_catalog_patterns(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a catalog pattern is not a valid glob or the
    /// output path is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.catalog_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'catalogPatterns': \"{}\"", pattern)
            })?;
        }

        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        Ok(())
    }

    /// Resolve the output path against the project root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

/// Load `.creditsrc.json` from the project root, falling back to defaults
/// when the file does not exist.
pub fn load_config(root: &Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
