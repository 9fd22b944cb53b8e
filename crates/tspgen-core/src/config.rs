use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Where the Riot API schema is published.
pub const DEFAULT_SCHEMA_URL: &str =
    "https://mingweisamuel.github.io/riotapi-schema/openapi-3.0.0.json";

/// Top-level project configuration loaded from `.tspgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TspgenConfig {
    /// Local schema path. Doubles as the download cache.
    pub input: String,
    pub schema_url: String,
    /// Directory receiving one `.tsp` file per namespace plus the manifest.
    pub output: String,
    pub manifest: String,
    pub endpoints: EndpointsConfig,
}

impl Default for TspgenConfig {
    fn default() -> Self {
        Self {
            input: "riot_openapi.json".to_string(),
            schema_url: DEFAULT_SCHEMA_URL.to_string(),
            output: "client/typespec".to_string(),
            manifest: "main.tsp".to_string(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

/// Endpoint index (markdown) options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub output: String,
    pub title: String,
    /// Rendered as a blockquote under the title. Omitted when `None`.
    pub source_note: Option<String>,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            output: "endpoints.md".to_string(),
            title: "Riot API Endpoints".to_string(),
            source_note: Some(
                "Generated from mingweisamuel/riotapi-schema (OpenAPI 3.0.0)".to_string(),
            ),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".tspgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<TspgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: TspgenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# tspgen configuration
input: riot_openapi.json      # cached schema; downloaded from schema_url when missing
schema_url: https://mingweisamuel.github.io/riotapi-schema/openapi-3.0.0.json
output: client/typespec       # one <namespace>.tsp per API namespace
manifest: main.tsp            # imports every namespace file

endpoints:
  output: endpoints.md
  title: Riot API Endpoints
  source_note: Generated from mingweisamuel/riotapi-schema (OpenAPI 3.0.0)
"#
}
