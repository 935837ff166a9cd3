use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::ChartSettings;

/// Searched in order when no config path is given, so the CLI works from the
/// workspace root and from inside `apps/<name>`.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UraniaConfig {
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Text of the first readable file in `paths`, with the path it came from.
pub fn read_config_toml_text<P: AsRef<Path>>(paths: &[P]) -> Option<(PathBuf, String)> {
    paths.iter().find_map(|p| {
        let p = p.as_ref();
        fs::read_to_string(p).ok().map(|text| (p.to_path_buf(), text))
    })
}

pub fn parse_config(text: &str) -> anyhow::Result<UraniaConfig> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania config: {e}"))
}

/// Load from an explicit path, or fall back to [`DEFAULT_CONFIG_PATHS`].
///
/// An explicit path must exist. When searching the defaults, finding nothing
/// yields the default config; a file that exists but does not parse is an
/// error either way.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<UraniaConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in {}", path.display()))
        }
        None => load_config_from_paths(&DEFAULT_CONFIG_PATHS),
    }
}

pub fn load_config_from_paths<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<UraniaConfig> {
    match read_config_toml_text(paths) {
        Some((path, text)) => {
            log::debug!("Loading config from {}", path.display());
            parse_config(&text).with_context(|| format!("in {}", path.display()))
        }
        None => {
            log::debug!("No urania.toml found, using defaults");
            Ok(UraniaConfig::default())
        }
    }
}
