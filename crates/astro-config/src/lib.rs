use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/engine.toml", "../../configs/engine.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Swiss Ephemeris data directory; `None` defers to `$SWISS_EPHEMERIS_PATH`
    /// and then the system default
    pub ephemeris_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingToml {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    logging: LoggingToml,
}

/// Try the common relative locations of `configs/engine.toml`.
///
/// Returns `None` when no default config file exists.
pub fn read_default_config_text() -> Option<String> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .find_map(|p| fs::read_to_string(p).ok())
}

pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse engine config: {e}"))?;
    Ok(EngineSettings {
        ephemeris_path: root.ephemeris.path,
        log_level: root.logging.level,
    })
}

/// Load settings from `explicit` if given (it must exist), otherwise from the
/// default locations, otherwise defaults.
pub fn load_engine_settings(explicit: Option<&Path>) -> anyhow::Result<EngineSettings> {
    let text = match explicit {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file {}: {e}", path.display())
        })?),
        None => read_default_config_text(),
    };
    match text {
        Some(text) => parse_engine_settings(&text),
        None => Ok(EngineSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let settings = parse_engine_settings(
            r#"
            [ephemeris]
            path = "/data/swisseph"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/data/swisseph")));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_parse_empty_config_gives_defaults() {
        assert_eq!(parse_engine_settings("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_engine_settings("[ephemeris]\nfile = \"x\"\n").is_err());
        assert!(parse_engine_settings("not toml at all [").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("engine.toml");
        assert!(load_engine_settings(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"info\"").unwrap();
        let settings = load_engine_settings(Some(file.path())).unwrap();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.ephemeris_path, None);
    }
}
