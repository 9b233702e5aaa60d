use crate::error::{NeoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NEO_FILE: &str = "data/neos.csv";
const DEFAULT_CAD_FILE: &str = "data/cad.json";
const DEFAULT_OUTPUT_DIR: &str = "outfiles";
const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Configuration for neoquery, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeoConfig {
    /// CSV file of near-Earth objects
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// JSON file of close approaches
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,

    /// Directory that `--outfile` names are resolved against
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// How many results to print when no limit is given and no file is written
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from(DEFAULT_NEO_FILE)
}

fn default_cad_file() -> PathBuf {
    PathBuf::from(DEFAULT_CAD_FILE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
            output_dir: default_output_dir(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl NeoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NeoError::Io)?;
        let config: NeoConfig =
            serde_json::from_str(&content).map_err(NeoError::Serialization)?;
        Ok(config)
    }

    /// First directory in `candidates` holding a config file.
    pub fn find_dir<'a, I>(candidates: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        candidates
            .into_iter()
            .find(|dir| dir.join(CONFIG_FILENAME).exists())
            .map(Path::to_path_buf)
    }

    /// Where an output file named `filename` is written.
    pub fn output_path<P: AsRef<Path>>(&self, filename: P) -> PathBuf {
        self.output_dir.join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NeoConfig::default();
        assert_eq!(config.neo_file, PathBuf::from("data/neos.csv"));
        assert_eq!(config.cad_file, PathBuf::from("data/cad.json"));
        assert_eq!(config.display_limit, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = NeoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, NeoConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"display_limit": 25}"#,
        )
        .unwrap();

        let config = NeoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.display_limit, 25);
        assert_eq!(config.output_dir, PathBuf::from("outfiles"));
    }

    #[test]
    fn test_find_dir_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");
        let config = NeoConfig {
            output_dir: PathBuf::from("/tmp/results"),
            ..Default::default()
        };
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        assert_eq!(NeoConfig::load(&dir).unwrap(), config);
        assert_eq!(
            NeoConfig::find_dir([temp_dir.path(), dir.as_path()]),
            Some(dir.clone())
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            NeoConfig::load(temp_dir.path()),
            Err(NeoError::Serialization(_))
        ));
    }

    #[test]
    fn test_output_path() {
        let config = NeoConfig::default();
        assert_eq!(
            config.output_path("results.csv"),
            PathBuf::from("outfiles/results.csv")
        );
    }
}
