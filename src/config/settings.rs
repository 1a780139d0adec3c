use super::ConfigError;
use crate::model::ProjectMetadataMap;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/task-views";

/// Local settings describing the engine's surroundings.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// URL or path of the queue configuration document.
    #[serde(default)]
    pub config_source: Option<String>,
    /// Tasks carrying any of these labels never count.
    #[serde(default)]
    pub excluded_labels: Vec<String>,
    #[serde(default)]
    pub project_metadata: ProjectMetadataMap,
}

impl Settings {
    /// Load settings from the custom directory if provided, otherwise from
    /// the default directory. A missing file yields empty settings.
    ///
    pub fn load(custom_dir: Option<&str>) -> Result<Settings, ConfigError> {
        let dir_path = match custom_dir {
            Some(path) => Path::new(path).to_path_buf(),
            None => Settings::default_path()?,
        };
        Settings::load_from(&dir_path.join(FILE_NAME))
    }

    /// Load settings from a specific file. A missing file yields empty
    /// settings.
    ///
    pub fn load_from(file_path: &Path) -> Result<Settings, ConfigError> {
        if !file_path.exists() {
            debug!(
                "No settings file at {}, using defaults",
                file_path.display()
            );
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }
        let settings: Settings = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        debug!(
            "Loaded settings from {} ({} excluded labels, {} project metadata entries)",
            file_path.display(),
            settings.excluded_labels.len(),
            settings.project_metadata.len()
        );
        Ok(settings)
    }

    /// Returns the path buffer for the default settings directory or an error
    /// if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();
        assert_eq!(Settings::load(Some(dir)).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_settings() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(FILE_NAME),
            r#"
config_source: https://example.com/queue-config.json
excluded_labels:
  - waiting
  - someday
project_metadata:
  "2203306141":
    priority: 3
    area: work
  "2203306142": {}
"#,
        )
        .unwrap();

        let settings = Settings::load(tmp.path().to_str()).unwrap();
        assert_eq!(
            settings.config_source.as_deref(),
            Some("https://example.com/queue-config.json")
        );
        assert_eq!(settings.excluded_labels, vec!["waiting", "someday"]);
        assert_eq!(settings.project_metadata["2203306141"].priority, Some(3));
        assert_eq!(settings.project_metadata["2203306142"].priority, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(FILE_NAME);
        fs::write(&path, "\n").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_settings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(FILE_NAME);
        fs::write(&path, "excluded_labels: {nested: [").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::DeserializationFailed(_))
        ));
    }
}
