//! Code for loading program settings.
use crate::get_lexscopistan_config_dir;
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use documented::DocumentedFields;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

const DEFAULT_SETTINGS_FILE_HEADER: &str = "# This file contains the program settings for lexscopistan
# Uncomment a setting to change it from its default value
";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Get the path to where the settings file will be read from
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_lexscopistan_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Program settings from config file
#[derive(Debug, DocumentedFields, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether to overwrite output files by default
    #[serde(default)]
    pub overwrite: bool,
    /// Whether to write every mineral order to a CSV file
    #[serde(default)]
    pub debug_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            overwrite: false,
            debug_output: false,
        }
    }
}

impl Settings {
    /// Read the contents of the settings file from the program's config directory.
    ///
    /// If the file is not present, default values for settings will be used
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Read settings from the specified path, using defaults if the file doesn't exist
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(file_path)
    }

    /// The contents of the default settings file, with every setting commented out
    pub fn default_file_contents() -> String {
        let settings_raw =
            toml::to_string(&Settings::default()).expect("Could not convert settings to TOML");

        // Iterate through the generated TOML, commenting out lines and adding docs
        let mut out = DEFAULT_SETTINGS_FILE_HEADER.to_string();
        for line in settings_raw.split('\n') {
            if let Some(last) = line.find('=') {
                // Add documentation from doc comments
                let field = line[..last].trim();

                // Use doc comment to document parameter. All fields should have doc comments.
                let docs = Settings::get_field_docs(field).expect("Missing doc comment for field");
                for line in docs.split('\n') {
                    write!(&mut out, "\n# # {}\n", line.trim()).unwrap();
                }

                writeln!(&mut out, "# {}", line.trim()).unwrap();
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_settings_load_from_path_no_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME); // NB: doesn't exist
        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_settings_load_from_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "log_level = \"warn\"").unwrap();
        }

        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings {
                log_level: "warn".to_string(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(toml::from_str::<Settings>("").unwrap(), Settings::default());
        assert_eq!(Settings::default().log_level, "info");
    }

    #[test]
    fn test_default_file_contents() {
        let contents = Settings::default_file_contents();
        assert!(contents.starts_with(DEFAULT_SETTINGS_FILE_HEADER));
        assert!(contents.contains("# log_level = \"info\""));
        assert!(contents.contains("# # Whether to write every mineral order to a CSV file"));

        // Every setting is commented out, so the file parses to the defaults
        assert_eq!(
            toml::from_str::<Settings>(&contents).unwrap(),
            Settings::default()
        );
    }
}
