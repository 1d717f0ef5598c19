use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_BASENAME: &str = ".rebrake.json";

const DEFAULT_ENCODER_COMMAND: &str = "HandBrakeCLI";
const DEFAULT_ENCODER_OPTIONS: &str = "--encoder x264 --encoder-preset fast --optimize";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub encoder_command: String,
    pub encoder_options: String,
    pub source_extensions: Vec<String>,
    pub target_extension: String,
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            encoder_command: String::from(DEFAULT_ENCODER_COMMAND),
            encoder_options: String::from(DEFAULT_ENCODER_OPTIONS),
            source_extensions: vec![
                String::from(".mp4"),
                String::from(".mkv"),
                String::from(".avi"),
            ],
            target_extension: String::from(".mp4"),
            overwrite: false,
        }
    }
}

impl Settings {
    pub fn option_tokens(&self) -> Vec<String> {
        self.encoder_options.split_whitespace().map(String::from).collect()
    }
}

pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    match explicit {
        // A filename was given so it's required.
        Some(path) => read_settings_file(path),
        None => {
            let home = match dirs::home_dir() {
                Some(home) => home,
                None => return Err(ConfigError::new("Unable to find home directory.")),
            };
            let path = home.join(DEFAULT_CONFIG_BASENAME);
            match fs::read_to_string(&path) {
                Ok(contents) => parse_settings(&path, &contents),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(Settings::default()),
                Err(err) => Err(ConfigError::for_file(&path, &format!("Unable to read config file: {}", err))),
            }
        },
    }
}

fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_settings(path, &contents),
        Err(err) => Err(ConfigError::for_file(path, &format!("Unable to read config file: {}", err))),
    }
}

fn parse_settings(path: &Path, contents: &str) -> Result<Settings, ConfigError> {
    serde_json::from_str(contents)
        .map_err(|err| ConfigError::for_file(path, &format!("Malformed config file: {}", err)))
}
