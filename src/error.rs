use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ConfigError {
    path: Option<PathBuf>,
    msg: String,
}

impl ConfigError {
    pub fn new(msg: &str) -> Self {
        ConfigError {
            path: None,
            msg: String::from(msg),
        }
    }

    pub fn for_file(path: &Path, msg: &str) -> Self {
        ConfigError {
            path: Some(PathBuf::from(path)),
            msg: String::from(msg),
        }
    }
}

impl Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Error loading configuration from {:?}: {}", path, &self.msg),
            None => write!(f, "Error loading configuration: {}", &self.msg),
        }
    }
}

#[derive(Debug)]
pub struct ScanError {
    path: PathBuf,
    msg: String,
}

impl ScanError {
    pub fn for_file(path: &Path, msg: &str) -> Self {
        ScanError {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }
}

impl Error for ScanError {}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error scanning {:?}: {}", &self.path, &self.msg)
    }
}

#[derive(Debug)]
pub struct PathResolutionError {
    path: PathBuf,
    msg: String,
}

impl PathResolutionError {
    pub fn for_file(path: &Path, msg: &str) -> Self {
        PathResolutionError {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }
}

impl Error for PathResolutionError {}

impl Display for PathResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error resolving {:?}: {}", &self.path, &self.msg)
    }
}

#[derive(Debug)]
pub struct EncodeError {
    path: PathBuf,
    msg: String,
}

impl EncodeError {
    pub fn for_file(path: &Path, msg: &str) -> Self {
        EncodeError {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }
}

impl Error for EncodeError {}

impl Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error encoding {:?}: {}", &self.path, &self.msg)
    }
}
