use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::PathResolutionError;

pub enum DirEntryCategory {
    DoesNotExist,
    RegularFile,
    Directory,
    Unknown,
}

pub fn classify_entry(path: &Path) -> Result<DirEntryCategory, PathResolutionError> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if metadata.is_file() {
                Ok(DirEntryCategory::RegularFile)
            } else if metadata.is_dir() {
                Ok(DirEntryCategory::Directory)
            } else {
                Ok(DirEntryCategory::Unknown)
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(DirEntryCategory::DoesNotExist),
        Err(err) => Err(PathResolutionError::for_file(path, &format!("Unable to determine state of file: {}", err))),
    }
}

pub fn file_exists(path: &Path) -> Result<bool, PathResolutionError> {
    match classify_entry(path)? {
        DirEntryCategory::DoesNotExist => Ok(false),
        _ => Ok(true),
    }
}

// Extension of the final path component from its last '.' onward, dot
// included; empty string when there is no dot. A name like ".config" is
// therefore its own extension.
pub fn file_extension(path: &Path) -> String {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(index) => String::from(&name[index..]),
        None => String::new(),
    }
}
