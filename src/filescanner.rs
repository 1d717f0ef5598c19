use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::fstools::file_extension;

pub struct FileScanner {
    extensions: Vec<String>,
}

impl FileScanner {
    pub fn new(extensions: &[String]) -> Self {
        FileScanner {
            extensions: extensions.to_vec(),
        }
    }

    // Depth-first walk, siblings in file name order, so repeated runs see the
    // same candidates in the same order. Any unreadable entry fails the whole
    // scan rather than producing a partial batch.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut candidates = vec![];
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = match err.path() {
                        Some(path) => PathBuf::from(path),
                        None => PathBuf::from(root),
                    };
                    return Err(ScanError::for_file(&path, &format!("failed to walk source directory: {}", err)));
                },
            };
            if !entry.file_type().is_dir() && self.is_video_file(entry.path()) {
                candidates.push(entry.path().to_path_buf());
            }
        }
        Ok(candidates)
    }

    fn is_video_file(&self, path: &Path) -> bool {
        let ext = file_extension(path);
        self.extensions.iter().any(|e| *e == ext)
    }
}
