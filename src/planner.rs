use std::path::{Path, PathBuf};

use crate::error::PathResolutionError;
use crate::fstools::{file_exists, file_extension};

#[derive(Clone, Debug, PartialEq)]
pub struct EncodeJob {
    pub source: PathBuf,
    pub target: PathBuf,
}

pub struct BatchPlanner<'a> {
    source_root: &'a Path,
    target_root: &'a Path,
    target_extension: &'a str,
    overwrite: bool,
}

impl<'a> BatchPlanner<'a> {
    pub fn new(source_root: &'a Path, target_root: &'a Path, target_extension: &'a str, overwrite: bool) -> Self {
        BatchPlanner {
            source_root,
            target_root,
            target_extension,
            overwrite,
        }
    }

    // Candidates whose destination already exists are dropped from the batch
    // with a notice, unless overwrite is set. A stat failure other than
    // not-found fails the whole plan.
    pub fn plan(&self, candidates: &[PathBuf]) -> Result<Vec<EncodeJob>, PathResolutionError> {
        let mut jobs = vec![];
        for candidate in candidates {
            let target = self.destination_path(candidate)?;
            if !self.overwrite && file_exists(&target)? {
                println!("Target file already exists, skipping: {}", target.display());
                continue;
            }
            jobs.push(EncodeJob {
                source: candidate.clone(),
                target,
            });
        }
        Ok(jobs)
    }

    fn destination_path(&self, candidate: &Path) -> Result<PathBuf, PathResolutionError> {
        let rel = match candidate.strip_prefix(self.source_root) {
            Ok(rel) => rel,
            Err(_) => return Err(PathResolutionError::for_file(candidate, "failed to find relative path to source file")),
        };
        let mut destination = self.target_root.join(rel);
        let name = match destination.file_name().and_then(|n| n.to_str()) {
            Some(name) => String::from(name),
            None => return Err(PathResolutionError::for_file(candidate, "source file has no usable file name")),
        };
        let ext = file_extension(&destination);
        let stem = &name[..name.len() - ext.len()];
        destination.set_file_name(format!("{}{}", stem, self.target_extension));
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn planner<'a>(source: &'a Path, target: &'a Path) -> BatchPlanner<'a> {
        BatchPlanner::new(source, target, ".mp4", false)
    }

    #[test]
    fn test_destination_mirrors_relative_path_and_rewrites_extension() {
        let p = planner(Path::new("/videos"), Path::new("/encoded"));
        assert_eq!(
            p.destination_path(Path::new("/videos/a/movie.mkv")).unwrap(),
            PathBuf::from("/encoded/a/movie.mp4"));
        assert_eq!(
            p.destination_path(Path::new("/videos/clip.avi")).unwrap(),
            PathBuf::from("/encoded/clip.mp4"));
    }

    #[test]
    fn test_destination_for_file_without_extension() {
        let p = planner(Path::new("/videos"), Path::new("/encoded"));
        assert_eq!(
            p.destination_path(Path::new("/videos/raw")).unwrap(),
            PathBuf::from("/encoded/raw.mp4"));
    }

    #[test]
    fn test_destination_strips_only_the_last_extension() {
        let p = planner(Path::new("/videos"), Path::new("/encoded"));
        assert_eq!(
            p.destination_path(Path::new("/videos/show.s01e01.mkv")).unwrap(),
            PathBuf::from("/encoded/show.s01e01.mp4"));
    }

    #[test]
    fn test_candidate_outside_source_root_is_an_error() {
        let p = planner(Path::new("/videos"), Path::new("/encoded"));
        assert!(p.destination_path(Path::new("/elsewhere/movie.mkv")).is_err());
    }

    #[test]
    fn test_plan_skips_existing_targets_and_keeps_order() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let candidates = vec![
            source.path().join("a/movie.mkv"),
            source.path().join("b/clip.avi"),
        ];
        fs::create_dir_all(target.path().join("a")).unwrap();
        fs::write(target.path().join("a/movie.mp4"), b"done").unwrap();

        let p = planner(source.path(), target.path());
        let jobs = p.plan(&candidates).unwrap();
        assert_eq!(jobs, vec![EncodeJob {
            source: source.path().join("b/clip.avi"),
            target: target.path().join("b/clip.mp4"),
        }]);
    }

    #[test]
    fn test_plan_with_overwrite_keeps_existing_targets() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let candidates = vec![source.path().join("movie.mkv")];
        fs::write(target.path().join("movie.mp4"), b"stale").unwrap();

        let p = BatchPlanner::new(source.path(), target.path(), ".mp4", true);
        let jobs = p.plan(&candidates).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].target, target.path().join("movie.mp4"));
    }

    #[test]
    fn test_plan_of_nothing_is_empty_not_an_error() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let p = planner(source.path(), target.path());
        assert_eq!(p.plan(&[]).unwrap(), vec![]);
    }
}
