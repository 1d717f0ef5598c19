use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{EncodeError, PathResolutionError};
use crate::filescanner::FileScanner;
use crate::fstools::{classify_entry, DirEntryCategory};
use crate::launcher::ProcessLauncher;
use crate::planner::{BatchPlanner, EncodeJob};

pub struct Encoder {
    settings: Settings,
    source: PathBuf,
    target: PathBuf,
    launcher: Box<dyn ProcessLauncher>,
}

impl Encoder {
    pub fn new(settings: Settings, source: PathBuf, target: PathBuf, launcher: Box<dyn ProcessLauncher>) -> Self {
        Encoder {
            settings,
            source,
            target,
            launcher,
        }
    }

    // Re-encodes every video file under the source directory into the target
    // directory, one encoder process at a time, stopping at the first failure.
    pub fn encode_files(&self) -> Result<(), Box<dyn Error>> {
        self.ensure_target_directory()?;

        let scanner = FileScanner::new(&self.settings.source_extensions);
        let candidates = scanner.scan(&self.source)?;

        let planner = BatchPlanner::new(
            &self.source,
            &self.target,
            &self.settings.target_extension,
            self.settings.overwrite);
        let jobs = planner.plan(&candidates)?;
        if jobs.is_empty() {
            println!("Did not find any videos to re-encode.");
            return Ok(());
        }

        let options = self.settings.option_tokens();
        for job in &jobs {
            self.encode_job(job, &options)?;
        }

        Ok(())
    }

    fn ensure_target_directory(&self) -> Result<(), Box<dyn Error>> {
        match classify_entry(&self.target)? {
            DirEntryCategory::Directory => Ok(()),
            DirEntryCategory::DoesNotExist => {
                println!("Target directory does not exist; attempting to create it.");
                match fs::create_dir_all(&self.target) {
                    Ok(()) => Ok(()),
                    Err(err) => Err(Box::new(PathResolutionError::for_file(&self.target, &format!("Unable to create target directory: {}", err)))),
                }
            },
            DirEntryCategory::RegularFile | DirEntryCategory::Unknown => {
                Err(Box::new(PathResolutionError::for_file(&self.target, "not a directory")))
            },
        }
    }

    fn encode_job(&self, job: &EncodeJob, options: &[String]) -> Result<(), EncodeError> {
        let mut args = options.to_vec();
        args.push(String::from("-i"));
        args.push(job.source.to_string_lossy().into_owned());
        args.push(String::from("-o"));
        args.push(job.target.to_string_lossy().into_owned());

        println!("{} {}", &self.settings.encoder_command, args.join(" "));

        match self.launcher.launch(&self.settings.encoder_command, &args) {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => match status.code() {
                Some(code) => Err(EncodeError::for_file(&job.source, &format!("encoder exited with {}", code))),
                None => Err(EncodeError::for_file(&job.source, "encoder was terminated before it could finish")),
            },
            Err(err) => Err(EncodeError::for_file(&job.source, &format!("Unable to launch encoder: {}", err))),
        }
    }
}
