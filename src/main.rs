pub mod config;
pub mod encoder;
pub mod error;
pub mod filescanner;
pub mod fstools;
pub mod launcher;
pub mod planner;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rustop::opts;

use encoder::Encoder;
use launcher::SystemLauncher;

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Re-encodes a directory of video files using an external encoder.";
        opt version:bool=false, desc:"Print version information and exit.";
        opt overwrite:bool=false, desc:"Re-encode files whose target already exists.";
        opt config:Option<String>, desc:"Config file (default is $HOME/.rebrake.json).";
        param source:Option<String>, desc:"Source directory to scan for video files.";
        param target:Option<String>, desc:"Target directory for encoded output.";
    }.parse_or_exit();

    if args.version {
        println!("rebrake version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let (source, target) = match (args.source, args.target) {
        (Some(source), Some(target)) => (source, target),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        },
    };

    let mut settings = match config::load(args.config.as_deref().map(Path::new)) {
        Ok(settings) => settings,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        },
    };
    settings.overwrite = settings.overwrite || args.overwrite;

    let encoder = Encoder::new(
        settings,
        PathBuf::from(source),
        PathBuf::from(target),
        Box::new(SystemLauncher));
    match encoder.encode_files() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn print_usage() {
    println!("Re-encodes a directory of video files using an external encoder.");
    println!();
    println!("Usage:");
    println!("\trebrake [-c config-file] [--overwrite] <source directory> <target directory>");
    println!("\trebrake --help");
    println!("\trebrake --version");
}
