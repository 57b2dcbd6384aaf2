//! noirify: convert a color image to grayscale.
//!
//! Reads one image, converts it with the Rec. 601 luma weights, and
//! writes one single-channel image.
//!
//! # Usage
//!
//! ```text
//! noirify <input_path> <output_path>
//! ```
//!
//! Exits 0 on success with no output. On failure prints one line to
//! stderr and exits 1.

#![allow(clippy::print_stderr)]

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use noirify_pipeline::{Dimensions, NoirifyError};

/// Convert a color image to grayscale.
///
/// The input format is detected from the file content. The output format
/// is chosen from the output path's extension; missing parent
/// directories are created.
#[derive(Debug, Parser)]
#[command(name = "noirify", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the source image.
    input_path: PathBuf,

    /// Path to write the grayscale image to.
    output_path: PathBuf,
}

/// Parse arguments, folding every parse failure into
/// [`NoirifyError::Usage`].
///
/// Every argument after the program name is a path, even one that
/// starts with `-`.
fn parse_args<I, T>(args: I) -> Result<Cli, NoirifyError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("noirify"));
    let argv = [program, OsString::from("--")].into_iter().chain(args);

    Cli::try_parse_from(argv).map_err(|err| {
        log::debug!("argument parsing failed: {}", err.kind());
        NoirifyError::Usage
    })
}

/// Run one conversion for already-parsed arguments.
fn run(cli: &Cli) -> Result<Dimensions, NoirifyError> {
    log::debug!(
        "converting {} -> {}",
        cli.input_path.display(),
        cli.output_path.display()
    );
    noirify_io::convert_file(&cli.input_path, &cli.output_path)
}

/// Format an error as the single stderr line of the CLI contract.
fn error_line(err: &NoirifyError) -> String {
    match err {
        NoirifyError::Usage => err.to_string(),
        _ => format!("Error: {err}"),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let result = parse_args(std::env::args_os()).and_then(|cli| run(&cli));

    match result {
        Ok(dimensions) => {
            log::debug!("done: {}x{}", dimensions.width, dimensions.height);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}
