pub mod index;
pub mod search;

use std::error::Error as _;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::Error;

/// Index location, relative to the working directory.
pub const INDEX_DIR: &str = "index";

/// Printed to stderr when the argument count is wrong.
pub const USAGE: &str = "usage: path_to_root_directory";

#[derive(Parser, Debug)]
#[command(
    name = "pathfind",
    about = "Index file paths under a directory and search them interactively",
    version
)]
pub struct Cli {
    /// Root directory to scan
    pub root: PathBuf,
}

/// Outcome of parsing the command line.
pub enum Parsed {
    Run(Cli),
    /// `--help`/`--version` was requested; clap's error carries the text.
    Info(clap::Error),
    Usage,
}

/// Parses `args` (program name first) without touching the file system.
pub fn parse_args<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Info(err)
        }
        Err(_) => Parsed::Usage,
    }
}

/// Indexes `cli.root` if needed, then serves queries from stdin.
pub fn run(cli: &Cli) -> Result<(), Error> {
    let index_dir = Path::new(INDEX_DIR);
    index::run(&cli.root, index_dir)?;
    search::run(index_dir)
}

/// Prints `err` and its cause chain to stderr.
pub fn report(err: &Error) {
    eprintln!("error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_positional_argument_runs() {
        match parse_args(["pathfind", "/srv"]) {
            Parsed::Run(cli) => assert_eq!(cli.root, PathBuf::from("/srv")),
            _ => panic!("expected a runnable command line"),
        }
    }

    #[test]
    fn missing_root_is_usage_error() {
        assert!(matches!(parse_args(["pathfind"]), Parsed::Usage));
    }

    #[test]
    fn extra_arguments_are_usage_errors() {
        assert!(matches!(parse_args(["pathfind", "a", "b"]), Parsed::Usage));
        assert!(matches!(parse_args(["pathfind", "a", "b", "c"]), Parsed::Usage));
    }

    #[test]
    fn help_is_informational() {
        assert!(matches!(parse_args(["pathfind", "--help"]), Parsed::Info(_)));
        assert!(matches!(parse_args(["pathfind", "--version"]), Parsed::Info(_)));
    }
}
