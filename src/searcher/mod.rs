pub mod prompt;
pub mod query;
pub mod wildcard;

use std::io;
use std::path::Path;

use crate::error::Error;
use prompt::run_prompt;
use query::PathSearcher;

/// Opens the index at `index_dir` and serves queries from stdin until it
/// closes.
///
/// Results go to stdout; the index is opened once for the whole session.
pub fn serve_stdin(index_dir: &Path) -> Result<(), Error> {
    let searcher = PathSearcher::open(index_dir)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prompt(&searcher, stdin.lock(), stdout.lock())
}
