use std::path::Path;

use crate::error::Error;
use crate::searcher;

pub fn run(index_dir: &Path) -> Result<(), Error> {
    searcher::serve_stdin(index_dir)
}
