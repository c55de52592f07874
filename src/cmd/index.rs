use std::path::Path;

use crate::error::Error;
use crate::indexer::{self, writer::BuildOutcome};

pub fn run(root: &Path, index_dir: &Path) -> Result<(), Error> {
    match indexer::run_index(root, index_dir)? {
        BuildOutcome::Built { .. } => println!("successfully indexed filenames"),
        BuildOutcome::Reused => {}
    }
    Ok(())
}
