pub mod walker;
pub mod writer;

use std::path::Path;

use crate::error::Error;
use walker::walk_paths;
use writer::{ensure_index, BuildOutcome};

/// Collects the regular files under `root` and indexes them at `index_dir`
/// unless an index directory is already present.
///
/// The tree is walked either way, so a traversal failure is reported even
/// when the index is reused. Does not print; the CLI layer handles output.
pub fn run_index(root: &Path, index_dir: &Path) -> Result<BuildOutcome, Error> {
    let paths = walk_paths(root)?;
    ensure_index(index_dir, &paths)
}
