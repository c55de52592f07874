use std::fs;
use std::path::Path;
use std::time::Instant;

use tantivy::schema::Field;
use tantivy::{doc, Index, IndexWriter};
use tracing::info;

use crate::error::Error;
use crate::schema::{build_schema, filepath_field};

/// Heap handed to the tantivy writer (50 MB).
pub const WRITER_HEAP_BYTES: usize = 50_000_000;

/// What [`ensure_index`] did.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A fresh index was written.
    Built { files: usize, elapsed_ms: u64 },
    /// The index directory already existed and was left untouched.
    Reused,
}

/// Returns true if anything exists at `index_dir`.
///
/// This is the only build gate: contents are never inspected, so a partial
/// or stale index is trusted as-is.
pub fn index_exists(index_dir: &Path) -> bool {
    index_dir.exists()
}

/// Builds the index at `index_dir` unless something is already there.
pub fn ensure_index(index_dir: &Path, paths: &[String]) -> Result<BuildOutcome, Error> {
    if index_exists(index_dir) {
        info!(index = %index_dir.display(), "index directory exists, skipping build");
        return Ok(BuildOutcome::Reused);
    }
    build_index(index_dir, paths)
}

/// Creates `index_dir` and writes one document per path.
///
/// The directory is created non-recursively, so this fails if it already
/// exists. The writer is always closed, even after a failed write; the
/// write error wins over a close error.
pub fn build_index(index_dir: &Path, paths: &[String]) -> Result<BuildOutcome, Error> {
    fs::create_dir(index_dir)?;

    let schema = build_schema();
    let index = Index::create_in_dir(index_dir, schema.clone())?;
    let filepath = filepath_field(&schema);

    let mut writer: IndexWriter = index.writer(WRITER_HEAP_BYTES)?;

    let start = Instant::now();
    let written = write_paths(&mut writer, filepath, paths);
    let closed = writer.wait_merging_threads();

    written?;
    closed.map_err(Error::CloseWriter)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(files = paths.len(), elapsed_ms, "indexed file paths");

    Ok(BuildOutcome::Built {
        files: paths.len(),
        elapsed_ms,
    })
}

fn write_paths(writer: &mut IndexWriter, filepath: Field, paths: &[String]) -> tantivy::Result<()> {
    for path in paths {
        writer.add_document(doc!(filepath => path.as_str()))?;
    }
    writer.commit()?;
    Ok(())
}
