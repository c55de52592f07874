#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `tree/a/foo.txt` and `tree/b/bar.txt` inside a fresh temp dir.
///
/// Returns the temp dir guard and the canonical tree root.
pub fn sample_tree() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let root = tmp.path().join("tree");
    fs::create_dir_all(root.join("a")).expect("failed to create a/");
    fs::create_dir_all(root.join("b")).expect("failed to create b/");
    fs::write(root.join("a/foo.txt"), "foo").expect("failed to write foo.txt");
    fs::write(root.join("b/bar.txt"), "bar").expect("failed to write bar.txt");
    let root = root.canonicalize().expect("failed to canonicalize root");
    (tmp, root)
}

/// Sample tree plus a built index at `<tmp>/index`.
pub fn indexed_tree() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let (tmp, root) = sample_tree();
    let index_dir = tmp.path().join("index");
    pathfind::indexer::run_index(&root, &index_dir).expect("indexing should succeed");
    (tmp, root, index_dir)
}

/// Canonical path string of `rel` under `root`.
pub fn path_of(root: &Path, rel: &str) -> String {
    root.join(rel)
        .canonicalize()
        .expect("path should exist")
        .to_string_lossy()
        .to_string()
}

/// Both sample paths.
pub fn sample_paths(root: &Path) -> Vec<String> {
    vec![path_of(root, "a/foo.txt"), path_of(root, "b/bar.txt")]
}

/// Paths a plain query (no `*`, `?` or `\`) is expected to hit: those
/// containing the query characters in order.
///
/// Temp dir names are random, so tests compare against this rather than
/// hard-coding which sample path a query misses.
pub fn expected_hits(paths: &[String], query: &str) -> BTreeSet<String> {
    paths
        .iter()
        .filter(|path| {
            let mut rest = path.chars();
            query.chars().all(|q| rest.any(|c| c == q))
        })
        .cloned()
        .collect()
}

/// Writes an index at `index_dir` whose `filepath` field is stored but not
/// searchable: it opens, but every query against it fails.
pub fn unsearchable_index(index_dir: &Path) {
    use tantivy::schema::{Schema, STORED};
    use tantivy::{doc, Index, IndexWriter};

    fs::create_dir(index_dir).expect("failed to create index dir");
    let mut builder = Schema::builder();
    let filepath = builder.add_text_field(pathfind::schema::FILEPATH, STORED);
    let index = Index::create_in_dir(index_dir, builder.build()).expect("failed to create index");
    let mut writer: IndexWriter = index
        .writer(pathfind::indexer::writer::WRITER_HEAP_BYTES)
        .expect("failed to open writer");
    writer
        .add_document(doc!(filepath => "/srv/a/foo.txt"))
        .expect("failed to add document");
    writer.commit().expect("failed to commit");
    writer.wait_merging_threads().expect("failed to close writer");
}
