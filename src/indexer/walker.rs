use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::Error;

/// Walks the tree at `root`, returning the canonical absolute path of every
/// regular file in traversal order.
///
/// Unlike a repository walk, nothing is filtered: hidden entries are visited
/// and `.gitignore`/`.ignore` files are not honored. Symbolic links are
/// neither followed nor recorded, and special files are skipped. That
/// includes `root` itself: a symlinked root yields no paths.
///
/// Any traversal or canonicalization failure aborts the walk.
pub fn walk_paths(root: &Path) -> Result<Vec<String>, Error> {
    let mut paths = Vec::new();

    // A missing root falls through so the walker reports it.
    if root
        .symlink_metadata()
        .map_or(false, |meta| meta.file_type().is_symlink())
    {
        debug!(root = %root.display(), "root is a symlink, not following");
        return Ok(paths);
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = result?;

        // Symlinks report their own type here, so only real files pass.
        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let canonical = entry.path().canonicalize()?;
        paths.push(path_string(canonical));
    }

    debug!(root = %root.display(), files = paths.len(), "walk complete");
    Ok(paths)
}

fn path_string(path: PathBuf) -> String {
    match path.into_os_string().into_string() {
        Ok(s) => s,
        Err(raw) => {
            let lossy = raw.to_string_lossy().into_owned();
            warn!(path = %lossy, "non-UTF-8 path recorded lossily");
            lossy
        }
    }
}
