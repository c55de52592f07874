use std::path::Path;

use tantivy::collector::TopDocs;
use tantivy::schema::{Field, Value};
use tantivy::{Index, ReloadPolicy, Searcher, TantivyDocument};
use tracing::debug;

use super::wildcard::WildcardQuery;
use crate::error::Error;
use crate::schema::FILEPATH;

/// Maximum number of hits returned per query.
pub const MAX_HITS: usize = 10;

/// Turns raw input into a wildcard pattern: `*` before every character and
/// one trailing `*`.
///
/// Every path containing the input as a substring matches. Because each
/// character is preceded by its own `*`, so does any path containing the
/// input characters in order with gaps. Nothing is escaped, so `*`, `?` and
/// `\` typed by the user keep their wildcard meaning.
pub fn to_wildcard(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() * 2 + 1);
    for c in input.chars() {
        pattern.push('*');
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}

/// Read-only handle on a persisted path index.
///
/// Opened once and kept for the whole interactive session.
pub struct PathSearcher {
    searcher: Searcher,
    filepath: Field,
}

impl PathSearcher {
    /// Opens the index at `index_dir` for reading.
    pub fn open(index_dir: &Path) -> Result<Self, Error> {
        Self::open_reader(index_dir).map_err(Error::prompt)
    }

    fn open_reader(index_dir: &Path) -> tantivy::Result<Self> {
        let index = Index::open_in_dir(index_dir)?;
        let filepath = index.schema().get_field(FILEPATH)?;
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self {
            searcher: reader.searcher(),
            filepath,
        })
    }

    /// Number of indexed paths.
    pub fn num_docs(&self) -> u64 {
        self.searcher.num_docs()
    }

    /// Returns up to [`MAX_HITS`] stored paths containing `input`, in the
    /// engine's default order.
    pub fn search(&self, input: &str) -> Result<Vec<String>, Error> {
        let pattern = to_wildcard(input);
        debug!(%pattern, "executing path query");
        let query = WildcardQuery::new(self.filepath, &pattern);
        self.execute(&query).map_err(Error::Query)
    }

    fn execute(&self, query: &WildcardQuery) -> tantivy::Result<Vec<String>> {
        let top_docs = self.searcher.search(query, &TopDocs::with_limit(MAX_HITS))?;

        let mut paths = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: TantivyDocument = self.searcher.doc(doc_address)?;
            if let Some(path) = doc.get_first(self.filepath).and_then(|v| v.as_str()) {
                paths.push(path.to_string());
            }
        }
        Ok(paths)
    }
}
