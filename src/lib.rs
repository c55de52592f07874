//! Indexes the file paths under a directory with tantivy and answers
//! interactive wildcard queries against them.

pub mod cmd;
pub mod error;
pub mod indexer;
pub mod schema;
pub mod searcher;

pub use error::Error;
