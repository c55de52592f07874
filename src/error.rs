/// Exit status for a malformed command line (`sysexits.h` `EX_USAGE`).
pub const EX_USAGE: u8 = 64;
/// Exit status for a failed query (`sysexits.h` `EX_DATAERR`).
pub const EX_DATAERR: u8 = 65;
/// Exit status for traversal and index I/O failures (`sysexits.h` `EX_IOERR`).
pub const EX_IOERR: u8 = 74;

/// Structured error type for pathfind operations.
///
/// Library code never terminates the process. Errors propagate to the
/// binary's entry point, which reports them and picks the exit status
/// through [`Error::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Directory traversal failure (unreadable root or subdirectory).
    #[error("failed to walk directory tree")]
    Walk(#[from] ignore::Error),

    /// File system I/O failure while collecting paths or creating the index.
    #[error("I/O failure")]
    Io(#[from] std::io::Error),

    /// Tantivy failure while creating or writing the index.
    #[error("index engine failure")]
    Index(#[from] tantivy::TantivyError),

    /// Tantivy failure while releasing the index writer.
    #[error("failed to close index writer")]
    CloseWriter(#[source] tantivy::TantivyError),

    /// Failure opening the index for reading or using the prompt streams.
    #[error("failed to read query")]
    Prompt(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Failure while executing a single search.
    #[error("failed to search for query")]
    Query(#[source] tantivy::TantivyError),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Prompt failures are reported but still exit with status 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Walk(_) | Error::Io(_) | Error::Index(_) | Error::CloseWriter(_) => EX_IOERR,
            Error::Query(_) => EX_DATAERR,
            Error::Prompt(_) => 0,
        }
    }

    /// Wraps any prompt-side failure.
    pub fn prompt<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Error::Prompt(err.into())
    }
}
