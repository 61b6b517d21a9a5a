//! Error taxonomy for the extraction pipeline.
//!
//! Input errors (unreadable HAR, bad URL) stop the pipeline before any write.
//! Write failures are collected per file and surfaced once as `PartialWrite`
//! after every item has been attempted.

use std::fmt;
use std::path::PathBuf;

/// One file the write executor could not produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HarmockError {
    /// Source HAR file could not be read.
    #[error("read HAR file {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source HAR file is not valid JSON or lacks `log.entries`.
    #[error("parse HAR JSON {}: {source}", .path.display())]
    ParseHar {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A recorded request URL could not be parsed.
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Some files were written, others failed. Successful writes are not rolled back.
    #[error("{}", partial_write_message(.failed, .total, .failures))]
    PartialWrite {
        failed: usize,
        total: usize,
        failures: Vec<WriteFailure>,
    },

    /// User declined or selected nothing. Not a failure; callers exit cleanly.
    #[error("operation cancelled")]
    Cancelled,
}

impl HarmockError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, HarmockError::Cancelled)
    }
}

fn partial_write_message(failed: &usize, total: &usize, failures: &[WriteFailure]) -> String {
    let mut out = format!("Failed to write {failed} of {total} file(s):");
    for failure in failures {
        out.push_str("\n  ");
        out.push_str(&failure.to_string());
    }
    out
}

pub type Result<T> = std::result::Result<T, HarmockError>;
