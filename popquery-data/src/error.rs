//! Error types raised while loading or seeding the JSON datasets.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading, decoding or seeding dataset files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data directory could not be opened.
    #[error("failed to open data directory {path}")]
    OpenDir {
        /// Requested directory.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The data directory could not be created.
    #[error("failed to create data directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file exists but could not be read.
    #[error("failed to read dataset file {path}")]
    Read {
        /// File that failed to read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file did not contain the expected JSON records.
    #[error("failed to decode records from {path}")]
    Decode {
        /// File holding the malformed records.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Sample records could not be encoded for write-back.
    #[error("failed to encode sample records for {path}")]
    Encode {
        /// File the sample was destined for.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the sample records back to disk failed.
    #[error("failed to write sample records to {path}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
