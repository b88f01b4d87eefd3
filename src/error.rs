use std::path::PathBuf;

use thiserror::Error;

/// Unanticipated I/O failures. Expected conditions (missing README,
/// missing `[TOC]` marker, missing assets dir, a single failed delete)
/// are outcome values, not errors — only these terminate the run.
#[derive(Debug, Error)]
pub enum MdTidyError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
