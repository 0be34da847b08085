//! Error types for dataset loading
//!
//! HTTP-facing errors live in `api::error`; registry client failures are
//! carried as `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate entity id '{0}'")]
    DuplicateEntity(String),

    #[error("Duplicate cluster id '{0}'")]
    DuplicateCluster(String),

    #[error("Organization alias '{alias}' maps to '{orgnr}', expected 9 digits")]
    InvalidOrgNumber { alias: String, orgnr: String },
}
