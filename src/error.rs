//! Error type for the I/O shell around the pipeline (fixture loading, CLI
//! argument handling). The pipeline stages themselves never return
//! `Result`; they're total over their input types by construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read input file {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("failed to parse {path} as JSON: {source}")]
    Json { path: String, #[source] source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
