// src/errors.rs
use thiserror::Error;

use crate::reader::ScanError;

#[derive(Error, Debug)]
pub enum EvalMockError {
    #[error("error decoding request: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error creating scratch file: {0}")]
    Io(#[from] std::io::Error),

    #[error("error running eval: {0}")]
    Subprocess(String),

    #[error("error finding output: {0}")]
    Scan(#[from] ScanError),

    #[error("error encoding report: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("evaluator produced no final report")]
    MissingReport,
}

pub type Result<T> = std::result::Result<T, EvalMockError>;
