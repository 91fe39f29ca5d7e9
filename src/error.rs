use std::io;

use thiserror::Error;

/// Everything in here is fatal: the run aborts at the point of detection and
/// no report is printed.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("trace format error: {0}")]
    TraceFormat(String),

    #[error("cannot read trace: {0}")]
    TraceIo(#[from] io::Error),

    #[error("internal invariant violated: {0}")]
    Invariant(String),
}
