//! Error type for report conversion.
//!
//! The scan itself never fails on malformed report text. Errors only come
//! from the boundary: reading the input, creating the output, or writing a
//! line to a sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not open input file: {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not create output file: {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output")]
    Write(#[from] io::Error),
}
