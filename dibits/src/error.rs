/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DibitsError {
    /// The image could not be opened or decoded into a pixel grid.
    #[error("decode error: {0}")]
    Decode(String),

    /// The destination refused bytes.
    #[error("write error: {0}")]
    Write(#[from] io::Error),

    /// Zero or unrepresentable pixel count, bad channel data, or an
    /// out-of-range pixel access.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

impl From<image::ImageError> for DibitsError {
    fn from(error: image::ImageError) -> Self {
        DibitsError::Decode(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DibitsError>;
