use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Invalid figure dimensions: {width} x {height} pixels")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Chart backend error: {0}")]
    Backend(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to read structure '{path}': {message}", path = path.display())]
    Structure { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
