use thiserror::Error;

/// Errors from the fallible edges of the sketchpad: export, config and
/// catalog (de)serialization. Drawing itself never fails.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load glyph font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("cannot allocate a {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },
}

/// Result type for sketchpad operations that can fail
pub type SketchResult<T> = Result<T, SketchError>;
