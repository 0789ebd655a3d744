#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    #[error("RGBA data size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },
    #[error("Texture dimensions {width}x{height} overflow the addressable size")]
    DimensionsOverflow { width: u32, height: u32 },
    #[error("Failed to create texture: {0}")]
    Creation(String),
    #[error("Texture was not created by this drawer")]
    ForeignTexture,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Clipboard is not available on this platform")]
    ClipboardUnavailable,
    #[error("Clipboard access failed: {0}")]
    Clipboard(String),
}
