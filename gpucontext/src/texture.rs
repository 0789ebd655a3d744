use log::trace;

use crate::error::TextureError;

/// Bytes per RGBA8 pixel.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Read-only view of a GPU texture, shared across packages.
pub trait Texture {
    fn width(&self) -> u32;

    fn height(&self) -> u32;
}

impl Texture for wgpu::Texture {
    fn width(&self) -> u32 {
        wgpu::Texture::width(self)
    }

    fn height(&self) -> u32 {
        wgpu::Texture::height(self)
    }
}

/// Creates textures from raw pixel data.
pub trait TextureCreator {
    /// `data` must hold `width * height * 4` bytes of RGBA8.
    /// Implementations should check it with [`validate_rgba_len`].
    fn new_texture_from_rgba(
        &self,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<Box<dyn Texture>, TextureError>;
}

/// Draws textures for 2D rendering.
pub trait TextureDrawer {
    /// Draw `texture` with its top-left corner at (`x`, `y`) in pixels, y pointing down.
    ///
    /// The texture must come from this drawer's [`TextureDrawer::texture_creator`].
    fn draw_texture(&self, texture: &dyn Texture, x: f32, y: f32) -> Result<(), TextureError>;

    fn texture_creator(&self) -> &dyn TextureCreator;
}

/// Check that `data` is exactly `width * height * 4` bytes.
pub fn validate_rgba_len(width: u32, height: u32, data: &[u8]) -> Result<(), TextureError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(RGBA_BYTES_PER_PIXEL))
        .ok_or(TextureError::DimensionsOverflow { width, height })?;

    if data.len() != expected {
        trace!(
            "validate_rgba_len: rejected {width}x{height} upload, expected={expected} actual={}",
            data.len()
        );
        return Err(TextureError::DataSizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
