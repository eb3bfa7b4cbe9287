use crate::error::Result;
use crate::math::Point2;
use crate::topology::check_limit;

/// An 8-bit RGBA colour.
pub type Rgba = [u8; 4];

/// Default face colours, cycled by face index.
const DEFAULT_COLORS: [Rgba; 6] = [
    [255, 0, 0, 255],
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [0, 0, 255, 255],
];

/// Largest accepted face texture edge, in pixels.
pub const MAX_TEXTURE_SIZE: usize = 2048;

/// Sizing of the per-face texture buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Edge length in pixels of each square face texture, in
    /// `1..=MAX_TEXTURE_SIZE`.
    pub size: usize,
}

impl TextureParams {
    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`](crate::error::OperationError::LimitExceeded)
    /// if `size > MAX_TEXTURE_SIZE`.
    pub fn check(&self) -> Result<()> {
        check_limit("texture size", self.size, MAX_TEXTURE_SIZE)
    }
}

impl Default for TextureParams {
    fn default() -> Self {
        Self { size: 64 }
    }
}

/// Converts a unit-range RGB triple to opaque RGBA, clamping each channel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgba_from_unit(rgb: [f64; 3]) -> Rgba {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 255]
}

/// A square RGBA8 pixel buffer backing one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceTexture {
    size: usize,
    pixels: Vec<u8>,
}

impl FaceTexture {
    /// Creates a `size` x `size` texture filled with `color`.
    ///
    /// `size` is clamped to `1..=MAX_TEXTURE_SIZE`.
    #[must_use]
    pub fn new(size: usize, color: Rgba) -> Self {
        let size = size.clamp(1, MAX_TEXTURE_SIZE);
        Self {
            size,
            pixels: color.repeat(size * size),
        }
    }

    /// Creates the default texture for face `face`.
    #[must_use]
    pub fn for_face(face: usize, params: &TextureParams) -> Self {
        Self::new(params.size, DEFAULT_COLORS[face % DEFAULT_COLORS.len()])
    }

    /// Edge length in pixels.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw row-major RGBA bytes, ready for upload.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Colour of the pixel at `(x, y)`, if it exists.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = (y * self.size + x) * 4;
        self.pixels.get(i..i + 4)?.try_into().ok()
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Pixel under a face UV coordinate, clamped to the texture.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn texel(&self, uv: &Point2) -> (usize, usize) {
        let max = self.size - 1;
        let to_px = |c: f64| ((c.clamp(0.0, 1.0) * self.size as f64) as usize).min(max);
        (to_px(uv.x), to_px(uv.y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{OperationError, PolyformError};

    #[test]
    fn default_colours_cycle() {
        let params = TextureParams { size: 2 };
        assert_eq!(FaceTexture::for_face(0, &params).pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(FaceTexture::for_face(3, &params).pixel(1, 1), Some([0, 255, 0, 255]));
        assert_eq!(FaceTexture::for_face(5, &params).pixel(0, 1), Some([0, 0, 255, 255]));
        assert_eq!(FaceTexture::for_face(6, &params).pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut tex = FaceTexture::new(4, [0, 0, 0, 255]);
        tex.fill(rgba_from_unit([0.5, 2.0, -1.0]));
        assert_eq!(tex.pixels().len(), 64);
        assert!(tex.pixels().chunks_exact(4).all(|px| px == [127, 255, 0, 255]));
    }

    #[test]
    fn out_of_range_pixel() {
        let tex = FaceTexture::new(4, [0; 4]);
        assert_eq!(tex.pixel(4, 0), None);
    }

    #[test]
    fn texel_clamps_to_last_pixel() {
        let tex = FaceTexture::new(64, [0; 4]);
        assert_eq!(tex.texel(&Point2::new(0.5, 0.0)), (32, 0));
        assert_eq!(tex.texel(&Point2::new(1.0, 1.5)), (63, 63));
    }

    #[test]
    fn zero_size_is_widened() {
        assert_eq!(FaceTexture::new(0, [0; 4]).size(), 1);
    }

    #[test]
    fn oversized_texture_is_clamped() {
        let tex = FaceTexture::new(1 << 33, [0; 4]);
        assert_eq!(tex.size(), MAX_TEXTURE_SIZE);
        assert_eq!(tex.pixels().len(), MAX_TEXTURE_SIZE * MAX_TEXTURE_SIZE * 4);
    }

    #[test]
    fn params_check_rejects_oversized_textures() {
        assert!(TextureParams::default().check().is_ok());
        assert!(TextureParams { size: MAX_TEXTURE_SIZE }.check().is_ok());

        let err = TextureParams { size: 1 << 33 }.check().unwrap_err();
        assert!(matches!(
            err,
            PolyformError::Operation(OperationError::LimitExceeded {
                what: "texture size",
                ..
            })
        ));
    }
}
