use crate::{Effect, ImageEffectError, ImageEffectResult, ensure_not_empty};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, RgbaImage};
use photon_rs::{PhotonImage, effects};

/// Number of luminance bins before division by `dyn_ratio`.
const INTENSITY_LEVELS: f64 = 256.0;

/// Oil painting effect configuration
///
/// Every output pixel takes the mean colour of the most frequent luminance
/// bin inside a square brush around it.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct OilPaintingConfig {
    #[derivative(Default(value = "1"))]
    brush_size: i32,

    #[derivative(Default(value = "1"))]
    dyn_ratio: i32,
}

impl OilPaintingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brush size for a slider intensity: one step per ten units, at least 1.
    pub fn brush_size_for(intensity: u8) -> i32 {
        i32::max(1, intensity as i32 / 10)
    }
}

impl Effect for OilPaintingConfig {
    fn apply(&self, image: &DynamicImage) -> ImageEffectResult<DynamicImage> {
        ensure_not_empty(image)?;

        if self.brush_size < 1 || self.dyn_ratio < 1 {
            return Err(ImageEffectError::InvalidParameter(format!(
                "brush_size={}, dyn_ratio={}",
                self.brush_size, self.dyn_ratio
            )));
        }

        // photon skips row and column 0 when gathering a brush, so a one
        // pixel strip leaves every window empty. Nothing to paint there.
        if image.width() < 2 || image.height() < 2 {
            return Ok(DynamicImage::ImageRgb8(image.to_rgb8()));
        }

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut photon_img = PhotonImage::new(rgba.into_raw(), width, height);
        effects::oil(
            &mut photon_img,
            self.brush_size,
            INTENSITY_LEVELS / self.dyn_ratio as f64,
        );

        let painted = RgbaImage::from_raw(width, height, photon_img.get_raw_pixels())
            .ok_or(ImageEffectError::BufferSize { width, height })?;

        Ok(DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(painted).to_rgb8()))
    }
}
