use crate::{
    Effect, ImageEffectError, ImageEffectResult,
    edge::{edge_preserving_smooth, edge_strength},
    ensure_not_empty,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, RgbImage};

/// Cartoon-like stylization configuration
///
/// Flattens colour regions with an edge preserving filter and darkens
/// the image along the gradients of the flattened result.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct StylizationConfig {
    #[derivative(Default(value = "60.0"))]
    sigma_s: f32, // [0, 200]

    #[derivative(Default(value = "0.45"))]
    sigma_r: f32, // [0, 1]
}

impl StylizationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for StylizationConfig {
    fn apply(&self, image: &DynamicImage) -> ImageEffectResult<DynamicImage> {
        ensure_not_empty(image)?;

        if !(0.0..=200.0).contains(&self.sigma_s) || !(0.0..=1.0).contains(&self.sigma_r) {
            return Err(ImageEffectError::InvalidParameter(format!(
                "sigma_s={}, sigma_r={}",
                self.sigma_s, self.sigma_r
            )));
        }

        let smoothed = edge_preserving_smooth(&image.to_rgb8(), self.sigma_s, self.sigma_r);
        let (_, strength) = edge_strength(&smoothed);

        let mut result: RgbImage = smoothed;
        for (pixel, edge) in result.pixels_mut().zip(strength) {
            let factor = 1.0 - edge;
            pixel[0] = (pixel[0] as f32 * factor).clamp(0.0, 255.0) as u8;
            pixel[1] = (pixel[1] as f32 * factor).clamp(0.0, 255.0) as u8;
            pixel[2] = (pixel[2] as f32 * factor).clamp(0.0, 255.0) as u8;
        }

        Ok(DynamicImage::ImageRgb8(result))
    }
}
