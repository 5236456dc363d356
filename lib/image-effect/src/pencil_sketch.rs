use crate::{
    Effect, ImageEffectError, ImageEffectResult,
    edge::{edge_preserving_smooth, edge_strength},
    ensure_not_empty,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};

/// Which of the two sketch renderings is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchOutput {
    Gray,
    Color,
}

/// Pencil sketch effect configuration
///
/// Strokes follow the gradients of the edge preserved image. The grayscale
/// rendering is the stroke layer itself; the colour rendering uses it as
/// luma and keeps the chroma of the smoothed image.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PencilSketchConfig {
    #[derivative(Default(value = "60.0"))]
    sigma_s: f32, // [0, 200]

    #[derivative(Default(value = "0.07"))]
    sigma_r: f32, // [0, 1]

    #[derivative(Default(value = "0.02"))]
    shade_factor: f32, // [0, 0.1]

    #[derivative(Default(value = "SketchOutput::Gray"))]
    output: SketchOutput,
}

impl PencilSketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> ImageEffectResult<()> {
        if !(0.0..=200.0).contains(&self.sigma_s)
            || !(0.0..=1.0).contains(&self.sigma_r)
            || !(0.0..=0.1).contains(&self.shade_factor)
        {
            return Err(ImageEffectError::InvalidParameter(format!(
                "sigma_s={}, sigma_r={}, shade_factor={}",
                self.sigma_s, self.sigma_r, self.shade_factor
            )));
        }

        Ok(())
    }
}

impl Effect for PencilSketchConfig {
    fn apply(&self, image: &DynamicImage) -> ImageEffectResult<DynamicImage> {
        ensure_not_empty(image)?;
        self.validate()?;

        let smoothed = edge_preserving_smooth(&image.to_rgb8(), self.sigma_s, self.sigma_r);
        let (luma, strength) = edge_strength(&smoothed);

        let (width, height) = smoothed.dimensions();
        let tones = luma
            .pixels()
            .zip(strength)
            .map(|(l, edge)| pencil_tone(l[0], edge, self.shade_factor))
            .collect::<Vec<_>>();

        match self.output {
            SketchOutput::Gray => GrayImage::from_raw(width, height, tones)
                .map(DynamicImage::ImageLuma8)
                .ok_or(ImageEffectError::BufferSize { width, height }),
            SketchOutput::Color => {
                let mut result = RgbImage::new(width, height);
                for ((out, src), tone) in result.pixels_mut().zip(smoothed.pixels()).zip(tones) {
                    *out = replace_luma(src, tone);
                }

                Ok(DynamicImage::ImageRgb8(result))
            }
        }
    }
}

// Paper is white, strokes are dark and dark regions get a light hatch.
fn pencil_tone(luma: u8, edge: f32, shade_factor: f32) -> u8 {
    let darkness = 1.0 - luma as f32 / 255.0;
    let tone = (1.0 - edge) * (1.0 - shade_factor * darkness * 10.0);
    (tone * 255.0).clamp(0.0, 255.0).round() as u8
}

// Full range BT.601 YCbCr with Y swapped out.
fn replace_luma(pixel: &Rgb<u8>, y: u8) -> Rgb<u8> {
    let (r, g, b) = (pixel[0] as f32, pixel[1] as f32, pixel[2] as f32);
    let cb = -0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let cr = 0.5 * r - 0.418_688 * g - 0.081_312 * b;
    let y = y as f32;

    let to_u8 = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    Rgb([
        to_u8(y + 1.402 * cr),
        to_u8(y - 0.344_136 * cb - 0.714_136 * cr),
        to_u8(y + 1.772 * cb),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(20, 12, |x, y| {
            if x < 10 {
                Rgb([200, 40, 40])
            } else {
                Rgb([(y * 20) as u8, 180, 220])
            }
        }))
    }

    #[test]
    fn test_pencil_tone() {
        assert_eq!(pencil_tone(255, 0.0, 0.02), 255);
        assert_eq!(pencil_tone(255, 1.0, 0.02), 0);
        assert_eq!(pencil_tone(0, 0.0, 0.0), 255);
        assert_eq!(pencil_tone(0, 0.0, 0.02), 204);
    }

    #[test]
    fn test_replace_luma_keeps_gray_gray() {
        assert_eq!(replace_luma(&Rgb([90, 90, 90]), 200), Rgb([200, 200, 200]));
        assert_eq!(replace_luma(&Rgb([0, 0, 0]), 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_gray_sketch_is_single_channel() {
        let out = PencilSketchConfig::new()
            .with_output(SketchOutput::Gray)
            .apply(&sample())
            .unwrap();

        assert!(matches!(out, DynamicImage::ImageLuma8(_)));
        assert_eq!((out.width(), out.height()), (20, 12));
    }

    #[test]
    fn test_color_sketch_is_three_channel() {
        let out = PencilSketchConfig::new()
            .with_output(SketchOutput::Color)
            .apply(&sample())
            .unwrap();

        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
        assert_eq!((out.width(), out.height()), (20, 12));
    }

    #[test]
    fn test_sketch_draws_stroke_on_boundary() {
        let out = PencilSketchConfig::new()
            .with_sigma_r(0.01)
            .apply(&sample())
            .unwrap()
            .to_luma8();

        let stroke = out.get_pixel(9, 6)[0];
        let paper = out.get_pixel(2, 6)[0];
        assert!(stroke < paper, "stroke={stroke}, paper={paper}");
    }

    #[test]
    fn test_sketch_rejects_bad_shade() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        assert!(
            PencilSketchConfig::new()
                .with_shade_factor(0.5)
                .apply(&img)
                .is_err()
        );
    }
}
