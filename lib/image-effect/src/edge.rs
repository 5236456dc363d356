//! Shared building blocks for the stylization and pencil sketch effects.

use image::{GrayImage, RgbImage, imageops};
use imageproc::{
    filter::{bilateral::GaussianEuclideanColorDistance, bilateral_filter},
    gradients::sobel_gradients,
};

const MAX_WINDOW_RADIUS: f32 = 8.0;

/// Edge preserving smoothing.
///
/// `sigma_s` is the spatial extent in pixels (as in the domain transform
/// filters, where 60 is typical) and `sigma_r` the range extent in `[0, 1]`.
pub(crate) fn edge_preserving_smooth(image: &RgbImage, sigma_s: f32, sigma_r: f32) -> RgbImage {
    let radius = (sigma_s / 10.0).clamp(1.0, MAX_WINDOW_RADIUS) as u8;
    let spatial_sigma = (sigma_s / 10.0).max(1.0);
    let color_sigma = (sigma_r * 255.0).max(1.0);

    log::debug!(
        "bilateral smoothing: radius={radius}, spatial_sigma={spatial_sigma}, color_sigma={color_sigma}"
    );

    bilateral_filter(
        image,
        radius,
        spatial_sigma,
        GaussianEuclideanColorDistance::new(color_sigma),
    )
}

/// Per pixel edge strength in `[0, 1]`, normalized by the strongest edge.
pub(crate) fn edge_strength(image: &RgbImage) -> (GrayImage, Vec<f32>) {
    let luma = imageops::grayscale(image);
    let gradients = sobel_gradients(&luma);

    let max = gradients.pixels().map(|p| p[0]).max().unwrap_or(0);
    let strength = if max == 0 {
        vec![0.0; (gradients.width() * gradients.height()) as usize]
    } else {
        gradients
            .pixels()
            .map(|p| p[0] as f32 / max as f32)
            .collect()
    };

    (luma, strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_flat_image_has_no_edges() {
        let img = RgbImage::from_pixel(10, 10, Rgb([30, 60, 90]));
        let (luma, strength) = edge_strength(&img);

        assert_eq!(luma.dimensions(), (10, 10));
        assert_eq!(strength.len(), 100);
        assert!(strength.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_step_edge_is_strongest_at_boundary() {
        let img = RgbImage::from_fn(12, 6, |x, _| {
            if x < 6 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        let (_, strength) = edge_strength(&img);

        let at = |x: usize, y: usize| strength[y * 12 + x];
        assert_eq!(at(5, 3), 1.0);
        assert_eq!(at(0, 3), 0.0);
        assert_eq!(at(11, 3), 0.0);
    }

    #[test]
    fn test_smoothing_keeps_dimensions() {
        let img = RgbImage::from_fn(20, 15, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 128]));
        let smoothed = edge_preserving_smooth(&img, 60.0, 0.5);
        assert_eq!(smoothed.dimensions(), (20, 15));
    }

    #[test]
    fn test_smoothing_flat_image_stays_flat() {
        let img = RgbImage::from_pixel(8, 8, Rgb([200, 100, 50]));
        let smoothed = edge_preserving_smooth(&img, 60.0, 0.3);

        for (a, b) in smoothed.pixels().zip(img.pixels()) {
            for c in 0..3 {
                assert!((a[c] as i32 - b[c] as i32).abs() <= 1);
            }
        }
    }
}
