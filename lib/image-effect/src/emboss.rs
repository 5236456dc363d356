use crate::{Effect, ImageEffectResult, ensure_not_empty};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, GrayImage, Luma};

/// Directional gradient kernel: bottom-right neighbour minus top-left neighbour.
pub const EMBOSS_KERNEL: [[i32; 3]; 3] = [[-1, 0, 0], [0, 0, 0], [0, 0, 1]];

/// Emboss effect configuration
///
/// The image is converted to 8-bit grayscale, correlated with
/// [`EMBOSS_KERNEL`], shifted by `offset` and clamped to `[0, 255]`.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct EmbossConfig {
    #[derivative(Default(value = "50"))]
    offset: i32,
}

impl EmbossConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for EmbossConfig {
    fn apply(&self, image: &DynamicImage) -> ImageEffectResult<DynamicImage> {
        ensure_not_empty(image)?;

        let gray = to_gray(image);
        let (width, height) = gray.dimensions();
        let mut result = GrayImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let mut sum = 0i32;

                for (ky, row) in EMBOSS_KERNEL.iter().enumerate() {
                    for (kx, weight) in row.iter().enumerate() {
                        if *weight == 0 {
                            continue;
                        }

                        let py = reflect_101(y as i64 + ky as i64 - 1, height);
                        let px = reflect_101(x as i64 + kx as i64 - 1, width);
                        sum += weight * gray.get_pixel(px, py)[0] as i32;
                    }
                }

                let val = (sum + self.offset).clamp(0, 255) as u8;
                result.put_pixel(x, y, Luma([val]));
            }
        }

        Ok(DynamicImage::ImageLuma8(result))
    }
}

/// BT.601 luma in 14-bit fixed point, rounded half up.
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    const R2Y: u32 = 4899;
    const G2Y: u32 = 9617;
    const B2Y: u32 = 1868;
    const SHIFT: u32 = 14;

    ((r as u32 * R2Y + g as u32 * G2Y + b as u32 * B2Y + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

fn to_gray(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        _ => {
            let rgb = image.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let p = rgb.get_pixel(x, y);
                Luma([luma_bt601(p[0], p[1], p[2])])
            })
        }
    }
}

// Mirror without repeating the edge sample: -1 -> 1, len -> len - 2.
fn reflect_101(index: i64, len: u32) -> u32 {
    let len = len as i64;
    if len == 1 {
        return 0;
    }

    let mut i = index;
    while i < 0 || i >= len {
        if i < 0 {
            i = -i;
        } else {
            i = 2 * len - i - 2;
        }
    }

    i as u32
}
