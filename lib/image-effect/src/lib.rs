pub mod emboss;
pub mod oil_painting;
pub mod pencil_sketch;
pub mod photo_effect;
pub mod stylization;

mod edge;

use image::DynamicImage;

pub use photo_effect::{Intensity, PhotoEffect};

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A transform from a source image to a freshly allocated result.
///
/// The source is borrowed so an effect can never modify it.
pub trait Effect {
    fn apply(&self, image: &DynamicImage) -> ImageEffectResult<DynamicImage>;
}

pub(crate) fn ensure_not_empty(image: &DynamicImage) -> ImageEffectResult<()> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ImageEffectError::EmptyImage { width, height });
    }

    Ok(())
}
