//! Image session state
//!
//! Holds the loaded source image and the latest processed result. Every
//! operation either succeeds or leaves both slots untouched.

use image::{DynamicImage, ImageError, ImageReader};
use image_effect::{ImageEffectError, Intensity, PhotoEffect};
use std::path::{Path, PathBuf};

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("Failed to load image `{}`: {source}", path.display())]
    Load { path: PathBuf, source: ImageError },

    #[error("Please load an image first.")]
    NoSource,

    #[error("No processed image to save.")]
    NoResult,

    #[error("Failed to apply {effect}: {source}")]
    Effect {
        effect: &'static str,
        source: ImageEffectError,
    },

    #[error("Failed to save image `{}`: {source}", path.display())]
    Save { path: PathBuf, source: ImageError },
}

#[derive(Debug, Default)]
pub struct Session {
    source: Option<DynamicImage>,
    result: Option<DynamicImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&DynamicImage> {
        self.source.as_ref()
    }

    pub fn result(&self) -> Option<&DynamicImage> {
        self.result.as_ref()
    }

    /// Decodes `path` into the source slot and copies it into the result slot.
    pub fn load(&mut self, path: &Path) -> SessionResult<&DynamicImage> {
        let image = decode(path).map_err(|source| SessionError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "loaded `{}` ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        self.result = Some(image.clone());
        Ok(self.source.insert(image))
    }

    /// Replaces the result with `effect` applied to the source.
    pub fn apply(
        &mut self,
        effect: PhotoEffect,
        intensity: Intensity,
    ) -> SessionResult<&DynamicImage> {
        let source = self.source.as_ref().ok_or(SessionError::NoSource)?;

        let image = effect
            .apply(source, intensity)
            .map_err(|source| SessionError::Effect {
                effect: effect.name(),
                source,
            })?;

        log::info!(
            "applied {} with intensity {}",
            effect.name(),
            intensity.value()
        );

        Ok(self.result.insert(image))
    }

    /// Restores the result to a copy of the source. Returns the source, if any.
    pub fn reset(&mut self) -> Option<&DynamicImage> {
        let source = self.source.as_ref()?;
        self.result = Some(source.clone());
        Some(source)
    }

    pub fn ensure_result(&self) -> SessionResult<&DynamicImage> {
        self.result.as_ref().ok_or(SessionError::NoResult)
    }

    /// Encodes the result to `path`; the format follows the extension.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        let result = self.ensure_result()?;

        result.save(path).map_err(|source| SessionError::Save {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "saved {}x{} image to `{}`",
            result.width(),
            result.height(),
            path.display()
        );

        Ok(())
    }
}

/// Decodes an image file as 8-bit, 3-channel colour.
pub fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    Ok(match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    })
}

pub fn intensity_label(intensity: Intensity) -> String {
    format!("Intensity: {}", intensity.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    fn write_sample(dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        let img = RgbImage::from_fn(32, 20, |x, y| {
            Rgb([(x * 8) as u8, (y * 12) as u8, ((x + y) * 4) as u8])
        });
        img.save(&path)?;
        Ok(path)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.source().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_load_sets_source_and_result() -> Result<()> {
        let dir = tempdir()?;
        let path = write_sample(dir.path(), "sample.png")?;

        let mut session = Session::new();
        let loaded = session.load(&path)?;
        assert_eq!((loaded.width(), loaded.height()), (32, 20));

        assert_eq!(session.source(), session.result());
        assert!(matches!(session.source(), Some(DynamicImage::ImageRgb8(_))));
        Ok(())
    }

    #[test]
    fn test_load_gray_file_becomes_color() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(4, 3, Luma([77])).save(&path)?;

        let mut session = Session::new();
        let loaded = session.load(&path)?;
        assert!(matches!(loaded, DynamicImage::ImageRgb8(_)));
        assert_eq!(loaded.to_rgb8().get_pixel(0, 0), &Rgb([77, 77, 77]));
        Ok(())
    }

    #[test]
    fn test_load_failure_keeps_state() -> Result<()> {
        let dir = tempdir()?;
        let good = write_sample(dir.path(), "good.png")?;
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"definitely not a png")?;

        let mut session = Session::new();
        assert!(matches!(
            session.load(&corrupt),
            Err(SessionError::Load { .. })
        ));
        assert!(session.source().is_none());
        assert!(session.result().is_none());

        session.load(&good)?;
        session.apply(PhotoEffect::Emboss, Intensity::new(20))?;
        let source_before = session.source().cloned();
        let result_before = session.result().cloned();

        assert!(session.load(&dir.path().join("missing.png")).is_err());
        assert!(session.load(&corrupt).is_err());
        assert_eq!(session.source().cloned(), source_before);
        assert_eq!(session.result().cloned(), result_before);
        Ok(())
    }

    #[test]
    fn test_apply_without_source() {
        let mut session = Session::new();

        for effect in PhotoEffect::all_effects() {
            assert!(matches!(
                session.apply(*effect, Intensity::default()),
                Err(SessionError::NoSource)
            ));
        }
        assert!(session.result().is_none());
    }

    #[test]
    fn test_apply_does_not_stack() -> Result<()> {
        let dir = tempdir()?;
        let path = write_sample(dir.path(), "sample.png")?;

        let mut session = Session::new();
        session.load(&path)?;
        let source = session.source().cloned();

        let first = session.apply(PhotoEffect::Emboss, Intensity::new(50))?.clone();
        let second = session.apply(PhotoEffect::Emboss, Intensity::new(50))?.clone();

        assert_eq!(first, second);
        assert_eq!(session.source().cloned(), source);
        Ok(())
    }

    #[test]
    fn test_reset_restores_source() -> Result<()> {
        let dir = tempdir()?;
        let path = write_sample(dir.path(), "sample.png")?;

        let mut session = Session::new();
        assert!(session.reset().is_none());

        session.load(&path)?;
        session.apply(PhotoEffect::Emboss, Intensity::new(30))?;
        assert_ne!(session.source(), session.result());

        assert!(session.reset().is_some());
        assert_eq!(
            session.source().map(|i| i.as_bytes().to_vec()),
            session.result().map(|i| i.as_bytes().to_vec())
        );
        Ok(())
    }

    #[test]
    fn test_save_without_result() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("processed_image.jpg");

        let session = Session::new();
        assert!(matches!(session.save(&path), Err(SessionError::NoResult)));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_save_writes_decodable_file() -> Result<()> {
        let dir = tempdir()?;
        let path = write_sample(dir.path(), "sample.png")?;

        let mut session = Session::new();
        session.load(&path)?;
        session.apply(PhotoEffect::Emboss, Intensity::new(50))?;

        for name in ["processed_image.jpg", "processed_image.png", "processed_image.bmp"] {
            let out = dir.path().join(name);
            session.save(&out)?;

            let decoded = decode(&out)?;
            assert_eq!((decoded.width(), decoded.height()), (32, 20), "{name}");
        }
        Ok(())
    }

    #[test]
    fn test_save_failure_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let path = write_sample(dir.path(), "sample.png")?;

        let mut session = Session::new();
        session.load(&path)?;

        let missing_dir = dir.path().join("no-such-dir").join("out.png");
        assert!(matches!(
            session.save(&missing_dir),
            Err(SessionError::Save { .. })
        ));

        let no_extension = dir.path().join("out");
        assert!(matches!(
            session.save(&no_extension),
            Err(SessionError::Save { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_intensity_label() {
        assert_eq!(intensity_label(Intensity::new(50)), "Intensity: 50");
        assert_eq!(intensity_label(Intensity::new(1)), "Intensity: 1");
        assert_eq!(intensity_label(Intensity::new(100)), "Intensity: 100");
        assert_eq!(intensity_label(Intensity::new(1000)), "Intensity: 100");
    }
}
