use crate::{
    Effect, ImageEffectResult,
    emboss::EmbossConfig,
    oil_painting::OilPaintingConfig,
    pencil_sketch::{PencilSketchConfig, SketchOutput},
    stylization::StylizationConfig,
};
use image::DynamicImage;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::time::Instant;

/// Spatial window shared by the stylization and pencil sketch effects.
pub const SIGMA_S: f32 = 60.0;

/// Shading applied by both pencil sketch renderings.
pub const SHADE_FACTOR: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PhotoEffect {
    #[default]
    Emboss = 0,
    Cartoon,
    PencilSketchGray,
    PencilSketchColor,
    OilPainting,
}

impl PhotoEffect {
    pub fn name(&self) -> &'static str {
        match self {
            PhotoEffect::Emboss => "Emboss",
            PhotoEffect::Cartoon => "Cartoon",
            PhotoEffect::PencilSketchGray => "Pencil Sketch (Gray)",
            PhotoEffect::PencilSketchColor => "Pencil Sketch (Color)",
            PhotoEffect::OilPainting => "Oil Painting",
        }
    }

    pub fn from_name(name: &str) -> Option<PhotoEffect> {
        Self::all_effects()
            .iter()
            .find(|effect| effect.name() == name)
            .copied()
    }

    /// Selector order of the effects.
    pub fn all_effects() -> &'static [PhotoEffect] {
        &[
            PhotoEffect::Emboss,
            PhotoEffect::Cartoon,
            PhotoEffect::PencilSketchGray,
            PhotoEffect::PencilSketchColor,
            PhotoEffect::OilPainting,
        ]
    }

    /// Builds the transform for `intensity` and runs it against `image`.
    pub fn apply(&self, image: &DynamicImage, intensity: Intensity) -> ImageEffectResult<DynamicImage> {
        let start = Instant::now();

        let result = match self {
            PhotoEffect::Emboss => EmbossConfig::new()
                .with_offset(intensity.value() as i32)
                .apply(image),

            PhotoEffect::Cartoon => StylizationConfig::new()
                .with_sigma_s(SIGMA_S)
                .with_sigma_r(intensity.range_sigma())
                .apply(image),

            PhotoEffect::PencilSketchGray => PencilSketchConfig::new()
                .with_sigma_s(SIGMA_S)
                .with_sigma_r(intensity.range_sigma())
                .with_shade_factor(SHADE_FACTOR)
                .with_output(SketchOutput::Gray)
                .apply(image),

            PhotoEffect::PencilSketchColor => PencilSketchConfig::new()
                .with_sigma_s(SIGMA_S)
                .with_sigma_r(intensity.range_sigma())
                .with_shade_factor(SHADE_FACTOR)
                .with_output(SketchOutput::Color)
                .apply(image),

            PhotoEffect::OilPainting => OilPaintingConfig::new()
                .with_brush_size(OilPaintingConfig::brush_size_for(intensity.value()))
                .with_dyn_ratio(1)
                .apply(image),
        };

        log::debug!(
            "{} with intensity {} took {:.2?}",
            self.name(),
            intensity.value(),
            start.elapsed()
        );

        result
    }
}

/// Effect strength chosen on the slider, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 50;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Range parameter of the edge preserving effects, `0.01` per step.
    pub fn range_sigma(&self) -> f32 {
        (0.01 * self.0 as f32).min(1.0)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i32> for Intensity {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
