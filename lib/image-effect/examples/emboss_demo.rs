/// Emboss effect example
/// Grayscale relief lit from the bottom right, intensity used as brightness

use image::ImageReader;
use image_effect::{Intensity, PhotoEffect};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?;

    for intensity in [1, 50, 100] {
        let out = PhotoEffect::Emboss.apply(&img, Intensity::new(intensity))?;
        let path = output_dir.join(format!("emboss_{intensity}.png"));
        out.save(&path)?;
        println!("✓ Emboss intensity {intensity}: {}", path.display());
    }

    Ok(())
}
