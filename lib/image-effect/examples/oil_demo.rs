/// Oil painting effect example
/// Brush size grows by one every ten intensity steps

use image::ImageReader;
use image_effect::{Effect, oil_painting::OilPaintingConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?;

    for intensity in [5u8, 50, 100] {
        let brush_size = OilPaintingConfig::brush_size_for(intensity);
        let out = OilPaintingConfig::new()
            .with_brush_size(brush_size)
            .apply(&img)?;

        let path = output_dir.join(format!("oil_{intensity}.png"));
        out.save(&path)?;
        println!("✓ Oil painting brush {brush_size}: {}", path.display());
    }

    Ok(())
}
