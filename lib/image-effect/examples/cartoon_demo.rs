/// Cartoon stylization example

use image::ImageReader;
use image_effect::{Intensity, PhotoEffect};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?;
    let intensity = Intensity::new(45);
    let out = PhotoEffect::Cartoon.apply(&img, intensity)?;
    out.save(output_dir.join("cartoon_effect.png"))?;

    println!("✓ Cartoon effect applied successfully!");
    println!("  sigma_r: {}", intensity.range_sigma());
    println!("  Effect:  tmp/cartoon_effect.png");

    Ok(())
}
