/// Pencil sketch example, gray and color renderings

use image::ImageReader;
use image_effect::{Intensity, PhotoEffect};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?;

    for (effect, file) in [
        (PhotoEffect::PencilSketchGray, "pencil_gray.png"),
        (PhotoEffect::PencilSketchColor, "pencil_color.png"),
    ] {
        let out = effect.apply(&img, Intensity::new(10))?;
        out.save(output_dir.join(file))?;
        println!("✓ {}: tmp/{file}", effect.name());
    }

    Ok(())
}
