use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("data")?;

    // 800x600 gradients with a few flat blocks so every effect has edges to find
    let img = RgbImage::from_fn(800, 600, |x, y| {
        if (200..360).contains(&x) && (150..310).contains(&y) {
            return Rgb([230, 60, 40]);
        }

        if (480..640).contains(&x) && (300..460).contains(&y) {
            return Rgb([30, 90, 200]);
        }

        Rgb([
            (x * 255 / 800) as u8,
            (y * 255 / 600) as u8,
            ((x + y) * 255 / 1400) as u8,
        ])
    });

    img.save("data/test.png")?;
    println!("Created data/test.png");

    Ok(())
}
