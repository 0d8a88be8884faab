/// Chroma-key demo
/// Composites the test foreground over the test background at several
/// threshold values. Run the create_test_images example first.

use anyhow::Result;
use compositor::chroma_key::ChromaKeyConfig;
use compositor::{Composite, io};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let foreground = io::load_image("data/fg.png")?;
    let background = io::load_image("data/bg.png")?;

    let thresholds = [0, 50, 100, 150];

    for threshold in thresholds {
        let config = ChromaKeyConfig::new()
            .with_key_color([0, 255, 0])
            .with_threshold(threshold);

        let output = config.composite(&foreground, &background)?;

        let filename = format!("composite_{}.png", threshold);
        io::save_image(&output, output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All composites generated successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
