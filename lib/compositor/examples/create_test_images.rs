use image::Rgb;
use image::RgbImage;

fn main() {
    std::fs::create_dir_all("data").unwrap();

    // Foreground: a colorful gradient with a green-screen panel in the middle
    let mut fg = RgbImage::new(640, 480);
    for y in 0..480 {
        for x in 0..640 {
            let r = (x * 255 / 640) as u8;
            let g = (y * 255 / 480) as u8;
            let b = ((x + y) * 255 / 1120) as u8;
            fg.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
    for y in 120..360 {
        for x in 160..480 {
            fg.put_pixel(x, y, Rgb([0, 255, 0]));
        }
    }
    fg.save("data/fg.png").unwrap();
    println!("Created data/fg.png");

    // Background: a blue-to-orange gradient of the same size
    let mut bg = RgbImage::new(640, 480);
    for y in 0..480 {
        for x in 0..640 {
            let t = x * 255 / 640;
            bg.put_pixel(x, y, Rgb([t as u8, (t / 2) as u8, (255 - t) as u8]));
        }
    }
    bg.save("data/bg.png").unwrap();
    println!("Created data/bg.png");
}
