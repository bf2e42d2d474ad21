use argh::FromArgs;

use rgbfilter::{
    image::{Image, ImageSize, Pixel},
    imgproc::pipeline::{apply_filters, Filter},
};

#[derive(FromArgs)]
/// Run a chain of filters over a synthetic test pattern
struct Args {
    /// the filter to apply: grayscale (g), reflect (r), blur (b) or edges (e); repeatable
    #[argh(option, short = 'f')]
    filter: Vec<Filter>,

    /// the width of the test pattern
    #[argh(option, default = "64")]
    width: usize,

    /// the height of the test pattern
    #[argh(option, default = "48")]
    height: usize,
}

/// A color gradient with a bright square in the middle, so every filter has edges to work on.
fn test_pattern(size: ImageSize) -> Result<Image, Box<dyn std::error::Error>> {
    let data = (0..size.area())
        .map(|i| {
            let (y, x) = (i / size.width, i % size.width);
            let inside = (size.width / 4..3 * size.width / 4).contains(&x)
                && (size.height / 4..3 * size.height / 4).contains(&y);
            if inside {
                Pixel::gray(255)
            } else {
                let r = (255 * x / size.width.max(1)) as u8;
                let g = (255 * y / size.height.max(1)) as u8;
                Pixel::rgb(r, g, 128)
            }
        })
        .collect();
    Ok(Image::new(size, data)?)
}

fn mean_bgr(image: &Image) -> [f64; 3] {
    let n = image.as_slice().len().max(1) as f64;
    let mut sum = [0f64; 3];
    for pixel in image.as_slice() {
        for (acc, v) in sum.iter_mut().zip(pixel.to_bgr()) {
            *acc += v as f64;
        }
    }
    sum.map(|s| s / n)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.filter.is_empty() {
        return Err("at least one --filter is required".into());
    }

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let mut image = test_pattern(size)?;
    log::info!("input {} mean bgr {:?}", size, mean_bgr(&image));

    apply_filters(&mut image, &args.filter);

    let names = args.filter.iter().map(Filter::name).collect::<Vec<_>>();
    log::info!("after {} mean bgr {:?}", names.join(" -> "), mean_bgr(&image));

    println!("{}", names.join(" -> "));
    for row in image.rows_iter().step_by((size.height / 8).max(1)) {
        let line = row
            .iter()
            .step_by((size.width / 16).max(1))
            .map(|p| format!("{:02x}{:02x}{:02x}", p.red, p.green, p.blue))
            .collect::<Vec<_>>();
        println!("{}", line.join(" "));
    }

    Ok(())
}
