use std::path::PathBuf;
use std::process;

use chromafilter::filter::{FilterKind, sharpen, threshold};
use chromafilter::image_io;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        let names: Vec<&str> = FilterKind::ALL.iter().map(|k| k.name()).collect();
        return Err(format!(
            "usage: chromafilter <input> <output> <filter> [threshold]\n  filters: {}",
            names.join(", ")
        ));
    }
    let input = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);
    let kind: FilterKind = args[2].parse()?;
    let level: u8 = match args.get(3) {
        Some(s) => s
            .parse()
            .map_err(|_| format!("invalid threshold: {s}"))?,
        None => 128,
    };

    let img = image_io::load_image(&input)?;
    let grid = image_io::grid_from_image(&img);
    log::info!(
        "loaded {}x{} image from {}",
        grid.width(),
        grid.height(),
        input.display()
    );

    let result = match kind {
        FilterKind::FixedThreshold => {
            threshold::fixed_threshold(&grid, level).map_err(|e| e.to_string())?
        }
        FilterKind::Otsu => {
            let (chosen, binarized) =
                threshold::otsu_threshold(&grid).map_err(|e| e.to_string())?;
            log::info!("otsu selected threshold {chosen}");
            binarized
        }
        FilterKind::Sharpen => sharpen::sharpen(&grid).map_err(|e| e.to_string())?,
    };

    image_io::save_image(&image_io::image_from_grid(&result), &output)
}
