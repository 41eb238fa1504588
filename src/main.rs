use mosaic::{mosaic, save};
use std::env;

/// Block size used when none is given on the command line
const DEFAULT_BLOCK_SIZE: u32 = 32;

/// Create a photo mosaic
///
/// # Usage
///
/// mosaic <target> <tiles_dir> [block_size] > output.jpg
///
/// # Panics
///
/// Panics if the target or library path is not supplied as argument.
fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(target_path) = args.get(1) else {
        panic!("No target image path given")
    };
    let Some(lib_path) = args.get(2) else {
        panic!("No library images path given")
    };
    let block_size = match args.get(3) {
        Some(raw) => raw.parse().expect("Invalid block size"),
        None => DEFAULT_BLOCK_SIZE,
    };

    let Ok(output_image) = mosaic(target_path, lib_path, block_size) else {
        panic!("Error building")
    };
    let Ok(_) = save(&output_image, "/dev/stdout") else {
        panic!("Error saving")
    };
}
