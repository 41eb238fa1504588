//! Photo mosaic builder.
//!
//! Rebuilds a target image as a grid of small tile images, choosing for
//! each block of the target the library tile with the lowest mean squared
//! pixel difference.

#![warn(missing_docs)]

pub mod compose;
mod core;
pub mod error;
mod grid;
pub mod scoring;

use image::ImageFormat::Jpeg;
use image::{DynamicImage, ImageResult, RgbImage};
use std::fs::read_dir;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};

use crate::compose::at_size;

pub use crate::compose::compose;
pub use crate::error::{MosaicError, Result};

// Public actions

/// Build and return a mosaic of the library tiles approximating the target.
pub fn mosaic(target_path: &str, lib_path: &str, block_size: u32) -> Result<RgbImage> {
    let target = load_image(Path::new(target_path))?;
    let tiles = load_library(lib_path, block_size)?;

    compose(&target, &tiles, block_size)
}

/// Save the given image as a JPEG
pub fn save(image: &RgbImage, p: &str) -> ImageResult<()> {
    image.save_with_format(p, Jpeg)
}

// Path handling

fn find_paths(path: &str) -> IoResult<Vec<PathBuf>> {
    let path_reader = read_dir(path)?;
    let mut paths: Vec<PathBuf> = path_reader
        .filter_map(|entry| entry.ok())
        .map(|f| f.path())
        .collect();
    // Stable order so tile indices don't depend on the platform
    paths.sort();
    Ok(paths)
}

// Image handling

/// Load the tile library, skipping entries that fail to decode.
///
/// Every tile is brought to `block_size` square on load, so the composer
/// only ever scores equally sized images.
fn load_library(path: &str, block_size: u32) -> Result<Vec<RgbImage>> {
    let paths = find_paths(path)?;
    let tiles = paths
        .iter()
        .filter_map(|p| load_image(p).ok())
        .map(|tile| at_size(tile, block_size, block_size))
        .collect();
    Ok(tiles)
}

/// Load an image from a file
fn load_image(path: &Path) -> ImageResult<RgbImage> {
    image::open(path).map(DynamicImage::into_rgb8)
}

#[cfg(test)]
mod test {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_load_library_sorts_normalizes_and_skips_junk() {
        let dir = tempfile::tempdir().unwrap();
        let red = RgbImage::from_pixel(32, 32, Rgb([255, 0, 0]));
        let blue = RgbImage::from_pixel(16, 16, Rgb([0, 0, 255]));
        red.save(dir.path().join("b_red.png")).unwrap();
        blue.save(dir.path().join("a_blue.png")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let tiles = load_library(dir.path().to_str().unwrap(), 32).unwrap();

        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|t| t.dimensions() == (32, 32)));
        assert_eq!(*tiles[0].get_pixel(0, 0), Rgb([0, 0, 255]));
        assert_eq!(*tiles[1].get_pixel(0, 0), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_load_library_fails_for_missing_directory() {
        let result = load_library("/no/such/directory", 32);

        assert!(matches!(result, Err(MosaicError::Io(_))));
    }
}
