//! Cell-by-cell assembly of the output mosaic.

use image::{imageops, RgbImage};
use itertools::Itertools;

use crate::error::{MosaicError, Result};
use crate::grid::{partition, CellKind};
use crate::scoring::score;

/// Build a mosaic of `tiles` approximating `target`, one cell at a time.
///
/// Full cells take the winning tile unmodified. Remainder cells along the
/// right and bottom edges are brought up to block size for scoring, and
/// the winning tile is brought down to the cell's true dimensions before
/// pasting. The output always has the exact dimensions of the target.
///
/// # Errors
///
/// Fails before any cell is processed if `tiles` is empty or `block_size`
/// is zero.
pub fn compose(target: &RgbImage, tiles: &[RgbImage], block_size: u32) -> Result<RgbImage> {
    if tiles.is_empty() {
        return Err(MosaicError::EmptyLibrary);
    }
    if block_size == 0 {
        return Err(MosaicError::ZeroBlockSize);
    }

    let (width, height) = target.dimensions();
    let mut canvas = RgbImage::new(width, height);

    for cell in partition((width, height), block_size) {
        let r = cell.region;
        let crop = imageops::crop_imm(target, r.x, r.y, r.width, r.height).to_image();
        let sample = match cell.kind {
            CellKind::Full => crop,
            CellKind::Right | CellKind::Bottom | CellKind::Corner => {
                at_size(crop, block_size, block_size)
            }
        };

        let winner = best_tile(&sample, tiles);

        let patch = at_size(tiles[winner].clone(), r.width, r.height);
        imageops::replace(&mut canvas, &patch, i64::from(r.x), i64::from(r.y));
    }

    Ok(canvas)
}

/// Index of the first tile scoring lowest against the sample.
///
/// Ties go to the lowest index. `tiles` must not be empty.
fn best_tile(sample: &RgbImage, tiles: &[RgbImage]) -> usize {
    tiles
        .iter()
        .map(|tile| score(sample, tile))
        .position_min_by(f64::total_cmp)
        .unwrap()
}

/// Resize an image if necessary
pub(crate) fn at_size(img: RgbImage, w: u32, h: u32) -> RgbImage {
    if img.dimensions() == (w, h) {
        img
    } else {
        imageops::thumbnail(&img, w, h)
    }
}
