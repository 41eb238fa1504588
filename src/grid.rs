//! Partition of a target image into tile-sized cells.

use itertools::iproduct;

use crate::core::{Dimensions, Rectangle};

/// Which part of the partition a cell belongs to.
///
/// Remainder kinds only occur when the corresponding target dimension is
/// not an exact multiple of the block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// A block-sized cell of the interior grid
    Full,
    /// A narrow cell along the right edge
    Right,
    /// A short cell along the bottom edge
    Bottom,
    /// The bottom-right cell, short and narrow
    Corner,
}

/// One region of the target to be replaced by a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Where in the partition this cell sits
    pub kind: CellKind,
    /// The pixels of the target this cell covers
    pub region: Rectangle,
}

impl Cell {
    fn new(kind: CellKind, x: u32, y: u32, width: u32, height: u32) -> Cell {
        Cell {
            kind,
            region: Rectangle::new(x, y, width, height),
        }
    }
}

/// Partition the target area into cells covering every pixel exactly once.
///
/// Full cells come first in row-major order, followed by the right-edge
/// column, the bottom-edge row, and finally the corner. The width or height
/// of a remainder cell is the leftover of the corresponding dimension
/// modulo `block_size`, strictly between 0 and `block_size`.
pub fn partition((width, height): Dimensions, block_size: u32) -> Vec<Cell> {
    let cols = width / block_size;
    let rows = height / block_size;
    let leftover_width = width % block_size;
    let leftover_height = height % block_size;

    let mut cells: Vec<Cell> = iproduct!(0..rows, 0..cols)
        .map(|(row, col)| {
            Cell::new(
                CellKind::Full,
                col * block_size,
                row * block_size,
                block_size,
                block_size,
            )
        })
        .collect();

    if leftover_width != 0 {
        cells.extend((0..rows).map(|row| {
            Cell::new(
                CellKind::Right,
                cols * block_size,
                row * block_size,
                leftover_width,
                block_size,
            )
        }));
    }

    if leftover_height != 0 {
        cells.extend((0..cols).map(|col| {
            Cell::new(
                CellKind::Bottom,
                col * block_size,
                rows * block_size,
                block_size,
                leftover_height,
            )
        }));
    }

    if leftover_width != 0 && leftover_height != 0 {
        cells.push(Cell::new(
            CellKind::Corner,
            cols * block_size,
            rows * block_size,
            leftover_width,
            leftover_height,
        ));
    }

    cells
}
