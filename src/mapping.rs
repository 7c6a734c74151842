//! Mapping from logical pixel coordinates to physical LED indices.
//!
//! Logical coordinates use a screen-style convention: `(0, 0)` is the top-left
//! corner, `x` increases to the right, `y` increases downward, always within
//! the unrotated `width x height` grid. The physical index is the LED's
//! position along the wire.
//!
//! [`physical_index`] is the pure reference mapping. [`Mapping`] inverts the
//! configuration into a flat lookup table once at construction so frame
//! conversion stays O(1) per pixel.

use alloc::vec::Vec;

use crate::config::{Layout, MatrixConfig, Rotation};

/// Map a logical pixel coordinate to its physical LED index.
///
/// The transform applies, in order: the mounting rotation (which moves the
/// coordinate into the post-rotation bounding box, swapping the box's
/// dimensions for 90/270), the horizontal/vertical flips within that box, and
/// finally the wiring layout's index arithmetic.
///
/// For every valid configuration this is a bijection from the logical grid
/// onto `0..width * height`.
///
/// # Panics
///
/// Panics if `(x, y)` is outside the logical grid. Callers that want clipping
/// or strict errors check bounds first (see
/// [`Framebuffer`](crate::Framebuffer)).
#[must_use]
pub fn physical_index(x: usize, y: usize, config: &MatrixConfig) -> usize {
    let width = config.width;
    let height = config.height;
    assert!(x < width, "x must be within the matrix width");
    assert!(y < height, "y must be within the matrix height");

    // Rotation maps into the post-rotation box; 90/270 swap its dimensions.
    let (mut px, mut py) = match config.rotation {
        Rotation::Deg0 => (x, y),
        Rotation::Deg90 => (height - 1 - y, x),
        Rotation::Deg180 => (width - 1 - x, height - 1 - y),
        Rotation::Deg270 => (y, width - 1 - x),
    };
    let (phys_width, phys_height) = if config.rotation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    };

    if config.flip_horizontal {
        px = phys_width - 1 - px;
    }
    if config.flip_vertical {
        py = phys_height - 1 - py;
    }

    match config.layout {
        Layout::Row => py * phys_width + px,
        Layout::Snake => {
            if py % 2 == 0 {
                py * phys_width + px
            } else {
                py * phys_width + (phys_width - 1 - px)
            }
        }
    }
}

/// Precomputed logical-cell to physical-index table for one configuration.
///
/// Entry `y * width + x` holds the physical index for logical `(x, y)`.
/// Indices are stored as `u16`, which the configuration validation guarantees
/// is wide enough.
#[derive(Clone, Debug)]
pub struct Mapping {
    by_cell: Vec<u16>,
}

impl Mapping {
    /// Build the table for a validated configuration.
    #[must_use]
    pub fn new(config: &MatrixConfig) -> Self {
        let mut by_cell = Vec::with_capacity(config.led_count());
        for y in 0..config.height {
            for x in 0..config.width {
                #[allow(clippy::cast_possible_truncation)]
                by_cell.push(physical_index(x, y, config) as u16);
            }
        }
        Self { by_cell }
    }

    /// Physical index for the logical cell `y * width + x`.
    #[must_use]
    pub fn physical(&self, cell: usize) -> usize {
        usize::from(self.by_cell[cell])
    }

    /// Number of mapped cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_cell.len()
    }

    /// True when the mapping covers no cells. Unreachable for validated
    /// configurations, provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }
}
