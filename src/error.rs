//! Crate-wide error type and result alias.

use derive_more::{Display, Error};

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the matrix driver.
///
/// Configuration problems surface at construction, image problems at decode
/// time, and index problems on direct reads. Out-of-bounds *writes* (pixel
/// sets, blits past an edge) are clipped silently and never produce an error.
#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Matrix width and height must both be positive.
    #[display("matrix dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// The LED count must fit the driver's `u16` physical index range.
    #[display("{width}x{height} matrix exceeds the supported LED count")]
    TooManyLeds {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// Brightness must be a finite value in `[0.0, 1.0]`.
    #[display("brightness {brightness} is outside [0.0, 1.0]")]
    BrightnessOutOfRange {
        /// The rejected brightness value.
        brightness: f32,
    },

    /// `width * height` must equal the attached strip's LED count.
    #[display("matrix needs {expected} LEDs but the strip has {actual}")]
    LedCountMismatch {
        /// LED count implied by the matrix dimensions.
        expected: usize,
        /// LED count reported by the transport.
        actual: usize,
    },

    /// The pixel count of an image record is not an exact multiple of its
    /// declared width (or the width is zero).
    #[display("image with {pixel_count} pixels is not a whole number of rows of width {width}")]
    ImageGeometry {
        /// Number of pixels in the record.
        pixel_count: usize,
        /// Declared row width.
        width: usize,
    },

    /// An image record could not be decoded from bytes.
    #[display("image record decode failed")]
    Decode,

    /// Direct pixel read outside the logical grid. Reads are strict where
    /// writes clip, since an out-of-range read is a caller bug.
    #[display("pixel ({x}, {y}) is outside the matrix")]
    PixelOutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// The transport rejected a frame. Surfaced unchanged, never retried.
    #[display("transport write failed")]
    Transport,
}

impl Error {
    /// Wrap a foreign decode failure.
    pub fn decode<E>(_source: E) -> Self
    where
        E: core::fmt::Debug,
    {
        Self::Decode
    }

    /// Wrap a transport implementation's own error.
    ///
    /// Transports call this at the hardware boundary so the refresh path can
    /// hand the failure back to the caller without inspecting it.
    pub fn transport<E>(_source: E) -> Self
    where
        E: core::fmt::Debug,
    {
        Self::Transport
    }
}
