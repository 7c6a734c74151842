//! Matrix geometry and color-pipeline configuration.
//!
//! A [`MatrixConfig`] describes everything fixed about a panel: its logical
//! dimensions, how the strip snakes through it, which channel order the LED
//! part expects, and the brightness/orientation corrections to apply on the
//! way out. The driver validates the whole configuration eagerly at
//! construction; a config that passes validation can never produce an
//! out-of-range physical index later.

use crate::error::{Error, Result};

/// Highest LED count the driver supports.
///
/// Physical indices are stored as `u16` in the precomputed mapping table, so a
/// panel may have at most `u16::MAX + 1` LEDs.
pub const MAX_LEDS: usize = u16::MAX as usize + 1;

/// Physical wiring order of LEDs within the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Every row runs left-to-right.
    #[default]
    Row,
    /// Alternating direction per row: even rows left-to-right, odd rows
    /// right-to-left. The common zig-zag wiring of pre-built panels.
    Snake,
}

/// Channel sequence a specific LED part expects per pixel.
///
/// WS2812-family parts usually want [`ColorOrder::Grb`], which is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// red, green, blue
    Rgb,
    /// red, blue, green
    Rbg,
    /// green, red, blue
    #[default]
    Grb,
    /// green, blue, red
    Gbr,
    /// blue, red, green
    Brg,
    /// blue, green, red
    Bgr,
}

impl ColorOrder {
    /// Emit gamma-corrected `[r, g, b]` channel bytes in this order's sequence.
    #[must_use]
    pub const fn reorder(self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }
}

/// Clockwise rotation applied between logical coordinates and physical wiring.
///
/// Rotation compensates for a panel mounted sideways or upside down. It is
/// purely an output transform: drawing code always addresses the unrotated
/// `width x height` grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// 90 degrees clockwise.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees clockwise.
    Deg270,
}

impl Rotation {
    /// True for the rotations that swap the panel's physical width and height.
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

/// Immutable description of a panel's geometry and output pipeline.
///
/// Build one with [`MatrixConfig::new`] and the `with_*` setters, then hand it
/// to [`LedMatrix::new`](crate::LedMatrix::new), which validates it:
///
/// ```
/// use neomatrix::{Layout, MatrixConfig, Rotation};
///
/// let config = MatrixConfig::new(8, 8)
///     .with_layout(Layout::Snake)
///     .with_rotation(Rotation::Deg180)
///     .with_brightness(0.4);
/// assert_eq!(config.led_count(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Logical grid width in pixels (columns).
    pub width: usize,
    /// Logical grid height in pixels (rows).
    pub height: usize,
    /// Physical wiring order.
    pub layout: Layout,
    /// Channel order the LED part expects.
    pub color_order: ColorOrder,
    /// Global brightness scale in `[0.0, 1.0]`, applied before gamma.
    pub brightness: f32,
    /// Mirror columns in the physical output.
    pub flip_horizontal: bool,
    /// Mirror rows in the physical output.
    pub flip_vertical: bool,
    /// Physical mounting rotation.
    pub rotation: Rotation,
}

impl MatrixConfig {
    /// Create a configuration with the given logical dimensions and defaults
    /// for everything else: `Row` layout, `Grb` order, full brightness, no
    /// flips, no rotation.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            layout: Layout::Row,
            color_order: ColorOrder::Grb,
            brightness: 1.0,
            flip_horizontal: false,
            flip_vertical: false,
            rotation: Rotation::Deg0,
        }
    }

    /// Set the wiring layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the output channel order.
    #[must_use]
    pub const fn with_color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Set the global brightness scale. Validated later; out-of-range values
    /// are rejected at construction, never clamped.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Mirror columns in the physical output.
    #[must_use]
    pub const fn with_flip_horizontal(mut self, flip: bool) -> Self {
        self.flip_horizontal = flip;
        self
    }

    /// Mirror rows in the physical output.
    #[must_use]
    pub const fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    /// Set the mounting rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Total number of LEDs the configuration addresses.
    ///
    /// Meaningful only for validated configs; saturates rather than wrapping
    /// so a bogus config cannot alias a small one.
    #[must_use]
    pub const fn led_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Check every construction invariant.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroDimension`] if either dimension is zero
    /// - [`Error::TooManyLeds`] if `width * height` exceeds [`MAX_LEDS`]
    /// - [`Error::BrightnessOutOfRange`] if brightness is not a finite value
    ///   in `[0.0, 1.0]`
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        match self.width.checked_mul(self.height) {
            Some(count) if count <= MAX_LEDS => {}
            _ => {
                return Err(Error::TooManyLeds {
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if !self.brightness.is_finite() || !(0.0..=1.0).contains(&self.brightness) {
            return Err(Error::BrightnessOutOfRange {
                brightness: self.brightness,
            });
        }
        Ok(())
    }
}
