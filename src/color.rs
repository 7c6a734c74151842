//! Color pipeline: brightness scaling, gamma correction, channel ordering,
//! and RGB565 expansion.
//!
//! The pipeline for every output channel is fixed: scale by the configured
//! brightness (rounded to the nearest integer), then look the result up in the
//! gamma table, then emit the three corrected channels in the part's
//! [`ColorOrder`](crate::ColorOrder). [`encode`] is the reference
//! implementation; [`channel_lut`] bakes the same per-channel transform into a
//! 256-entry table so the refresh path pays one array lookup per byte.

use crate::config::ColorOrder;

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`,
/// `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use smart_leds::RGB8;

/// 24-bit logical color, one 8-bit channel per primary.
pub type Rgb = RGB8;

/// 8-bit-per-channel RGB color from `embedded_graphics`.
#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

use embedded_graphics::prelude::RgbColor;

/// Convert [`Rgb`] (smart-leds) to [`Rgb888`] (embedded-graphics).
#[must_use]
pub const fn rgb_to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert [`Rgb888`] (embedded-graphics) to [`Rgb`] (smart-leds).
#[must_use]
pub fn rgb888_to_rgb(color: Rgb888) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

/// Gamma 2.2 lookup table for 8-bit values.
/// Pre-computed to avoid floating point math: corrected = (value/255)^2.2 * 255
pub(crate) const GAMMA_2_2_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11,
    11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 22, 22, 23,
    23, 24, 25, 25, 26, 26, 27, 28, 28, 29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39,
    40, 41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61,
    62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 73, 74, 75, 76, 77, 78, 79, 81, 82, 83, 84, 85, 87, 88,
    89, 90, 91, 93, 94, 95, 97, 98, 99, 100, 102, 103, 105, 106, 107, 109, 110, 111, 113, 114, 116,
    117, 119, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 141, 143, 145,
    146, 148, 149, 151, 153, 154, 156, 158, 159, 161, 163, 165, 166, 168, 170, 172, 173, 175, 177,
    179, 181, 182, 184, 186, 188, 190, 192, 194, 196, 197, 199, 201, 203, 205, 207, 209, 211, 213,
    215, 217, 219, 221, 223, 225, 227, 229, 231, 234, 236, 238, 240, 242, 244, 246, 248, 251, 253,
    255,
];

/// Gamma-correct one raw intensity value.
#[must_use]
pub const fn gamma_correct(value: u8) -> u8 {
    GAMMA_2_2_TABLE[value as usize]
}

/// Scale one channel by a brightness factor, rounding to the nearest integer
/// and clamping to the channel range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, brightness: f32) -> u8 {
    let scaled = libm::roundf(f32::from(value) * brightness);
    scaled.clamp(0.0, 255.0) as u8
}

/// Encode one logical color into its three transport bytes.
///
/// Pure and deterministic: each channel is brightness-scaled, gamma-corrected,
/// and the results are emitted in `order`'s sequence. `brightness` is expected
/// to be a validated value in `[0.0, 1.0]`.
///
/// ```
/// use neomatrix::{colors, encode, ColorOrder};
///
/// // Full-brightness red on a GRB part: green slot first, so 0x00 leads.
/// assert_eq!(encode(colors::RED, ColorOrder::Grb, 1.0), [0x00, 0xFF, 0x00]);
/// ```
#[must_use]
pub fn encode(color: Rgb, order: ColorOrder, brightness: f32) -> [u8; 3] {
    let corrected = [
        gamma_correct(scale_channel(color.r, brightness)),
        gamma_correct(scale_channel(color.g, brightness)),
        gamma_correct(scale_channel(color.b, brightness)),
    ];
    order.reorder(corrected)
}

/// Bake brightness scaling and gamma correction into a single per-channel
/// lookup table.
///
/// `lut[v]` equals the channel transform [`encode`] applies, so the refresh
/// path can correct a whole frame with one table lookup per byte.
#[must_use]
pub fn channel_lut(brightness: f32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let value = value as u8;
        *slot = gamma_correct(scale_channel(value, brightness));
    }
    table
}

/// Expand a 16-bit RGB565 pixel to 24-bit RGB by bit replication.
///
/// The top bits of each field are replicated into the low bits so full-scale
/// field values expand to exactly 0xFF: `(r5 << 3) | (r5 >> 2)` and likewise
/// for the 6-bit green field.
#[must_use]
pub const fn rgb565_to_rgb(raw: u16) -> Rgb {
    let r5 = ((raw >> 11) & 0x1F) as u8;
    let g6 = ((raw >> 5) & 0x3F) as u8;
    let b5 = (raw & 0x1F) as u8;
    Rgb::new(
        (r5 << 3) | (r5 >> 2),
        (g6 << 2) | (g6 >> 4),
        (b5 << 3) | (b5 >> 2),
    )
}

/// Quantize a 24-bit RGB color to 16-bit RGB565.
#[must_use]
pub const fn rgb_to_rgb565(color: Rgb) -> u16 {
    (((color.r >> 3) as u16) << 11) | (((color.g >> 2) as u16) << 5) | ((color.b >> 3) as u16)
}
