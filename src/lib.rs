//! Coordinate mapping and color pipeline for serially-chained addressable LED
//! matrices (WS2812/NeoPixel-style).
//!
//! The crate turns logical `(x, y, color)` writes into the byte stream a
//! chained LED strip expects, handling the parts that are easy to get subtly
//! wrong: wiring order (linear vs serpentine), mounting flips and rotation,
//! per-part channel order, brightness scaling, and gamma correction.
//!
//! What it deliberately does *not* do: drawing algorithms (bring
//! [`embedded-graphics`](https://docs.rs/embedded-graphics) — the
//! [`Framebuffer`] is a `DrawTarget`) and the timed serial output itself
//! (implement [`Transport`] over your PIO/SPI/RMT peripheral).
//!
//! # Example
//!
//! ```
//! use neomatrix::{colors, ColorOrder, Layout, LedMatrix, MatrixConfig, MemoryTransport};
//!
//! // An 8x8 panel wired serpentine, GRB parts, dimmed to 40%.
//! let config = MatrixConfig::new(8, 8)
//!     .with_layout(Layout::Snake)
//!     .with_color_order(ColorOrder::Grb)
//!     .with_brightness(0.4);
//!
//! // MemoryTransport stands in for the hardware write here.
//! let mut matrix = LedMatrix::new(config, MemoryTransport::new(64))?;
//!
//! matrix.set_pixel(3, 3, colors::CYAN);
//! matrix.refresh()?;
//! # Ok::<(), neomatrix::Error>(())
//! ```
//!
//! # Glossary
//!
//! - **Layout**: physical wiring order of LEDs within a matrix (`Row` =
//!   left-to-right every row; `Snake` = alternating direction per row).
//! - **Color order**: the channel sequence a specific LED part expects per
//!   pixel (for WS2812-family parts usually GRB).
//! - **Logical framebuffer**: the unrotated, unflipped pixel grid addressed
//!   by drawing code.
//! - **Transmission buffer**: the final byte sequence, in physical wiring and
//!   color order, handed to the transport.
//! - **Dirty tracking**: bookkeeping of which cells changed since the last
//!   transmission, enabling partial refresh.

#![cfg_attr(not(feature = "host"), no_std)]

extern crate alloc;

pub mod color;
pub mod config;
mod error;
pub mod framebuffer;
pub mod image;
pub mod mapping;
pub mod matrix;
pub mod transport;

pub use crate::color::{
    Rgb, Rgb888, channel_lut, colors, encode, gamma_correct, rgb_to_rgb565, rgb_to_rgb888,
    rgb565_to_rgb, rgb888_to_rgb,
};
pub use crate::config::{ColorOrder, Layout, MAX_LEDS, MatrixConfig, Rotation};
pub use crate::error::{Error, Result};
pub use crate::framebuffer::Framebuffer;
pub use crate::image::Image;
pub use crate::mapping::{Mapping, physical_index};
pub use crate::matrix::LedMatrix;
pub use crate::transport::{MemoryTransport, Transport};
