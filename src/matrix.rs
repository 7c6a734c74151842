//! The matrix driver: owns the logical framebuffer, the precomputed wiring
//! mapping, the channel lookup table, and the transmission buffer, and
//! orchestrates full or partial refreshes toward the transport.
//!
//! # Example
//!
//! ```
//! use neomatrix::{colors, ColorOrder, Layout, LedMatrix, MatrixConfig, MemoryTransport};
//!
//! let config = MatrixConfig::new(8, 8)
//!     .with_layout(Layout::Snake)
//!     .with_color_order(ColorOrder::Grb);
//! let mut matrix = LedMatrix::new(config, MemoryTransport::new(64))?;
//!
//! matrix.set_pixel(0, 0, colors::RED);
//! matrix.refresh()?;
//!
//! // GRB part: the red channel lands in the second byte slot.
//! assert_eq!(&matrix.transmission_buffer()[..3], &[0x00, 0xFF, 0x00]);
//! # Ok::<(), neomatrix::Error>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Rgb, channel_lut};
use crate::config::MatrixConfig;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::image::Image;
use crate::mapping::Mapping;
use crate::transport::Transport;

/// Driver for one rectangular addressable-LED matrix.
///
/// Application code writes logical pixels (directly, through
/// `embedded-graphics` against [`frame_mut`](Self::frame_mut), or by blitting
/// image records); [`refresh`](Self::refresh) projects the logical state into
/// the transmission buffer and hands it to the transport. The driver is a
/// plain single-owner value: no interior mutability, no background tasks.
pub struct LedMatrix<T> {
    config: MatrixConfig,
    frame: Framebuffer,
    mapping: Mapping,
    lut: [u8; 256],
    tx: Vec<u8>,
    transport: T,
}

impl<T> LedMatrix<T>
where
    T: Transport,
{
    /// Validate `config` against the attached strip and build the driver.
    ///
    /// All validation happens here, eagerly; on error no partial state is
    /// retained.
    ///
    /// # Errors
    ///
    /// Everything [`MatrixConfig::validate`] reports, plus
    /// [`Error::LedCountMismatch`] when `width * height` differs from the
    /// transport's LED count.
    pub fn new(config: MatrixConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let expected = config.led_count();
        let actual = transport.led_count();
        if expected != actual {
            return Err(Error::LedCountMismatch { expected, actual });
        }
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "LedMatrix::new: {}x{} matrix, {} LEDs",
            config.width,
            config.height,
            expected
        );
        Ok(Self {
            frame: Framebuffer::new(config.width, config.height),
            mapping: Mapping::new(&config),
            lut: channel_lut(config.brightness),
            // A zeroed buffer equals the encoding of an all-black frame, so a
            // fresh driver needs no initial full pass.
            tx: vec![0; expected * 3],
            config,
            transport,
        })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Read access to the logical framebuffer.
    #[must_use]
    pub const fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// Mutable access to the logical framebuffer; this is the store handed to
    /// drawing code (it implements `embedded_graphics::DrawTarget`).
    pub const fn frame_mut(&mut self) -> &mut Framebuffer {
        &mut self.frame
    }

    /// The current transmission buffer: 3 bytes per LED in physical wiring
    /// order and configured color order. Reflects the framebuffer as of the
    /// last refresh.
    #[must_use]
    pub fn transmission_buffer(&self) -> &[u8] {
        &self.tx
    }

    /// The transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport.
    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Write one logical pixel; out-of-bounds writes clip silently.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        self.frame.set_pixel(x, y, color);
    }

    /// Read one logical pixel.
    ///
    /// # Errors
    ///
    /// [`Error::PixelOutOfBounds`] when `(x, y)` is outside the grid.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Rgb> {
        self.frame.get_pixel(x, y)
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.frame.fill(color);
    }

    /// Blit an RGB565 image record at `(dest_x, dest_y)`, clipping pixels that
    /// fall outside the grid.
    pub fn blit(&mut self, image: &Image, dest_x: i32, dest_y: i32) {
        self.frame.blit(image, dest_x, dest_y);
    }

    /// Re-encode the cells written since the last refresh and push the frame.
    ///
    /// When nothing is dirty this is a no-op, including the transport write.
    /// The resulting transmission buffer is always byte-identical to what
    /// [`refresh_full`](Self::refresh_full) would produce for the same
    /// framebuffer state.
    ///
    /// # Errors
    ///
    /// The transport's error, surfaced unchanged and without retry. Dirty
    /// markers are kept on failure so the next refresh re-sends the frame.
    pub fn refresh(&mut self) -> Result<()> {
        let dirty = self.frame.dirty_count();
        if dirty == 0 {
            return Ok(());
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("refresh: re-encoding {} dirty cells", dirty);
        for cell in 0..self.frame.len() {
            if self.frame.is_cell_dirty(cell) {
                self.encode_cell(cell);
            }
        }
        self.transport.write(&self.tx)?;
        self.frame.clear_dirty();
        Ok(())
    }

    /// Re-encode every cell and push the frame, regardless of dirty state.
    ///
    /// # Errors
    ///
    /// The transport's error, surfaced unchanged and without retry.
    pub fn refresh_full(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::trace!("refresh_full: re-encoding {} cells", self.frame.len());
        for cell in 0..self.frame.len() {
            self.encode_cell(cell);
        }
        self.transport.write(&self.tx)?;
        self.frame.clear_dirty();
        Ok(())
    }

    /// Project one logical cell into its transmission-buffer slot.
    fn encode_cell(&mut self, cell: usize) {
        let color = self.frame.pixels()[cell];
        let corrected = [
            self.lut[usize::from(color.r)],
            self.lut[usize::from(color.g)],
            self.lut[usize::from(color.b)],
        ];
        let bytes = self.config.color_order.reorder(corrected);
        let offset = self.mapping.physical(cell) * 3;
        self.tx[offset..offset + 3].copy_from_slice(&bytes);
    }
}
