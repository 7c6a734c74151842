//! The boundary between the driver and the hardware that clocks bytes out to
//! the strip.
//!
//! The driver never touches pins or peripherals; it finishes a transmission
//! buffer and hands it to a [`Transport`]. Firmware implements the trait over
//! whatever mechanism drives the strip (PIO, SPI, RMT, bit-banging);
//! [`MemoryTransport`] captures frames in memory for host-side development
//! and tests.

use alloc::vec::Vec;

use crate::error::Result;

/// A sink for finished transmission buffers.
///
/// `write` receives the complete buffer (3 bytes per LED, physical wiring
/// order, configured color order) and blocks until the strip has latched it.
/// Implementations convert their hardware error through
/// [`Error::transport`](crate::Error::transport); the driver surfaces whatever
/// `write` returns unchanged, without retrying.
pub trait Transport {
    /// Number of LEDs on the attached strip. Checked against the matrix
    /// dimensions at construction.
    fn led_count(&self) -> usize;

    /// Push one finished frame to the hardware.
    ///
    /// # Errors
    ///
    /// Whatever the hardware write reports, converted at the implementation
    /// boundary.
    fn write(&mut self, buffer: &[u8]) -> Result<()>;
}

/// A transport that records frames in memory instead of driving hardware.
///
/// ```
/// use neomatrix::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new(64);
/// transport.write(&[0u8; 192])?;
/// assert_eq!(transport.writes(), 1);
/// assert_eq!(transport.last_frame().map(<[u8]>::len), Some(192));
/// # Ok::<(), neomatrix::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    led_count: usize,
    last_frame: Option<Vec<u8>>,
    writes: usize,
}

impl MemoryTransport {
    /// Create a capture transport standing in for a strip of `led_count` LEDs.
    #[must_use]
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            last_frame: None,
            writes: 0,
        }
    }

    /// The most recently written frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.last_frame.as_deref()
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Transport for MemoryTransport {
    fn led_count(&self) -> usize {
        self.led_count
    }

    fn write(&mut self, buffer: &[u8]) -> Result<()> {
        self.last_frame = Some(buffer.to_vec());
        self.writes += 1;
        Ok(())
    }
}
