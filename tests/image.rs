#![allow(missing_docs)]
//! Host-level tests for RGB565 image records and blitting.

use neomatrix::{Error, Framebuffer, Image, LedMatrix, MatrixConfig, MemoryTransport, Rgb, colors};

const RED565: u16 = 0xF800;
const GREEN565: u16 = 0x07E0;

#[test]
fn height_derives_from_pixel_count() {
    let image = Image::new(vec![0; 12], 4).unwrap();
    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 3);
}

#[test]
fn ragged_pixel_count_is_rejected() {
    assert_eq!(
        Image::new(vec![0; 5], 2).err(),
        Some(Error::ImageGeometry {
            pixel_count: 5,
            width: 2
        })
    );
}

#[test]
fn zero_width_is_rejected() {
    assert_eq!(
        Image::new(vec![0; 4], 0).err(),
        Some(Error::ImageGeometry {
            pixel_count: 4,
            width: 0
        })
    );
}

#[test]
fn blit_expands_rgb565_checkerboard() {
    // red, green / green, red placed at (3, 3) on an 8x8 panel.
    let image = Image::new(vec![RED565, GREEN565, GREEN565, RED565], 2).unwrap();
    let mut matrix = LedMatrix::new(MatrixConfig::new(8, 8), MemoryTransport::new(64)).unwrap();
    matrix.blit(&image, 3, 3);

    assert_eq!(matrix.get_pixel(3, 3).unwrap(), Rgb::new(0xFF, 0x00, 0x00));
    assert_eq!(matrix.get_pixel(4, 4).unwrap(), Rgb::new(0xFF, 0x00, 0x00));
    assert_eq!(matrix.get_pixel(4, 3).unwrap(), Rgb::new(0x00, 0xFF, 0x00));
    assert_eq!(matrix.get_pixel(3, 4).unwrap(), Rgb::new(0x00, 0xFF, 0x00));
    // Neighbors are untouched.
    assert_eq!(matrix.get_pixel(2, 3).unwrap(), colors::BLACK);
    assert_eq!(matrix.get_pixel(5, 4).unwrap(), colors::BLACK);
}

#[test]
fn blit_clips_at_every_edge() {
    let image = Image::new(vec![RED565, GREEN565, GREEN565, RED565], 2).unwrap();
    let mut frame = Framebuffer::new(4, 4);

    // Hanging off the top-left: only the bottom-right source pixel lands.
    frame.blit(&image, -1, -1);
    assert_eq!(frame.get_pixel(0, 0).unwrap(), Rgb::new(0xFF, 0x00, 0x00));
    assert_eq!(frame.get_pixel(1, 0).unwrap(), colors::BLACK);

    // Hanging off the bottom-right: only the top-left source pixel lands.
    frame.blit(&image, 3, 3);
    assert_eq!(frame.get_pixel(3, 3).unwrap(), Rgb::new(0xFF, 0x00, 0x00));

    // Entirely outside: nothing happens.
    frame.blit(&image, -5, 0);
    frame.blit(&image, 0, 100);
}

#[test]
fn records_round_trip_through_postcard() {
    let image = Image::new(vec![RED565, GREEN565, 0x001F], 3).unwrap();
    let bytes = postcard::to_allocvec(&image).unwrap();
    assert_eq!(Image::from_bytes(&bytes).unwrap(), image);
}

#[test]
fn malformed_bytes_fail_to_decode() {
    assert_eq!(Image::from_bytes(&[0xFF]).err(), Some(Error::Decode));
}
