#![allow(missing_docs)]
//! Host-level tests for the color codec.

use neomatrix::{
    ColorOrder, Rgb, channel_lut, colors, encode, gamma_correct, rgb_to_rgb565, rgb565_to_rgb,
};

#[test]
fn encode_is_deterministic() {
    let color = Rgb::new(200, 100, 50);
    let first = encode(color, ColorOrder::Bgr, 0.7);
    let second = encode(color, ColorOrder::Bgr, 0.7);
    assert_eq!(first, second);
}

#[test]
fn full_brightness_red_on_grb_part() {
    assert_eq!(encode(colors::RED, ColorOrder::Grb, 1.0), [0x00, 0xFF, 0x00]);
}

#[test]
fn every_order_sequences_channels() {
    // Channel values chosen so the gamma-corrected bytes stay distinct.
    let color = Rgb::new(255, 200, 128);
    let r = gamma_correct(255);
    let g = gamma_correct(200);
    let b = gamma_correct(128);
    assert_eq!(encode(color, ColorOrder::Rgb, 1.0), [r, g, b]);
    assert_eq!(encode(color, ColorOrder::Rbg, 1.0), [r, b, g]);
    assert_eq!(encode(color, ColorOrder::Grb, 1.0), [g, r, b]);
    assert_eq!(encode(color, ColorOrder::Gbr, 1.0), [g, b, r]);
    assert_eq!(encode(color, ColorOrder::Brg, 1.0), [b, r, g]);
    assert_eq!(encode(color, ColorOrder::Bgr, 1.0), [b, g, r]);
}

#[test]
fn gamma_table_endpoints_and_monotonicity() {
    assert_eq!(gamma_correct(0), 0);
    assert_eq!(gamma_correct(255), 255);
    for value in 1..=255u8 {
        assert!(gamma_correct(value) >= gamma_correct(value - 1));
    }
}

#[test]
fn brightness_scales_before_gamma() {
    // Half brightness of full red rounds to 128, then gamma-corrects.
    let [_, red_slot, _] = encode(colors::RED, ColorOrder::Grb, 0.5);
    assert_eq!(red_slot, gamma_correct(128));
}

#[test]
fn decreasing_brightness_never_raises_a_channel() {
    let samples = [
        Rgb::new(255, 255, 255),
        Rgb::new(200, 100, 50),
        Rgb::new(1, 2, 3),
        Rgb::new(0, 128, 255),
    ];
    let steps = [1.0, 0.9, 0.75, 0.5, 0.25, 0.1, 0.0];
    for color in samples {
        for pair in steps.windows(2) {
            let brighter = encode(color, ColorOrder::Rgb, pair[0]);
            let dimmer = encode(color, ColorOrder::Rgb, pair[1]);
            for slot in 0..3 {
                assert!(
                    dimmer[slot] <= brighter[slot],
                    "{color:?} channel {slot} rose from {} to {} when dimming",
                    brighter[slot],
                    dimmer[slot],
                );
            }
        }
    }
}

#[test]
fn zero_brightness_blanks_everything() {
    assert_eq!(encode(colors::WHITE, ColorOrder::Rgb, 0.0), [0, 0, 0]);
}

#[test]
fn channel_lut_agrees_with_encode() {
    for brightness in [0.0, 0.25, 0.5, 0.8, 1.0] {
        let lut = channel_lut(brightness);
        for value in 0..=255u8 {
            let [expected, _, _] = encode(Rgb::new(value, 0, 0), ColorOrder::Rgb, brightness);
            assert_eq!(lut[usize::from(value)], expected, "value {value} at {brightness}");
        }
    }
}

#[test]
fn rgb565_primaries_expand_to_full_scale() {
    assert_eq!(rgb565_to_rgb(0xF800), Rgb::new(0xFF, 0x00, 0x00));
    assert_eq!(rgb565_to_rgb(0x07E0), Rgb::new(0x00, 0xFF, 0x00));
    assert_eq!(rgb565_to_rgb(0x001F), Rgb::new(0x00, 0x00, 0xFF));
    assert_eq!(rgb565_to_rgb(0x0000), Rgb::new(0x00, 0x00, 0x00));
    assert_eq!(rgb565_to_rgb(0xFFFF), Rgb::new(0xFF, 0xFF, 0xFF));
}

#[test]
fn rgb565_expansion_requantizes_losslessly() {
    // Bit replication keeps the top field bits intact, so expanding and
    // quantizing again returns the original field values.
    for r5 in 0..32u16 {
        let raw = r5 << 11;
        assert_eq!(rgb_to_rgb565(rgb565_to_rgb(raw)), raw);
    }
    for g6 in 0..64u16 {
        let raw = g6 << 5;
        assert_eq!(rgb_to_rgb565(rgb565_to_rgb(raw)), raw);
    }
    for b5 in 0..32u16 {
        assert_eq!(rgb_to_rgb565(rgb565_to_rgb(b5)), b5);
    }
}

#[test]
fn quantization_error_stays_within_field_precision() {
    // 5-bit fields lose at most 7 of 255, the 6-bit green field at most 3.
    for value in 0..=255u8 {
        let color = Rgb::new(value, value, value);
        let round_tripped = rgb565_to_rgb(rgb_to_rgb565(color));
        assert!(value.abs_diff(round_tripped.r) <= 7);
        assert!(value.abs_diff(round_tripped.g) <= 3);
        assert!(value.abs_diff(round_tripped.b) <= 7);
    }
}
