// Property tests for color formatting, grid geometry and preview sizing
use color_inspector::inspector::{
    Rgb, TextColor, axis_coordinates, contrast_text_color, display_dimensions, grid_step, parse_hex,
    to_hex_upper,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hex_roundtrips_every_rgb(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = to_hex_upper(r, g, b);
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert!(!hex.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(parse_hex(&hex).unwrap(), Rgb::new(r, g, b));
    }

    #[test]
    fn contrast_follows_luminance(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb::new(r, g, b);
        let expected = if color.luminance() < 0.5 { TextColor::White } else { TextColor::Black };
        prop_assert_eq!(contrast_text_color(&color.to_hex()).unwrap(), expected);
    }

    #[test]
    fn step_is_never_below_four(width in 1u32..100_000) {
        prop_assert!(grid_step(width, 40, 4) >= 4);
    }

    #[test]
    fn axis_count_is_ceil_of_len_over_step(len in 1u32..5_000, step in 1u32..200) {
        let coords = axis_coordinates(len, step);
        prop_assert_eq!(coords.len() as u32, len.div_ceil(step));
        prop_assert_eq!(coords[0], 0);
        prop_assert!(coords.iter().all(|&c| c < len));
    }

    #[test]
    fn preview_never_exceeds_limit(width in 1u32..20_000, height in 1u32..20_000) {
        let (w, h) = display_dimensions(width, height, 900);
        prop_assert!(w <= width.min(900));
        prop_assert!(h >= 1);
        if width <= 900 {
            prop_assert_eq!((w, h), (width, height));
        }
    }
}

#[test]
fn luminance_of_red_is_below_threshold() {
    let red = Rgb::new(255, 0, 0);
    assert!((red.luminance() - 0.299).abs() < 1e-9);
    assert_eq!(red.contrast_text(), TextColor::White);
}
