use std::io::Cursor;

use image::Rgba;

use super::*;

fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_dimensions_and_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let decoded = decode_rgba8(&encode_png(&img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [100, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_rgba8(b"not an image").is_err());
}

#[test]
fn white_key_is_conservative() {
    let mut img = RgbaImage::new(4, 1);
    img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([252, 254, 253, 255]));
    // Pale yellow edge pixel.
    img.put_pixel(2, 0, Rgba([255, 255, 240, 255]));
    // Below the brightness threshold.
    img.put_pixel(3, 0, Rgba([251, 251, 251, 255]));

    remove_white_background(&mut img, WhiteKey::default());

    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(1, 0).0[3], 0);
    assert_eq!(img.get_pixel(2, 0).0[3], 255);
    assert_eq!(img.get_pixel(3, 0).0[3], 255);
}

#[test]
fn trim_crops_to_alpha_with_clamped_padding() {
    let mut img = RgbaImage::new(10, 10);
    img.put_pixel(1, 4, Rgba([0, 128, 0, 255]));
    img.put_pixel(3, 6, Rgba([0, 128, 0, 255]));

    let out = trim_to_alpha(&img, 2);
    // x: [1-2 -> 0, 3+1+2 = 6), y: [4-2, 6+1+2) = [2, 9)
    assert_eq!(out.dimensions(), (6, 7));
    assert_eq!(out.get_pixel(1, 2).0[3], 255);
}

#[test]
fn trim_of_fully_transparent_image_is_identity() {
    let img = RgbaImage::new(5, 3);
    assert_eq!(trim_to_alpha(&img, 2).dimensions(), (5, 3));
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![100u8, 50, 200, 128, 9, 9, 9, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[4..], &[0u8, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    for (got, want) in px[..3].iter().zip([100u8, 50, 200]) {
        assert!(got.abs_diff(want) <= 1);
    }
}

#[test]
fn spread_limit_applies_with_lower_threshold() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([230, 236, 233, 255]));
    img.put_pixel(1, 0, Rgba([230, 240, 233, 255]));
    let key = WhiteKey {
        min_channel: 230,
        max_spread: 6,
    };
    remove_white_background(&mut img, key);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(1, 0).0[3], 255);
}
