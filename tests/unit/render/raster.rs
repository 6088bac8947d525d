use super::*;
use crate::color::hsl::Hsl;
use crate::color::sweep::{ColorPair, darken};
use crate::foundation::core::CARD_CANVAS;
use crate::scene::model::build_card;

fn card_raster(pair: &ColorPair) -> RasterImage {
    let svg = build_card(pair).to_svg_bytes();
    rasterize_svg(&svg, CARD_CANVAS).unwrap()
}

fn pixel(img: &RasterImage, x: u32, y: u32) -> Option<[u8; 4]> {
    if x >= img.width || y >= img.height {
        return None;
    }
    let i = ((y as usize) * (img.width as usize) + (x as usize)) * 4;
    let px = img.rgba8.get(i..i + 4)?;
    Some([px[0], px[1], px[2], px[3]])
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn card_rasterizes_at_card_size() {
    let img = card_raster(&ColorPair::default());
    assert_eq!((img.width, img.height), (128, 224));
    assert_eq!(img.rgba8.len(), 128 * 224 * 4);
}

#[test]
fn shared_offset_gradient_paints_secondary_color() {
    let primary = Hsl::new(0.0, 100.0, 50.0);
    let pair = ColorPair::new(primary, darken(primary, 10.0));
    let img = card_raster(&pair);

    let expected = pair.secondary.to_rgb8();
    let px = pixel(&img, 64, 60).unwrap();
    assert!(
        close(px, [expected.r, expected.g, expected.b, 255], 1),
        "{px:?}"
    );
}

#[test]
fn accent_bar_darkens_background() {
    let pair = ColorPair::new(Hsl::new(200.0, 100.0, 60.0), Hsl::new(200.0, 100.0, 50.0));
    let img = card_raster(&pair);

    let open = pixel(&img, 64, 60).unwrap();
    let bar = pixel(&img, 64, 205).unwrap();
    assert_eq!(bar[3], 255);
    assert!(bar[..3].iter().zip(&open[..3]).all(|(b, o)| b <= o));
    assert!(bar[..3].iter().zip(&open[..3]).any(|(b, o)| b < o));
}

#[test]
fn parse_svg_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    parse_svg(ok).unwrap();

    let bad = br#"<svg"#;
    assert!(parse_svg(bad).is_err());
}

#[test]
fn rejects_empty_raster_size() {
    let tree = parse_svg(&build_card(&ColorPair::default()).to_svg_bytes()).unwrap();
    let err = rasterize(
        &tree,
        Canvas {
            width: 0,
            height: 224,
        },
    )
    .unwrap_err();
    assert!(matches!(err, CardError::InvalidArgument(_)));
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = vec![64u8, 32, 0, 128, 9, 9, 9, 0, 10, 20, 30, 255];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[10, 20, 30, 255]);
}

#[test]
fn flatten_blends_over_background() {
    let img = RasterImage {
        width: 3,
        height: 1,
        rgba8: vec![10, 20, 30, 255, 0, 0, 0, 0, 200, 100, 0, 128],
    };
    let rgb = img.flatten_to_rgb8([50, 60, 70]);
    assert_eq!(&rgb[0..3], &[10, 20, 30]);
    assert_eq!(&rgb[3..6], &[50, 60, 70]);
    assert_eq!(
        &rgb[6..9],
        &[
            ((200u16 * 128 + 50 * 127 + 127) / 255) as u8,
            ((100u16 * 128 + 60 * 127 + 127) / 255) as u8,
            ((70u16 * 127 + 127) / 255) as u8,
        ]
    );
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let img = RasterImage {
        width: 1,
        height: 1,
        rgba8: vec![1, 2, 3, 4],
    };
    assert_eq!(pixel(&img, 0, 0), Some([1, 2, 3, 4]));
    assert_eq!(pixel(&img, 1, 0), None);
    assert_eq!(pixel(&img, 0, 1), None);
}
