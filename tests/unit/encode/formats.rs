use super::*;
use crate::color::sweep::ColorPair;
use crate::foundation::core::CARD_CANVAS;
use crate::render::raster::rasterize_svg;
use crate::scene::model::build_card;

fn card() -> RasterImage {
    let svg = build_card(&ColorPair::default()).to_svg_bytes();
    rasterize_svg(&svg, CARD_CANVAS).unwrap()
}

/// Width/height from the first `ispe` property box of an AVIF file.
fn avif_ispe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let at = bytes.windows(4).position(|w| w == b"ispe")?;
    let body = bytes.get(at + 8..at + 16)?;
    let w = u32::from_be_bytes(body[0..4].try_into().ok()?);
    let h = u32::from_be_bytes(body[4..8].try_into().ok()?);
    Some((w, h))
}

#[test]
fn extensions_are_stable() {
    let exts: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.extension()).collect();
    assert_eq!(exts, ["webp", "jpg", "png", "avif", "tiff"]);
    assert_eq!(OutputFormat::Jpeg.to_string(), "jpg");
}

#[test]
fn default_config_is_max_quality() {
    let cfg = EncodeConfig::default();
    assert_eq!(cfg.quality, 100);
    assert_eq!(cfg.alpha_quality, 100);
    assert!(cfg.near_lossless);
    cfg.validate().unwrap();
}

#[test]
fn config_validation_rejects_out_of_range_values() {
    let bad = [
        EncodeConfig {
            quality: 0,
            ..EncodeConfig::default()
        },
        EncodeConfig {
            alpha_quality: 101,
            ..EncodeConfig::default()
        },
        EncodeConfig {
            avif_speed: 11,
            ..EncodeConfig::default()
        },
    ];
    for cfg in bad {
        assert!(matches!(
            cfg.validate(),
            Err(CardError::InvalidArgument(_))
        ));
    }
}

#[test]
fn decodable_formats_keep_card_dimensions() {
    let img = card();
    let cfg = EncodeConfig::default();
    for format in [
        OutputFormat::Webp,
        OutputFormat::Jpeg,
        OutputFormat::Png,
        OutputFormat::Tiff,
    ] {
        let bytes = encode_image(&img, format, &cfg).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(
            (decoded.width(), decoded.height()),
            (128, 224),
            "{format}"
        );
    }
}

#[test]
fn lossless_formats_preserve_pixels() {
    let img = card();
    let cfg = EncodeConfig::default();
    for format in [OutputFormat::Webp, OutputFormat::Png, OutputFormat::Tiff] {
        let bytes = encode_image(&img, format, &cfg).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), &img.rgba8, "{format}");
    }
}

#[test]
fn jpeg_is_guessed_as_jpeg() {
    let bytes = encode_image(&card(), OutputFormat::Jpeg, &EncodeConfig::default()).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn avif_carries_card_dimensions() {
    let bytes = encode_image(&card(), OutputFormat::Avif, &EncodeConfig::default()).unwrap();
    assert_eq!(&bytes[4..8], b"ftyp");
    assert_eq!(avif_ispe_dimensions(&bytes), Some((128, 224)));
}

#[test]
fn mismatched_buffer_is_an_encode_error() {
    let img = RasterImage {
        width: 2,
        height: 2,
        rgba8: vec![0; 3],
    };
    let err = encode_image(&img, OutputFormat::Png, &EncodeConfig::default()).unwrap_err();
    assert!(matches!(err, CardError::Encode(_)));
}
