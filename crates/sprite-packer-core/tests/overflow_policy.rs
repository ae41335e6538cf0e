use image::{DynamicImage, Rgba, RgbaImage};
use sprite_packer_core::prelude::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(px)))
}

#[test]
fn clip_records_the_placement_and_clips_drawing() {
    let cfg = PackerConfig::builder()
        .with_canvas_dimensions(100, 100)
        .overflow_policy(OverflowPolicy::Clip)
        .build();
    let inputs = vec![InputImage {
        key: "wide.png".into(),
        image: solid(300, 40, [255, 0, 0, 255]),
    }];
    let out = pack_images("clip", inputs, cfg).expect("pack");

    assert_eq!(out.sheet.get("wide.png").unwrap().frame, Rect::new(0, 0, 300, 40));
    assert_eq!(out.canvas.dimensions(), (100, 100));
    // drawing was clipped at the right edge, not wrapped or scaled
    assert_eq!(out.canvas.get_pixel(99, 0).0, [255, 0, 0, 255]);
}

#[test]
fn error_policy_fails_fast_for_oversized_sprite() {
    let cfg = PackerConfig::builder()
        .with_canvas_dimensions(100, 100)
        .overflow_policy(OverflowPolicy::Error)
        .build();
    let inputs = vec![InputImage {
        key: "wide.png".into(),
        image: solid(300, 40, [255, 0, 0, 255]),
    }];
    match pack_images("err", inputs, cfg) {
        Err(SpritePackError::OutOfSpace { key }) => assert_eq!(key, "wide.png"),
        other => panic!("expected OutOfSpace, got {:?}", other.map(|o| o.sheet)),
    }
}

#[test]
fn error_policy_catches_vertical_overflow_after_wrapping() {
    let cfg = PackerConfig::builder()
        .with_canvas_dimensions(100, 120)
        .overflow_policy(OverflowPolicy::Error)
        .build();
    // rows of 60: the third sprite wraps to y = 120, past the bottom edge
    let items = vec![("a", 60, 60), ("b", 60, 60), ("c", 60, 60)];
    match pack_layout("tall", items, cfg) {
        Err(SpritePackError::OutOfSpace { key }) => assert_eq!(key, "c"),
        other => panic!("expected OutOfSpace, got {:?}", other),
    }
}

#[test]
fn clip_allows_vertical_overflow_with_recorded_placement() {
    let cfg = PackerConfig::builder()
        .with_canvas_dimensions(100, 120)
        .overflow_policy(OverflowPolicy::Clip)
        .build();
    let items = vec![("a", 60, 60), ("b", 60, 60), ("c", 60, 60)];
    let sheet = pack_layout("tall", items, cfg).expect("pack");
    assert_eq!(sheet.get("b").unwrap().frame, Rect::new(0, 60, 60, 60));
    assert_eq!(sheet.get("c").unwrap().frame, Rect::new(0, 120, 60, 60));
}
