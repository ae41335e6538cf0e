use sprite_packer_core::prelude::*;

#[test]
fn three_sprites_share_the_first_row() {
    let cfg = PackerConfig::default();
    let items = vec![("a.png", 100, 100), ("b.png", 100, 100), ("c.png", 100, 100)];
    let sheet = pack_layout("example", items, cfg).expect("pack");

    assert_eq!(sheet.get("a.png").unwrap().frame, Rect::new(0, 0, 100, 100));
    assert_eq!(sheet.get("b.png").unwrap().frame, Rect::new(100, 0, 100, 100));
    assert_eq!(sheet.get("c.png").unwrap().frame, Rect::new(200, 0, 100, 100));
}

#[test]
fn x_offsets_are_cumulative_widths_while_the_row_fits() {
    let cfg = PackerConfig::default();
    let widths = [50u32, 200, 30, 10, 400];
    let items: Vec<(String, u32, u32)> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| (format!("s{}", i), w, 20))
        .collect();
    let sheet = pack_layout("sums", items, cfg).expect("pack");

    let mut expected_x = 0;
    for (i, &w) in widths.iter().enumerate() {
        let fr = sheet.get(&format!("s{}", i)).unwrap();
        assert_eq!(fr.frame.y, 0, "total width fits, so no wrapping");
        assert_eq!(fr.frame.x, expected_x);
        expected_x += w;
    }
}

#[test]
fn eleventh_sprite_wraps_to_the_second_row() {
    let cfg = PackerConfig::default();
    let items: Vec<(String, u32, u32)> =
        (0..12).map(|i| (format!("s{}", i), 100, 100)).collect();
    let sheet = pack_layout("wrap", items, cfg).expect("pack");

    for i in 0..10 {
        let fr = sheet.get(&format!("s{}", i)).unwrap();
        assert_eq!(fr.frame, Rect::new(i as u32 * 100, 0, 100, 100));
    }
    // 1000 + 100 would cross the 1024 edge, so the 11th starts row two
    assert_eq!(sheet.get("s10").unwrap().frame, Rect::new(0, 100, 100, 100));
    assert_eq!(sheet.get("s11").unwrap().frame, Rect::new(100, 100, 100, 100));
}

#[test]
fn row_step_is_fixed_by_the_first_sprite_in_the_row() {
    let cfg = PackerConfig::builder().with_canvas_dimensions(300, 300).build();
    let items = vec![
        ("a", 100, 50),
        ("b", 100, 80), // taller than the row leader; must not raise the step
        ("c", 100, 60),
        ("d", 50, 10),
    ];
    let sheet = pack_layout("rows", items, cfg).expect("pack");

    assert_eq!(sheet.get("a").unwrap().frame, Rect::new(0, 0, 100, 50));
    assert_eq!(sheet.get("b").unwrap().frame, Rect::new(100, 0, 100, 80));
    assert_eq!(sheet.get("c").unwrap().frame, Rect::new(200, 0, 100, 60));
    // next row starts at y = 50 (height of "a"), not 80
    assert_eq!(sheet.get("d").unwrap().frame, Rect::new(0, 50, 50, 10));
}

#[test]
fn sprite_wider_than_canvas_still_starts_its_row_at_origin() {
    let cfg = PackerConfig::builder().with_canvas_dimensions(100, 100).build();
    let items = vec![("wide", 300, 40), ("next", 10, 10)];
    let sheet = pack_layout("wide", items, cfg).expect("pack");

    // no wrap at a row start, regardless of width
    assert_eq!(sheet.get("wide").unwrap().frame, Rect::new(0, 0, 300, 40));
    assert_eq!(sheet.get("next").unwrap().frame, Rect::new(0, 40, 10, 10));
}

#[test]
fn duplicate_keys_keep_one_record_in_original_position() {
    let cfg = PackerConfig::default();
    let items = vec![("a", 100, 100), ("b", 100, 100), ("a", 100, 100)];
    let sheet = pack_layout("dups", items, cfg).expect("pack");

    assert_eq!(sheet.len(), 2);
    let keys: Vec<&str> = sheet.frames().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    // the later record replaced the earlier one
    assert_eq!(sheet.get("a").unwrap().frame, Rect::new(200, 0, 100, 100));
}

#[test]
fn frames_are_never_rotated_or_trimmed() {
    let cfg = PackerConfig::default();
    let items = vec![("a", 10, 20), ("b", 30, 5)];
    let sheet = pack_layout("flags", items, cfg).expect("pack");
    for fr in sheet.frames() {
        assert!(!fr.rotated);
        assert!(!fr.trimmed);
    }
}
