use grocy_label_printer::builder::{endless_width, fixed_scale_factor};
use grocy_label_printer::graphics::{blank, scale_to_height, BLACK, WHITE};
use grocy_label_printer::{
    encode_barcode, render_label, wrap_text, BarcodeKind, LabelContent, LabelFonts, LabelGeometry, LabelRequest,
    Labeler, Settings, TrueTypeFont, Typeface,
};

const FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

fn font(size: f32) -> TrueTypeFont {
    TrueTypeFont::from_bytes(FONT.to_vec(), size).unwrap()
}

fn assets_dir() -> String {
    format!("{}/assets", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn short_text_is_not_wrapped() {
    let face = font(24.0);
    let (text, width) = wrap_text("Milk", &face, 1000.0, 3);
    assert_eq!(text, "Milk");
    assert_eq!(width, face.text_width("Milk"));
    assert!(width > 0.0);
}

#[test]
fn wrapped_lines_respect_limits() {
    let face = font(20.0);
    let name = "Organic free range chicken eggs from happy hens";
    for max_width in [60.0, 120.0, 200.0, 400.0] {
        for max_lines in 1..4 {
            let (text, _) = wrap_text(name, &face, max_width, max_lines);
            let lines: Vec<&str> = text.split('\n').collect();
            assert!(lines.len() <= max_lines);
            let (untruncated, _) = wrap_text(name, &face, max_width, 100);
            if untruncated.split('\n').count() > max_lines {
                assert!(lines.last().unwrap().ends_with("..."));
            }
        }
    }
}

#[test]
fn narrow_box_truncates_to_prefix() {
    let face = font(20.0);
    let narrow = face.text_width("A") * 2.0;
    let (text, _) = wrap_text("Sauerkraut", &face, narrow, 3);
    assert!(!text.contains('\n'));
    assert!("Sauerkraut".starts_with(text.trim_end_matches("...")));
}

#[test]
fn truetype_text_is_bilevel() {
    let face = font(32.0);
    let mut canvas = blank(200, 60);
    face.draw_text(&mut canvas, 5, 5, "Butter", BLACK);
    assert!(canvas.pixels().all(|px| *px == BLACK || *px == WHITE));
    assert!(canvas.pixels().any(|px| *px == BLACK));

    let bounds = face.bbox("Butter");
    assert!(bounds.top >= 0);
    assert!(bounds.right as f32 <= face.text_width("Butter") + 2.0);
    assert!(bounds.height() > 0);
}

#[test]
fn fixed_label_is_stock_sized() {
    let (text, meta) = (font(12.0), font(8.0));
    let barcode = encode_barcode("ABC123", BarcodeKind::DataMatrix).unwrap();
    let fonts = LabelFonts { text: &text, meta: &meta, max_lines: 2 };
    let content = LabelContent { text: "Apples", ..Default::default() };

    let label = render_label(LabelGeometry::Fixed { width: 62, height: 29 }, &content, fonts, &barcode).unwrap();
    assert_eq!(label.dimensions(), (62, 29));

    // barcode vertically centred against the left edge
    let factor = fixed_scale_factor(barcode.dimensions(), (62, 29));
    let side = barcode.height() * factor;
    let top = (29 - side) / 2;
    for y in 0..29 {
        let inside = y >= top && y < top + side;
        // Data Matrix finder: solid left column
        assert_eq!(*label.get_pixel(0, y) == BLACK, inside, "row {y}");
    }
}

#[test]
fn endless_label_swaps_dimensions() {
    let (text, meta) = (font(10.0), font(6.0));
    let barcode = encode_barcode("ABC123", BarcodeKind::DataMatrix).unwrap();
    let fonts = LabelFonts { text: &text, meta: &meta, max_lines: 2 };
    let content = LabelContent {
        text: "Flour",
        amount: Some("2"),
        unit_name: Some("kg"),
        ..Default::default()
    };

    let label = render_label(LabelGeometry::Endless { fixed: 12 }, &content, fonts, &barcode).unwrap();
    let scaled = scale_to_height(&barcode, 12);
    let length = endless_width(scaled.width(), 12, &content, fonts);
    assert_eq!(label.dimensions(), (12, length));
    assert!(length >= scaled.width() + 4);
}

#[test]
fn endless_width_floor_holds_for_empty_text() {
    let (text, meta) = (font(48.0), font(30.0));
    let fonts = LabelFonts { text: &text, meta: &meta, max_lines: 4 };
    let content = LabelContent::default();
    assert_eq!(endless_width(306, 306, &content, fonts), 306 + 122);
}

#[test]
fn datamatrix_failure_falls_back_to_qr() {
    // empty payloads are rejected by the Data Matrix encoder
    let fallback = encode_barcode("", BarcodeKind::DataMatrix).unwrap();
    let qr = encode_barcode("", BarcodeKind::QrCode).unwrap();
    assert_eq!(fallback, qr);
}

#[test]
fn labeler_from_settings_renders_png() {
    let dir = assets_dir();
    let settings = Settings::from_lookup(|key| match key {
        "LABEL_SIZE" => Some("62".to_string()),
        "FONT_DIR" => Some(dir.clone()),
        "NAME_FONT_SIZE" => Some("40".to_string()),
        _ => None,
    })
    .unwrap();
    let labeler = Labeler::from_settings(&settings).unwrap();
    assert_eq!(labeler.describe(), "Label 62, Size 696x0");

    let request = LabelRequest::new("Whole milk", "grcy:p:42")
        .best_before("2025-03-01")
        .purchased("2025-02-20")
        .amount("1", Some("l".into()));
    let label = labeler.render(&request).unwrap();
    assert_eq!(label.width(), 696);

    let png = labeler.render_png(&request).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(decoded, label);
}

#[test]
fn unknown_label_size_is_fatal() {
    let settings = Settings::from_lookup(|key| (key == "LABEL_SIZE").then(|| "99x99".to_string())).unwrap();
    assert!(Labeler::from_settings(&settings).is_err());
}

#[test]
fn concurrent_renders_share_fonts() {
    let labeler = Labeler::new(LabelGeometry::Fixed { width: 696, height: 271 }, font(48.0), font(30.0), 4).unwrap();
    let request = LabelRequest::new("Peanut butter crunchy", "grcy:p:9").best_before("2026-01-01");
    let expected = labeler.render(&request).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| labeler.render(&request).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
