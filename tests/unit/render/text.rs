use super::*;

#[test]
fn invalid_font_bytes_are_an_asset_error() {
    let err = TextShaper::from_font_bytes(b"definitely not a font".to_vec()).unwrap_err();
    assert!(matches!(err, DriftlineError::Asset(_)));
}

#[test]
fn missing_font_file_is_an_asset_error() {
    let err = TextShaper::from_path(Path::new("/no/such/font.ttf")).unwrap_err();
    assert!(matches!(err, DriftlineError::Asset(_)));
}

fn shaper() -> Option<TextShaper> {
    TextShaper::from_path(Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"))
        .or_else(|_| TextShaper::system_sans_serif())
        .ok()
}

#[test]
fn labels_are_shaped_on_the_baseline() {
    let Some(mut shaper) = shaper() else {
        eprintln!("no font available; shaping not checked");
        return;
    };
    let label = shaper.shape("2019", 13.0, false).unwrap().clone();
    assert_eq!(label.glyph_count(), 4);
    assert!(label.width > 13.0 && label.width < 4.0 * 13.0);
    assert!(label.ascent > 0.0 && label.descent >= 0.0);
    let glyphs: Vec<_> = label.runs.iter().flat_map(|r| r.glyphs.iter()).collect();
    assert!(glyphs.iter().all(|g| g.y.abs() < 1e-3));
    assert!(glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(glyphs[0].x.abs() < 1e-3);
}

#[test]
fn bold_labels_are_no_narrower_and_cached_per_style() {
    let Some(mut shaper) = shaper() else {
        return;
    };
    let regular = shaper.shape("01", 16.0, false).unwrap().width;
    let bold = shaper.shape("01", 16.0, true).unwrap().width;
    assert!(bold >= regular);
    assert_eq!(shaper.shape("01", 16.0, false).unwrap().width, regular);
    assert!(shaper.shape("01", 0.0, false).is_err());
}
