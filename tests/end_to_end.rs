//! End-to-end generation with a font-free glyph source

mod common;

use std::fs;

use emblem_composer::{compose_scene, generate, Canvas, LogoConfig, MarginVariant};
use kurbo::Point;
use pretty_assertions::assert_eq;

use common::{file_names, read_indexed_png, BlockGlyphs};

/// Root start tag of an SVG document
fn root_tag(svg: &str) -> &str {
    let start = svg.find("<svg").unwrap();
    let end = start + svg[start..].find('>').unwrap();
    &svg[start..=end]
}

#[test]
fn test_tight_svg_without_label() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .with_institution("EXAMPLE")
        .without_margin(true)
        .with_formats(["svg"])
        .with_heights([])
        .with_output_dir(dir.path());

    let written = generate(&config, &BlockGlyphs::default()).unwrap();
    assert_eq!(file_names(&written), vec!["logo_szp.svg"]);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

    let svg = fs::read_to_string(&written[0]).unwrap();
    let root = root_tag(&svg);
    assert!(!root.contains(" width="), "{root}");
    assert!(!root.contains(" height="), "{root}");

    let validated = config.validate();
    let composed = compose_scene(&validated, &BlockGlyphs::default()).unwrap();
    assert!(composed.divider.is_none());
    let ink = composed.scene.bounding_box().unwrap();
    let canvas = Canvas::fit(&composed.scene, 0.0);
    assert!(canvas.width() >= ink.width() && canvas.width() - ink.width() < 1.0);
    assert!(canvas.height() >= ink.height() && canvas.height() - ink.height() < 1.0);
    assert!(root.contains(&format!(
        r#"viewBox="0 0 {} {}""#,
        canvas.width(),
        canvas.height()
    )));
}

#[test]
fn test_padded_png_with_label_shows_divider() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .with_institution("EXAMPLE")
        .with_direction("DIRECTION X")
        .with_margin(true)
        .with_formats(["png"])
        .with_heights([100, 300])
        .with_output_dir(dir.path());

    let written = generate(&config, &BlockGlyphs::default()).unwrap();
    assert_eq!(file_names(&written), vec!["logo_100.png", "logo_300.png"]);

    let validated = config.validate();
    let composed = compose_scene(&validated, &BlockGlyphs::default()).unwrap();
    let canvas = Canvas::fit(
        &composed.scene,
        MarginVariant::WithMargin.padding(validated.layout.unit),
    );
    let divider = composed.divider.expect("label draws a divider");
    let center: Point = canvas.transform() * divider.center();

    for (path, expected_height) in written.iter().zip([100u32, 300]) {
        let (width, height, palette, indices) = read_indexed_png(path);
        assert_eq!(height, expected_height);
        assert_eq!(palette.len(), 8 * 3);
        assert!(indices.iter().all(|&i| i < 8));

        let px = (center.x * f64::from(width) / canvas.width()).floor() as i64;
        let py = ((canvas.height() - center.y) * f64::from(height) / canvas.height()).floor() as i64;
        let row = &indices[(py as usize) * width as usize..][..width as usize];
        // index 0 is white in the 8-color palette
        let inked = (px - 1..=px + 1)
            .filter(|x| (0..i64::from(width)).contains(x))
            .any(|x| row[x as usize] != 0);
        assert!(inked, "no divider ink near ({px}, {py}) in {}", path.display());
    }
}

#[test]
fn test_both_variants_in_export_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .with_name("signature")
        .with_margin(true)
        .without_margin(true)
        .with_formats(["JPEG", "gif", "eps", "svg"])
        .with_heights([40])
        .with_output_dir(dir.path());

    let written = generate(&config, &BlockGlyphs::default()).unwrap();
    assert_eq!(
        file_names(&written),
        vec![
            "signature_szp.svg",
            "signature_szp.eps",
            "signature_szp_40.gif",
            "signature_szp_40.jpg",
            "signature.svg",
            "signature.eps",
            "signature_40.gif",
            "signature_40.jpg",
        ]
    );
}

#[test]
fn test_signature_mode_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .for_signature(true)
        .with_output_dir(dir.path());

    let written = generate(&config, &BlockGlyphs::default()).unwrap();
    assert_eq!(file_names(&written), vec!["logo_szp_100.png"]);
    let (_, height, _, _) = read_indexed_png(&written[0]);
    assert_eq!(height, 100);
}

#[test]
fn test_sixteen_color_palette() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .with_formats(["png"])
        .with_heights([64])
        .with_palette16(true)
        .with_output_dir(dir.path());

    let written = generate(&config, &BlockGlyphs::default()).unwrap();
    let (_, _, palette, indices) = read_indexed_png(&written[0]);
    assert_eq!(palette.len(), 16 * 3);
    assert!(indices.iter().all(|&i| i < 16));
}

#[test]
fn test_output_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let config = LogoConfig::new()
        .with_direction("DIRECTION\\X")
        .with_formats(["svg", "pdf", "eps", "png", "gif", "jpg"])
        .with_heights([50, 120]);

    let a = generate(&config.clone().with_output_dir(first.path()), &BlockGlyphs::default()).unwrap();
    let b = generate(&config.with_output_dir(second.path()), &BlockGlyphs::default()).unwrap();
    assert_eq!(file_names(&a), file_names(&b));
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap(), "{}", left.display());
    }
}

#[test]
fn test_fit_is_idempotent() {
    let validated = LogoConfig::new().with_direction("DIRECTION X").validate();
    let composed = compose_scene(&validated, &BlockGlyphs::default()).unwrap();
    for variant in [MarginVariant::WithoutMargin, MarginVariant::WithMargin] {
        let padding = variant.padding(validated.layout.unit);
        let once = Canvas::fit(&composed.scene, padding);
        let twice = Canvas::fit(&composed.scene, padding);
        assert_eq!((once.width(), once.height()), (twice.width(), twice.height()));
    }
}

#[test]
fn test_existing_files_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("logo_szp.svg");
    fs::write(&target, "stale").unwrap();

    let config = LogoConfig::new().with_output_dir(dir.path());
    generate(&config, &BlockGlyphs::default()).unwrap();
    let svg = fs::read_to_string(&target).unwrap();
    assert!(svg.starts_with("<?xml"));
    // no temporary file left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
