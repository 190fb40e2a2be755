use std::fs;

use timestable::{render_table, TableConfig, PNG_FILENAME, SVG_FILENAME};

#[test]
fn smoke_render_three_by_three() {
    // Skip on CI where no system fonts may be installed
    if std::env::var("CI").is_ok() {
        return;
    }

    let config = TableConfig::new(3).expect("config");
    let dir = tempfile::tempdir().expect("tempdir");
    let artifacts = render_table(&config, dir.path()).expect("render");

    assert_eq!(artifacts.png.file_name().unwrap(), PNG_FILENAME);
    assert_eq!(artifacts.svg.file_name().unwrap(), SVG_FILENAME);

    let (width, height) = image::image_dimensions(&artifacts.png).expect("png header");
    assert_eq!((width, height), (320, 320));

    let svg = fs::read_to_string(&artifacts.svg).expect("read svg");
    assert!(svg.contains("width=\"320\" height=\"320\""));
    // Corner marker, both headers, and the body products all appear
    for label in ["*", "1", "2", "3", "4", "6", "9"] {
        assert!(
            svg.contains(&format!(">{}</text>", label)),
            "missing label {}",
            label
        );
    }
}

#[test]
fn smoke_render_degenerate_table() {
    if std::env::var("CI").is_ok() {
        return;
    }

    let config = TableConfig::new(0).expect("config");
    let dir = tempfile::tempdir().expect("tempdir");
    let artifacts = render_table(&config, dir.path()).expect("render");

    assert!(artifacts.png.exists());
    assert!(artifacts.svg.exists());

    let (width, height) = image::image_dimensions(&artifacts.png).expect("png header");
    assert_eq!((width, height), (80, 80));

    // A 1x1 grid holds only the corner marker
    let svg = fs::read_to_string(&artifacts.svg).expect("read svg");
    assert!(svg.contains(">*</text>"));
    assert!(!svg.contains(">1</text>"));
}

#[test]
fn smoke_rerender_overwrites_in_place() {
    if std::env::var("CI").is_ok() {
        return;
    }

    let config = TableConfig::new(2).expect("config");
    let dir = tempfile::tempdir().expect("tempdir");
    render_table(&config, dir.path()).expect("first render");
    render_table(&config, dir.path()).expect("second render");

    assert!(dir.path().join(PNG_FILENAME).exists());
    assert!(dir.path().join(SVG_FILENAME).exists());
}
