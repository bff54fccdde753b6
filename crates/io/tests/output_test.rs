use image::{ImageBuffer, Rgba, RgbaImage};
use io::{ensure_output_directory, write_png, OutputError};

#[test]
fn test_ensure_output_directory_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("src-tauri").join("icons");
    ensure_output_directory(&dir).unwrap();
    ensure_output_directory(&dir).unwrap();
    assert!(dir.is_dir());
    let entries: Vec<_> = std::fs::read_dir(root.path().join("src-tauri")).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_ensure_output_directory_under_a_file_fails() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("src-tauri");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let err = ensure_output_directory(&blocker.join("icons")).unwrap_err();
    assert!(matches!(err, OutputError::CreateDir { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_write_png_overwrites() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("icon.png");
    let red: RgbaImage = ImageBuffer::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
    let blue: RgbaImage = ImageBuffer::from_pixel(16, 16, Rgba([0, 0, 255, 255]));
    write_png(&red, &path).unwrap();
    write_png(&blue, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (16, 16));
    assert_eq!(back.get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn test_write_png_into_missing_directory_fails() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("missing").join("icon.png");
    let img: RgbaImage = ImageBuffer::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let err = write_png(&img, &path).unwrap_err();
    match err {
        OutputError::WriteIcon { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}
