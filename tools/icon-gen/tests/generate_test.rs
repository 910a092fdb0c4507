use icon_gen::{generate, Options, Strategy};
use std::path::Path;

fn opts(out: &Path, force_fallback: bool) -> Options {
    Options { out_dir: out.to_path_buf(), force_fallback, apple_touch_icon: false }
}

fn read(dir: &Path, name: &str) -> Vec<u8> {
    std::fs::read(dir.join(name)).unwrap()
}

#[test]
fn test_fallback_writes_constant_pixel() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");
    let outcome = generate(&opts(&out, true)).unwrap();
    assert_eq!(outcome.strategy, Strategy::Fallback);
    assert!(outcome.created_dir);
    assert_eq!(outcome.written.len(), 2);
    for name in ["pwa-512x512.png", "pwa-192x192.png"] {
        let bytes = read(&out, name);
        assert_eq!(bytes, render::FALLBACK_PIXEL);
        assert_eq!(bytes.len(), 85);
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
    }
}

#[test]
fn test_fallback_keeps_existing_apple_touch_icon() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("apple-touch-icon.png"), b"custom").unwrap();
    let mut o = opts(tmp.path(), true);
    o.apple_touch_icon = true;
    let outcome = generate(&o).unwrap();
    assert!(!outcome.created_dir);
    assert_eq!(outcome.written.len(), 2);
    assert_eq!(outcome.manifest.len(), 3);
    assert_eq!(read(tmp.path(), "apple-touch-icon.png"), b"custom");

    let fresh = tempfile::tempdir().unwrap();
    let mut o = opts(fresh.path(), true);
    o.apple_touch_icon = true;
    generate(&o).unwrap();
    assert_eq!(read(fresh.path(), "apple-touch-icon.png"), render::FALLBACK_PIXEL);
}

#[test]
fn test_missing_parent_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("a").join("public");
    assert!(generate(&opts(&out, true)).is_err());
}

#[test]
fn test_manifest_json_lists_written_icons() {
    let tmp = tempfile::tempdir().unwrap();
    let outcome = generate(&opts(tmp.path(), true)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&outcome.manifest_json().unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["src"], "pwa-512x512.png");
    assert_eq!(arr[1]["sizes"], "192x192");
    assert_eq!(arr[1]["type"], "image/png");
}

#[cfg(feature = "draw")]
mod draw {
    use super::*;

    #[test]
    fn test_draw_writes_real_icons() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("public");
        let outcome = generate(&opts(&out, false)).unwrap();
        assert_eq!(outcome.strategy, Strategy::Draw);
        assert!(out.is_dir());

        let big = image::open(out.join("pwa-512x512.png")).unwrap().to_rgb8();
        assert_eq!(big.dimensions(), (512, 512));
        assert_eq!(big.get_pixel(0, 0).0, types::BRAND_COLOR.0);
        let small = image::open(out.join("pwa-192x192.png")).unwrap().to_rgb8();
        assert_eq!(small.dimensions(), (192, 192));
        assert!(!out.join("apple-touch-icon.png").exists());
    }

    #[test]
    fn test_draw_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        generate(&opts(tmp.path(), false)).unwrap();
        let first = (read(tmp.path(), "pwa-512x512.png"), read(tmp.path(), "pwa-192x192.png"));
        generate(&opts(tmp.path(), false)).unwrap();
        let second = (read(tmp.path(), "pwa-512x512.png"), read(tmp.path(), "pwa-192x192.png"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_apple_touch_icon_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("apple-touch-icon.png"), b"stale").unwrap();
        let mut o = opts(tmp.path(), false);
        o.apple_touch_icon = true;
        let outcome = generate(&o).unwrap();
        assert_eq!(outcome.written.len(), 3);
        let img = image::open(tmp.path().join("apple-touch-icon.png")).unwrap();
        assert_eq!((img.width(), img.height()), (180, 180));
    }
}

#[cfg(not(feature = "draw"))]
#[test]
fn test_no_draw_build_falls_back_automatically() {
    assert!(!render::draw_available());
    assert_eq!(Strategy::detect(false), Strategy::Fallback);

    let tmp = tempfile::tempdir().unwrap();
    let outcome = generate(&opts(tmp.path(), false)).unwrap();
    assert_eq!(outcome.strategy, Strategy::Fallback);
    assert_eq!(read(tmp.path(), "pwa-512x512.png"), render::FALLBACK_PIXEL);
    assert_eq!(read(tmp.path(), "pwa-192x192.png"), render::FALLBACK_PIXEL);
}
