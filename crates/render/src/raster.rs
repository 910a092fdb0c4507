use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use types::{BRAND_COLOR, CANVAS_SIZE, CHEVRON, CHEVRON_WIDTH};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("invalid icon size {0}")]
    InvalidSize(u32),
}

fn px(c: types::Rgb) -> Rgb<u8> {
    Rgb(c.0)
}

/// Square canvas filled with `color`.
pub fn canvas(size: u32, color: types::Rgb) -> RgbImage {
    RgbImage::from_pixel(size, size, px(color))
}

/// Stroke each segment of `points` with the given width.
///
/// Segments have flat caps and joints are not rounded, so the outer side of
/// a sharp corner is left notched. Anything off-canvas is clipped.
pub fn stroke_polyline(img: &mut RgbImage, points: &[[f32; 2]], width: f32, color: types::Rgb) {
    let half = width / 2.0;
    let color = px(color);
    let (w, h) = img.dimensions();
    for seg in points.windows(2) {
        let [ax, ay] = seg[0];
        let [bx, by] = seg[1];
        let dx = bx - ax;
        let dy = by - ay;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            continue;
        }
        // Bounding box of the stroked segment, clamped to the canvas
        let x0 = (ax.min(bx) - half).floor().max(0.0) as u32;
        let y0 = (ay.min(by) - half).floor().max(0.0) as u32;
        let x1 = ((ax.max(bx) + half).ceil() + 1.0).clamp(0.0, w as f32) as u32;
        let y1 = ((ay.max(by) + half).ceil() + 1.0).clamp(0.0, h as f32) as u32;
        let len = len2.sqrt();
        for y in y0..y1 {
            for x in x0..x1 {
                let qx = x as f32 - ax;
                let qy = y as f32 - ay;
                let t = (qx * dx + qy * dy) / len2;
                if !(0.0..=1.0).contains(&t) {
                    continue;
                }
                let dist = (qx * dy - qy * dx).abs() / len;
                if dist <= half {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// The 512x512 brand icon: a white chevron on the brand blue.
pub fn brand_icon() -> RgbImage {
    let mut img = canvas(CANVAS_SIZE, BRAND_COLOR);
    stroke_polyline(&mut img, &CHEVRON, CHEVRON_WIDTH, types::Rgb::WHITE);
    img
}

/// Uniformly rescale a square image to `size`x`size` (bicubic).
pub fn downscale(img: &RgbImage, size: u32) -> Result<RgbImage, RenderError> {
    if size == 0 {
        return Err(RenderError::InvalidSize(size));
    }
    Ok(imageops::resize(img, size, size, FilterType::CatmullRom))
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone()).write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
