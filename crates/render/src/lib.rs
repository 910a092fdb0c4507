//! Icon drawing and the pre-encoded fallback image.
//!
//! Drawing lives behind the `draw` feature. Builds without it only have
//! [`FALLBACK_PIXEL`] to offer, which callers detect through
//! [`draw_available`].

mod fallback;
#[cfg(feature = "draw")]
mod raster;

pub use fallback::FALLBACK_PIXEL;
#[cfg(feature = "draw")]
pub use raster::{brand_icon, canvas, downscale, encode_png, stroke_polyline, RenderError};

/// Whether this build can draw icons.
pub fn draw_available() -> bool {
    cfg!(feature = "draw")
}
