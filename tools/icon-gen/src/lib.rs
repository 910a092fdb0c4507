//! Placeholder PWA icon generation.
//!
//! [`generate`] writes `pwa-512x512.png` and `pwa-192x192.png` into an output
//! directory. With drawing compiled in, the icons are a white chevron on the
//! brand blue; otherwise both files receive the same pre-encoded 1x1 PNG.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use types::{ManifestIcon, APPLE_TOUCH, PWA_192, PWA_512};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Draw,
    Fallback,
}

impl Strategy {
    /// Draw when this build can, unless the caller asked for the fallback.
    pub fn detect(force_fallback: bool) -> Self {
        if !force_fallback && cfg!(feature = "draw") && render::draw_available() {
            Strategy::Draw
        } else {
            Strategy::Fallback
        }
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    pub out_dir: PathBuf,
    pub force_fallback: bool,
    pub apple_touch_icon: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("public"), force_fallback: false, apple_touch_icon: false }
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub strategy: Strategy,
    pub created_dir: bool,
    pub written: Vec<PathBuf>,
    pub manifest: Vec<ManifestIcon>,
}

pub fn generate(opts: &Options) -> Result<Outcome> {
    let strategy = Strategy::detect(opts.force_fallback);
    let created_dir = io::ensure_dir(&opts.out_dir)?;
    let mut outcome = Outcome { strategy, created_dir, written: Vec::new(), manifest: Vec::new() };
    match strategy {
        Strategy::Draw => draw_icons(&opts.out_dir, opts.apple_touch_icon, &mut outcome)?,
        Strategy::Fallback => fallback_icons(&opts.out_dir, opts.apple_touch_icon, &mut outcome)?,
    }
    Ok(outcome)
}

#[cfg(feature = "draw")]
fn draw_icons(dir: &Path, apple_touch_icon: bool, outcome: &mut Outcome) -> Result<()> {
    info!("drawing branded icons");
    let icon = render::brand_icon();
    let path = io::write_asset(dir, PWA_512.file_name, &render::encode_png(&icon)?)?;
    outcome.record(path, PWA_512.manifest_entry());

    let mut smaller = vec![PWA_192];
    if apple_touch_icon {
        smaller.push(APPLE_TOUCH);
    }
    for target in smaller {
        let scaled = render::downscale(&icon, target.size)?;
        let path = io::write_asset(dir, target.file_name, &render::encode_png(&scaled)?)?;
        outcome.record(path, target.manifest_entry());
    }
    info!(count = outcome.written.len(), "real icons generated");
    Ok(())
}

#[cfg(not(feature = "draw"))]
fn draw_icons(_dir: &Path, _apple_touch_icon: bool, _outcome: &mut Outcome) -> Result<()> {
    anyhow::bail!("icon drawing is not compiled into this build")
}

fn fallback_icons(dir: &Path, apple_touch_icon: bool, outcome: &mut Outcome) -> Result<()> {
    warn!("image drawing unavailable; using fallback 1x1 pixel icons");
    // Same bytes for both sizes: nothing is rescaled here.
    for target in [PWA_512, PWA_192] {
        let path = io::write_asset(dir, target.file_name, render::FALLBACK_PIXEL)?;
        outcome.record(path, target.manifest_entry());
    }
    if apple_touch_icon {
        match io::write_asset_if_absent(dir, APPLE_TOUCH.file_name, render::FALLBACK_PIXEL)? {
            Some(path) => outcome.record(path, APPLE_TOUCH.manifest_entry()),
            None => {
                info!("keeping existing {}", APPLE_TOUCH.file_name);
                outcome.manifest.push(APPLE_TOUCH.manifest_entry());
            }
        }
    }
    Ok(())
}

impl Outcome {
    fn record(&mut self, path: PathBuf, entry: ManifestIcon) {
        info!(path = %path.display(), "wrote icon");
        self.written.push(path);
        self.manifest.push(entry);
    }

    /// The manifest `icons` array for the generated files.
    pub fn manifest_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.manifest)?)
    }
}
