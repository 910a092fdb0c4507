use anyhow::Result;
use clap::Parser;
use icon_gen::{generate, Options};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate placeholder PWA icons (512x512 and 192x192)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory the icons are written to; created if missing
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,

    /// Write the 1x1 fallback icons even when drawing is available
    #[arg(long)]
    fallback: bool,

    /// Also produce apple-touch-icon.png (180x180)
    #[arg(long)]
    apple_touch_icon: bool,

    /// Print the manifest `icons` array as JSON
    #[arg(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout is reserved for the manifest JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let opts = Options {
        out_dir: args.out_dir,
        force_fallback: args.fallback,
        apple_touch_icon: args.apple_touch_icon,
    };
    let outcome = generate(&opts)?;
    if args.manifest {
        println!("{}", outcome.manifest_json()?);
    }
    Ok(())
}
