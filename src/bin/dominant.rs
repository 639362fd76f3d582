use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use dominant_colors_wasm::{Downsampler, argb_from_rgba};
use anyhow::Context;
use anyhow::Result;
use image::{DynamicImage, GenericImageView, imageops::FilterType};
use log::info;
use serde_json::json;

/// Print the dominant colors of images, ranked by hue-bucket prevalence.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Resize so the longest side equals this before extracting (nearest-neighbour)
    #[arg(short, long)]
    downscale: Option<u32>,

    /// Emit one JSON document per input instead of plain lines
    #[arg(short, long)]
    json: bool,
}

/// Size that brings the longest side to `scale`, keeping aspect ratio.
/// Each side is at least one pixel.
fn fit_longest_side(orig_w: u32, orig_h: u32, scale: u32) -> (u32, u32) {
    let max_side = orig_w.max(orig_h) as f32;
    let ratio = scale as f32 / max_side;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    (w, h)
}

fn load(path: &Path, downscale: Option<u32>) -> Result<image::RgbaImage> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let img = image::load_from_memory(&bytes).context("unable to decode image")?;

    let working: DynamicImage = if let Some(scale) = downscale {
        let (orig_w, orig_h) = img.dimensions();
        let (w, h) = fit_longest_side(orig_w, orig_h, scale);
        DynamicImage::ImageRgba8(image::imageops::resize(&img, w, h, FilterType::Nearest))
    } else {
        img
    };
    Ok(working.to_rgba8())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut downsampler = Downsampler::new();

    for input in &args.inputs {
        let rgba = load(input, args.downscale)?;
        let (w, h) = rgba.dimensions();
        info!("{}: {w}x{h}", input.display());

        let colors = downsampler
            .downsample(&argb_from_rgba(&rgba), h, w)
            .context("dominant color extraction failed")?;

        if args.json {
            let entries: Vec<_> = colors
                .iter()
                .map(|c| {
                    json!({
                        "hex": c.to_hex(),
                        "r": c.r(),
                        "g": c.g(),
                        "b": c.b(),
                        "weight": c.weight,
                    })
                })
                .collect();
            let doc = json!({ "path": input.display().to_string(), "colors": entries });
            println!("{doc}");
        } else {
            println!("{}", input.display());
            for c in &colors {
                println!("  {} {:.4}", c.to_hex(), c.weight);
            }
        }
    }

    Ok(())
}
