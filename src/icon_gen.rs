use crate::renderer;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fmt,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// The raster/PNG facility is not usable in this build.
///
/// Raised by the startup probe, before any file is touched.
#[derive(Debug)]
pub struct MissingCapability {
    reason: String,
}

impl fmt::Display for MissingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PNG encoding is unavailable ({}). \
             Rebuild with the `png` feature of the `image` crate enabled, \
             or use the browser-based icon generator page instead",
            self.reason
        )
    }
}

impl std::error::Error for MissingCapability {}

/// Probe the PNG encoder once at startup by encoding a 1x1 image in memory.
pub fn ensure_png_support() -> Result<(), MissingCapability> {
    let probe = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
    let mut buf = Vec::new();
    write_png(&probe, &mut buf).map_err(|err| MissingCapability {
        reason: err.to_string(),
    })
}

/// Render every size in order and write `icon-{size}.png` into `out_dir`,
/// overwriting existing files. Returns the number of files written.
///
/// Each write is independent and final once flushed; a failure partway
/// leaves the files already written on disk.
pub fn generate_icons(sizes: &[u32], out_dir: &Path) -> Result<usize> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating PWA icons...");

    let mut written = 0;
    for &size in sizes {
        let icon = renderer::render(size);
        let filename = format!("icon-{size}.png");
        save_png(&icon, &out_dir.join(&filename))?;
        written += 1;
        println!("  ✓ Generated {filename} ({size}x{size})");
    }

    println!("Generated {written} icons in {}", out_dir.display());
    Ok(written)
}

fn save_png(icon: &RgbImage, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(icon, &mut out)?;
    out.flush()?;
    Ok(())
}

// Encode as 24-bit PNG, no alpha channel
fn write_png<W: Write>(icon: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(icon.as_raw(), icon.width(), icon.height(), ColorType::Rgb8)?;
    Ok(())
}
