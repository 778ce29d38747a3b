use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod renderer;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Generate the PWA manifest icon set (gradient checkmark PNGs)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::ensure_png_support()?;
    icon_gen::generate_icons(&renderer::SIZES, &args.output)?;

    Ok(())
}
