//! Command line front end: compose a logo and export it as SVG.

use std::path::PathBuf;

use clap::Parser;

use logomark::{Configurable, LogoComposer, LogoProfile, LogoShape, rasterize};

#[derive(Debug, Parser)]
#[command(name = "logomark", about = "Compose a logo and export it as a standalone SVG file")]
struct Args {
    /// Logo text (at most ten characters; longer input is truncated)
    #[arg(long)]
    text: Option<String>,

    /// Icon background shape
    #[arg(long, value_enum)]
    shape: Option<LogoShape>,

    /// Gradient start color
    #[arg(long)]
    color1: Option<String>,

    /// Gradient end color
    #[arg(long)]
    color2: Option<String>,

    /// Label font size (clamped to 20-48)
    #[arg(long)]
    font_size: Option<u32>,

    /// Draw the text directly on the gradient, without an icon background
    #[arg(long)]
    no_icon: bool,

    /// Apply settings from a profile JSON file before the flags above
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Output path for the SVG artifact
    #[arg(long, default_value = "logo.svg")]
    out: PathBuf,

    /// Also rasterize a PNG preview to this path
    #[arg(long)]
    png: Option<PathBuf>,

    /// Side length of the rasterized PNG preview, in pixels
    #[arg(long, default_value_t = 512)]
    png_size: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut composer = LogoComposer::new();

    if let Some(path) = &args.profile {
        let json = std::fs::read_to_string(path)?;
        composer.apply_profile(&LogoProfile::from_json(&json)?);
    }

    if let Some(text) = args.text {
        composer.set_text(text);
    }
    if let Some(shape) = args.shape {
        composer.set_shape(shape);
    }
    if let Some(color) = args.color1 {
        composer.set_color1(color);
    }
    if let Some(color) = args.color2 {
        composer.set_color2(color);
    }
    if let Some(size) = args.font_size {
        composer.set_font_size(size);
    }
    if args.no_icon {
        composer.set_show_icon(false);
    }

    let preview = composer.render().clone();

    let Some(export) = composer.export() else {
        return Ok(());
    };
    export.write_to(&args.out)?;
    println!("wrote {}", args.out.display());

    if let Some(png_path) = &args.png {
        let img = rasterize(&preview, args.png_size).ok_or("failed to rasterize preview")?;
        img.save(png_path)?;
        println!("wrote {}", png_path.display());
    }

    Ok(())
}
