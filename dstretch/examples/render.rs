//! Renders one image through the enhancement pipeline.
//!
//! Usage: cargo run -p dstretch --example render -- <input> <output> [params.yaml|params.json]

use std::path::Path;

use anyhow::{bail, Context};
use common::{deserialize, setup_logging, FileFormat};
use dstretch::{render, Channel, ParameterSet, PixelBuffer};
use image::RgbaImage;

fn load_params(path: &str) -> anyhow::Result<ParameterSet> {
    let format = FileFormat::from_file_name(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file {}", path))?;
    let params: ParameterSet = deserialize(&text, format)?;

    Ok(params)
}

fn load_image(path: &Path) -> anyhow::Result<PixelBuffer> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .into_rgba8();
    let (width, height) = decoded.dimensions();

    Ok(PixelBuffer::new(width, height, decoded.into_raw())?)
}

fn main() -> anyhow::Result<()> {
    setup_logging("info")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match args.as_slice() {
        [input, output, ..] => (input, output),
        _ => bail!("usage: render <input> <output> [params.yaml|params.json]"),
    };

    let params = match args.get(2) {
        Some(path) => load_params(path)?,
        None => ParameterSet::default(),
    };

    let source = load_image(Path::new(input))?;
    tracing::info!("Loaded {} from {}", source, input);

    let (buffer, histogram) = render(&source, &params).into_parts();

    for channel in [Channel::Red, Channel::Green, Channel::Blue] {
        let bins = histogram.channel(channel);
        let peak = (0..bins.len()).max_by_key(|&i| bins[i]).unwrap_or(0);
        tracing::info!("{} histogram peak at {}", channel, peak);
    }

    let (width, height) = (buffer.width(), buffer.height());
    let Some(encoded) = RgbaImage::from_raw(width, height, buffer.take_bytes()) else {
        bail!("Rendered buffer does not match {}x{}", width, height);
    };
    encoded
        .save(output)
        .with_context(|| format!("Failed to write {}", output))?;
    tracing::info!("Saved {}", output);

    Ok(())
}
