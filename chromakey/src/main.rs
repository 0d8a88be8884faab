mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use compositor::{Composite, chroma_key::ChromaKeyConfig, io, picker};

fn main() -> Result<()> {
    env_logger::init();

    if let Err(e) = config::init() {
        log::warn!("config init failed, using built-in defaults: {e}");
    }

    run(cli::Args::parse())
}

fn run(args: cli::Args) -> Result<()> {
    let defaults = config::defaults();

    let foreground = io::load_image(&args.foreground)
        .with_context(|| format!("load foreground {}", args.foreground.display()))?;
    let background = io::load_image(&args.background)
        .with_context(|| format!("load background {}", args.background.display()))?;

    let key_color = match (args.pick, args.key) {
        (Some((x, y)), _) => picker::pick_color(&foreground, x, y)
            .with_context(|| format!("pick key color at ({x}, {y})"))?,
        (None, Some(key)) => key,
        (None, None) => picker::parse_key_color(&defaults.key_color)
            .with_context(|| "invalid default key color in config file")?,
    };

    let threshold = args.threshold.unwrap_or(defaults.threshold);

    log::info!(
        "compositing with key color ({}, {}, {}) and threshold {}",
        key_color[0],
        key_color[1],
        key_color[2],
        threshold
    );

    let output = ChromaKeyConfig::new()
        .with_key_color(key_color)
        .with_threshold(threshold)
        .composite(&foreground, &background)?;

    io::save_image(&output, &args.output)
        .with_context(|| format!("save output {}", args.output.display()))?;

    println!("Saved composite to {}", args.output.display());
    Ok(())
}
