use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "spingif",
    version,
    about = "Render a still image as a looping rotation GIF"
)]
struct Cli {
    /// Input image (PNG, JPEG, ...).
    input: PathBuf,

    /// Output GIF path.
    output: PathBuf,

    /// Number of steps to complete a full rotation.
    #[arg(
        long,
        default_value_t = spingif::DEFAULT_STEPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    steps: u32,

    /// Delay between steps in hundredths of a second.
    #[arg(long, default_value_t = spingif::DEFAULT_DELAY)]
    delay: u16,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cfg = spingif::SpinConfig {
        steps: cli.steps,
        delay: cli.delay,
        ..spingif::SpinConfig::default()
    };
    cfg.validate()?;

    let original = spingif::open_image(&cli.input)
        .with_context(|| format!("cannot load image '{}'", cli.input.display()))?;

    let palette = Arc::new(spingif::Palette::web_safe());
    let seq = spingif::synthesize_with(&original, &cfg, palette)?;

    tracing::info!("writing to {}", cli.output.display());
    spingif::write_animated_gif(&cli.output, &seq)
        .with_context(|| format!("cannot create image '{}'", cli.output.display()))?;

    Ok(())
}
