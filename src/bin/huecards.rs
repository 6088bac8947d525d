use anyhow::Context as _;
use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Generate hue-swept placeholder cards into `./output`.
///
/// Every run writes `<index>.{webp,jpg,png,avif,tiff}` for each card and overwrites previous
/// output.
#[derive(Parser, Debug)]
#[command(name = "huecards", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cfg = huecards::CardConfig::default();
    let cfg_json = serde_json::to_string(&cfg).context("serialize config")?;
    tracing::debug!(config = %cfg_json, "starting card generation");

    let summary = huecards::generate_cards(&cfg)
        .with_context(|| format!("generate cards into '{}'", cfg.out_dir.display()))?;

    eprintln!(
        "wrote {} files for {} cards to {}",
        summary.files_written,
        summary.cards,
        cfg.out_dir.display()
    );
    Ok(())
}
