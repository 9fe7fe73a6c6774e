//! stretchtext - run StretchText over an HTML file
//!
//! Loads the document, installs StretchText, replays presses on the selected
//! elements (waiting a frame after each) and prints the resulting markup.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use stretch_dom::SimpleSelector;
use stretch_html::HtmlSerializer;
use stretchtext::{Config, HostCapabilities, Page};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// HTML file to load
    input: PathBuf,

    /// Press the first element matching this selector (`#id`, `.class`,
    /// `tag` or `[attr=value]`). Repeat to press several times.
    #[arg(long = "press", value_name = "SELECTOR")]
    presses: Vec<String>,

    /// JSON configuration file; missing keys take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Behave like a host without animation frames
    #[arg(long)]
    timer_fallback: bool,

    /// Indent the printed document
    #[arg(long)]
    pretty: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    Ok(match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let html = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let capabilities = HostCapabilities {
        animation_frames: !cli.timer_fallback,
    };
    let url = format!("file://{}", cli.input.display());
    let mut page = Page::load_with(&html, &url, config, capabilities)?;

    for raw in &cli.presses {
        let Some(selector) = SimpleSelector::parse(raw) else {
            bail!("unsupported selector: {raw}");
        };
        let Some(target) = page.document().query_selector(&selector) else {
            bail!("nothing matches {raw}");
        };

        page.press(target);
        smol::Timer::after(page.frame_interval()).await;
        let completed = page.run_frame();

        tracing::info!(
            "Pressed {} ({} toggles completed, open: {})",
            page.document().describe(target),
            completed,
            page.is_open(target)
        );
    }

    let serializer = if cli.pretty { HtmlSerializer::pretty() } else { HtmlSerializer::new() };
    println!("{}", serializer.serialize_inner(page.document().tree(), page.document().tree().root()));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    smol::block_on(run(cli))
}
