use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marquee_carousel::{CarouselSession, HostEvent, ResizeSample, Settings};
use marquee_model::{MediaKind, decode_listing};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "marquee-replay",
    about = "Replay recorded host events through a carousel and print per-frame snapshots"
)]
struct Cli {
    /// Catalog list payload (paged envelope or bare array of records)
    #[arg(long)]
    items: PathBuf,
    /// JSON array of host events
    #[arg(long)]
    events: PathBuf,
    /// TOML settings overriding the compiled defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Media kind for records without a `media_type`
    #[arg(long, value_enum, default_value_t = KindArg::Movie)]
    kind: KindArg,
    /// Window width at mount
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f32,
    /// Carousel container width at mount; defaults to the window width
    #[arg(long)]
    container_width: Option<f32>,
    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_settings: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Movie,
    Tv,
}

impl From<KindArg> for MediaKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Tv => MediaKind::Tv,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing subscriber; stdout carries the snapshots
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if cli.print_settings {
        print!("{}", settings.effective().to_toml_string()?);
        return Ok(());
    }

    let raw_items = std::fs::read_to_string(&cli.items)
        .with_context(|| format!("reading items from {}", cli.items.display()))?;
    let listing = decode_listing(&raw_items, cli.kind.into())
        .with_context(|| format!("decoding items from {}", cli.items.display()))?;
    tracing::info!(
        items = listing.items.len(),
        skipped = listing.skipped,
        "loaded catalog listing"
    );

    let raw_events = std::fs::read_to_string(&cli.events)
        .with_context(|| format!("reading events from {}", cli.events.display()))?;
    let events: Vec<HostEvent> = serde_json::from_str(&raw_events)
        .with_context(|| format!("decoding events from {}", cli.events.display()))?;

    let sample = ResizeSample {
        viewport_width: cli.viewport_width,
        container_width: cli.container_width.unwrap_or(cli.viewport_width),
    };
    let mut session = CarouselSession::new(listing.items, sample, settings)?;
    tracing::info!(
        breakpoint = ?session.breakpoint(),
        events = events.len(),
        "replaying events"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut frames = 0usize;
    for event in events {
        let outcome = session.handle(event);
        if outcome.suppress_vertical_scroll {
            tracing::debug!(?event, "vertical scroll suppressed");
        }
        if let Some(snapshot) = outcome.snapshot {
            serde_json::to_writer(&mut out, &snapshot)?;
            out.write_all(b"\n")?;
            frames += 1;
        }
    }
    out.flush()?;

    tracing::info!(frames, "replay finished");
    Ok(())
}
