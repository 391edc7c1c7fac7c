use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Streams sprite-animated frames to a 1-D LED strip driver over UDP.
#[derive(Parser, Debug)]
#[command(name = "glimmer", version)]
struct Cli {
    /// Destination hostname or address of the strip driver.
    host: String,

    /// Destination UDP port.
    #[arg(long, default_value_t = glimmer::DEFAULT_PORT)]
    port: u16,

    /// Configuration JSON; partial files are fine, missing fields keep
    /// their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of pixels on the strip.
    #[arg(long)]
    strip_len: Option<usize>,

    /// Frame pacing target in milliseconds.
    #[arg(long)]
    frame_period_ms: Option<u64>,

    /// Seed for deterministic sprite spawning.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames instead of running forever.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => glimmer::Config::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => glimmer::Config::default(),
    };
    if let Some(len) = cli.strip_len {
        config.strip_len = len;
    }
    if let Some(ms) = cli.frame_period_ms {
        config.frame_period_ms = ms;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let mut sender = glimmer::UdpSender::connect(&cli.host, cli.port)
        .with_context(|| format!("set up sender for {}:{}", cli.host, cli.port))?;

    tracing::info!(
        remote = %sender.remote(),
        strip_len = config.strip_len,
        frame_period_ms = config.frame_period_ms,
        "starting frame loop"
    );

    let mut pipeline = glimmer::Pipeline::new(config)?;
    pipeline.run(&mut sender, cli.max_frames)?;

    tracing::info!(
        frames = pipeline.frame(),
        dropped = pipeline.dropped_frames(),
        "frame loop finished"
    );
    Ok(())
}
