/// Widget Sim - replay input scripts against the playlist widget
mod sim;

use anyhow::Context;
use clap::Parser;
use sim::{SimStep, SimulatedEngine, TerminalView};
use soul_widget::{Player, Playlist, WidgetConfig, WidgetInput};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "widget-sim")]
#[command(about = "Drive the Soul Player playlist widget from a JSON-lines script", long_about = None)]
struct Cli {
    /// Script file, one step per line; reads stdin when omitted
    script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Duration every track reports once its metadata loads
    #[arg(long, default_value_t = 180.0)]
    track_secs: f64,

    /// Fail loading any track whose URL contains this text (repeatable)
    #[arg(long)]
    fail_url: Vec<String>,

    /// Print player events as JSON after each step
    #[arg(long)]
    events: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soul_widget=info,widget_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = WidgetConfig::load(cli.config.as_deref())?;
    tracing::info!("Starting widget simulation");
    tracing::info!("Track duration: {}s", cli.track_secs);

    let engine = SimulatedEngine::new(cli.track_secs, cli.fail_url);
    let mut player = Player::new(Playlist::builtin(), engine, TerminalView, config);
    tracing::info!(
        "Playlist: {} tracks, config: {:?}",
        player.playlist().len(),
        player.config()
    );
    player.initialize()?;
    print_events(&mut player, cli.events)?;

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let step: SimStep = serde_json::from_str(line)
            .with_context(|| format!("Invalid step on line {}: {}", number + 1, line))?;

        let inputs = match step {
            SimStep::Advance { advance_secs } => player.engine_mut().advance(advance_secs),
            SimStep::Input(input) => vec![input],
        };

        for input in inputs {
            run_input(&mut player, input);
        }
        print_events(&mut player, cli.events)?;
    }

    tracing::info!(
        "Simulation finished on track {} (playing: {})",
        player.current_index(),
        player.is_playing()
    );

    Ok(())
}

fn run_input(player: &mut Player<SimulatedEngine, TerminalView>, input: WidgetInput) {
    println!("> {:?}", input);
    if let Err(e) = player.handle(input) {
        warn!("Input failed: {}", e);
    }
}

fn print_events(
    player: &mut Player<SimulatedEngine, TerminalView>,
    enabled: bool,
) -> anyhow::Result<()> {
    let events = player.drain_events();
    if !enabled {
        return Ok(());
    }

    for event in events {
        println!("[event]    {}", serde_json::to_string(&event)?);
    }
    Ok(())
}
