use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use expedition_sim::agents::{CardPolicyKind, DrawPolicyKind};
use expedition_sim::bench::{open_sink, run_benchmark, BenchConfig, ReportFormat};
use expedition_sim::core::{GameConfig, PlayerId, DEFAULT_MAX_TURNS};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lineup {
    /// Lowest + Threshold vs Highest + Threshold
    Classic,
    /// Lowest + MeanComparison vs ProximitySeeking + MultiPileMeanComparison
    Adaptive,
    /// Random card and draw for both seats
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "expedition-bench", version)]
#[command(about = "Play repeated expedition games between heuristic agents and report scores and timings")]
struct Args {
    /// Number of rounds (one game per round)
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// Wall-clock budget per round in milliseconds
    #[arg(long, default_value_t = 15_000)]
    timeout_ms: u64,

    /// Seed of the first round; later rounds add their index. Clock-based if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Agent line-up
    #[arg(long, value_enum, default_value_t = Lineup::Classic)]
    lineup: Lineup,

    /// Override seat 0's card policy (lowest, highest, random, proximity)
    #[arg(long)]
    p0_card: Option<CardPolicyKind>,

    /// Override seat 0's draw policy (threshold, random, mean, multi-mean)
    #[arg(long)]
    p0_draw: Option<DrawPolicyKind>,

    /// Override seat 1's card policy
    #[arg(long)]
    p1_card: Option<CardPolicyKind>,

    /// Override seat 1's draw policy
    #[arg(long)]
    p1_draw: Option<DrawPolicyKind>,

    /// Turn cap per game
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional path to write the report to instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args);
    let mut sink = open_sink(config.format, args.output.as_deref()).with_context(|| match &args.output {
        Some(path) => format!("Failed to open report file {}", path.display()),
        None => "Failed to open stdout".to_string(),
    })?;

    run_benchmark(&config, &mut *sink).context("Benchmark failed")?;
    Ok(())
}

fn build_config(args: &Args) -> BenchConfig {
    let mut game = match args.lineup {
        Lineup::Classic => GameConfig::classic(),
        Lineup::Adaptive => GameConfig::adaptive(),
        Lineup::Random => GameConfig::random(),
    }
    .with_max_turns(args.max_turns);

    let overrides = [
        (PlayerId::FIRST, args.p0_card, args.p0_draw),
        (PlayerId::SECOND, args.p1_card, args.p1_draw),
    ];
    for (player, card, draw) in overrides {
        let mut profile = game.seat(player);
        if let Some(card) = card {
            profile.card = card;
        }
        if let Some(draw) = draw {
            profile.draw = draw;
        }
        game = game.with_seat(player, profile);
    }

    let format = match args.format {
        Format::Text => ReportFormat::Text,
        Format::Json => ReportFormat::Json,
    };

    let mut config = BenchConfig::new()
        .with_rounds(args.rounds)
        .with_round_timeout(Duration::from_millis(args.timeout_ms))
        .with_game(game)
        .with_format(format);
    if let Some(seed) = args.seed {
        config = config.with_base_seed(seed);
    }
    config
}
