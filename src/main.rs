//! Landung - unified CLI
//!
//! Runs self-play tournaments and observed computer games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use landung::{
    AppConfig, Difficulty, Game, GameMode, GameSnapshot, Tournament, TournamentConfig,
    WatchConfig,
};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    match cli.command {
        Command::Tournament {
            games,
            contender,
            opponent,
            max_turns,
            seed,
            json,
        } => {
            let mut tournament = *config.tournament();
            if let Some(games) = games {
                tournament = tournament.with_games(games);
            }
            if let Some(level) = contender {
                tournament = tournament.with_contender(level_arg(level)?);
            }
            if let Some(level) = opponent {
                tournament = tournament.with_opponent(level_arg(level)?);
            }
            if let Some(max_turns) = max_turns {
                tournament = tournament.with_max_turns(max_turns);
            }
            if let Some(seed) = seed {
                tournament = tournament.with_seed(seed);
            }
            run_tournament(tournament, json)
        }
        Command::Ladder {
            games,
            opponent,
            seed,
            json,
        } => {
            let mut tournament = *config.tournament();
            if let Some(games) = games {
                tournament = tournament.with_games(games);
            }
            if let Some(level) = opponent {
                tournament = tournament.with_opponent(level_arg(level)?);
            }
            if let Some(seed) = seed {
                tournament = tournament.with_seed(seed);
            }
            run_ladder(tournament, json)
        }
        Command::Watch {
            first,
            second,
            max_turns,
            snapshot,
        } => {
            let defaults = config.watch();
            let watch = WatchConfig::new(
                first.map(level_arg).transpose()?.unwrap_or(*defaults.first()),
                second.map(level_arg).transpose()?.unwrap_or(*defaults.second()),
                max_turns.unwrap_or(*defaults.max_turns()),
            );
            run_watch(watch, snapshot)
        }
    }
}

fn level_arg(level: u8) -> Result<Difficulty> {
    Ok(Difficulty::try_from(level)?)
}

/// Run a single tournament and print the report
#[instrument]
fn run_tournament(config: TournamentConfig, json: bool) -> Result<()> {
    config.validate()?;
    let report = Tournament::new(config).run()?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Run every level against the configured opponent
#[instrument]
fn run_ladder(config: TournamentConfig, json: bool) -> Result<()> {
    config.validate()?;
    let reports = Tournament::ladder(&config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{report}");
        }
    }
    Ok(())
}

/// Play and log one computer game
#[instrument]
fn run_watch(config: WatchConfig, snapshot: Option<PathBuf>) -> Result<()> {
    let mode = GameMode::ComputerVsComputer {
        first: *config.first(),
        second: *config.second(),
    };
    info!(mode = %mode.name(), "Starting observed game");

    let (game, _inputs) = Game::new(mode);
    let mut game = game.with_max_turns(*config.max_turns());
    if let Some(path) = snapshot {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        game = game.resume_from(GameSnapshot::from_json(&text)?)?;
    }

    let outcome = game.run(true)?;
    if let Some(done) = game.finished() {
        println!("{}", done.board());
    }
    match game.winner_name() {
        Some(name) => println!("{outcome}: {name}"),
        None => println!("{outcome}"),
    }
    Ok(())
}
