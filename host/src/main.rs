//! Headless duel runner.
//!
//! Replays an input script through the full game driver on a simulated frame
//! clock and prints a JSON match report to stdout. Logs go to stderr.
//!
//! Usage:
//!   duel-host [script.json] > report.json
//!   duel-host < script.json

mod config;
mod headless;
mod script;

use duel_core::*;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::headless::LogPresenter;
use crate::script::load_script;

#[derive(Debug, Serialize)]
struct Report {
    mode: Mode,
    seed: u32,
    seed_commit: String,
    finished: bool,
    result: Option<MatchResult>,
    rounds: Vec<RoundSummary>,
    frames: usize,
    ticks: usize,
    elapsed_ms: u64,
    script_exhausted: bool,
    replay_digest: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    let path = std::env::args().nth(1);
    let script = load_script(path.as_deref())?;
    info!(frames = script.frames.len(), "script loaded");

    let report = run(&config, script);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Script values win over the environment.
fn run(config: &Config, script: MatchScript) -> Report {
    let mode = script.mode.unwrap_or(config.mode);
    let seed = script.seed.unwrap_or(config.seed);

    let mut game = Game::new(LogPresenter::default(), ScriptInput::new(script.frames), seed);
    let mut now = 0;
    game.start_match(mode, now);

    let mut frames = 0;
    while frames < config.max_frames && game.screen() != Screen::EndScreen {
        now += config.frame_ms;
        game.frame(now);
        frames += 1;
    }

    let finished = game.screen() == Screen::EndScreen;
    if !finished {
        warn!(frames, "frame limit reached before the match ended");
    }

    Report {
        mode,
        seed: game.match_seed(),
        seed_commit: hex::encode(hash_seed(game.match_seed())),
        finished,
        result: game.last_result(),
        rounds: game.presentation().rounds.clone(),
        frames,
        ticks: game.input_log().len(),
        elapsed_ms: now,
        script_exhausted: game.input().exhausted(),
        replay_digest: hex::encode(game.replay_digest()),
    }
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_frames: usize) -> Config {
        Config {
            mode: Mode::Pva,
            seed: 42,
            frame_ms: 16,
            max_frames,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn cornered_player_loses_to_ai() {
        // Keep backing into the left wall for the whole match.
        let script = MatchScript {
            mode: None,
            seed: None,
            frames: vec![InputSet(control::A_LEFT); 10_000],
        };
        let report = run(&config(20_000), script);
        assert!(report.finished);
        assert!(!report.script_exhausted);
        assert!(report.ticks > 0);
        let result = report.result.unwrap();
        assert_eq!(result.winner, Side::B);
        assert_eq!(report.rounds.len(), 3);
        assert_eq!(report.seed, 42);
        assert_eq!(report.replay_digest.len(), 64);
    }

    #[test]
    fn frame_limit_stops_unfinished_match() {
        let script = MatchScript {
            mode: Some(Mode::Pvp),
            seed: Some(1),
            frames: Vec::new(),
        };
        let report = run(&config(300), script);
        assert!(!report.finished);
        assert_eq!(report.result, None);
        assert_eq!(report.frames, 300);
        assert_eq!(report.elapsed_ms, 4_800);
        assert_eq!(report.mode, Mode::Pvp);
        assert_eq!(report.seed, 1);
    }

    #[test]
    fn report_serializes_digest_as_hex() {
        let script = MatchScript {
            mode: Some(Mode::Pvp),
            seed: Some(1),
            frames: Vec::new(),
        };
        let report = run(&config(10), script);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "pvp");
        assert_eq!(json["finished"], false);
        assert_eq!(
            json["seed_commit"].as_str().unwrap(),
            hex::encode(hash_seed(1))
        );
    }
}
