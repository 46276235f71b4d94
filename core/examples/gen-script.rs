//! Generates match script JSON files for the headless host.
//!
//! Usage:
//!   cargo run -p duel-core --example gen-script -- [retreat|duel|short] > script.json

use duel_core::*;

const SEED: u32 = 42;
const FRAME_MS: u64 = 16;
const MAX_FRAMES: usize = 20_000;

/// Discards everything; only the simulation result matters here.
struct Headless;

impl Presentation for Headless {
    fn render_frame(&mut self, _world: &WorldView<'_>) -> Result<(), PresentationError> {
        Ok(())
    }
    fn play_sound(&mut self, _sound: Sound) -> Result<(), PresentationError> {
        Ok(())
    }
    fn play_music(&mut self, _music: Music) -> Result<(), PresentationError> {
        Ok(())
    }
    fn stop_music(&mut self, _music: Music) -> Result<(), PresentationError> {
        Ok(())
    }
}

fn main() {
    let kind = std::env::args().nth(1).unwrap_or_else(|| "retreat".to_string());

    let script = match kind.as_str() {
        "retreat" => {
            // Player 1 backs into the wall and never fires; the AI should
            // take all three rounds.
            MatchScript {
                mode: Some(Mode::Pva),
                seed: Some(SEED),
                frames: vec![InputSet(control::A_LEFT); 6_000],
            }
        }
        "duel" => {
            // Both players hold fire; player 1 strafes toward the middle first.
            let frames = (0..3_000)
                .map(|tick| {
                    let a = if tick % 400 < 60 {
                        control::A_RIGHT | control::A_FIRE
                    } else {
                        control::A_FIRE
                    };
                    InputSet(a | control::B_FIRE)
                })
                .collect();
            MatchScript {
                mode: Some(Mode::Pvp),
                seed: Some(SEED),
                frames,
            }
        }
        "short" => {
            // Too short to finish a round; exercises the host's frame cap.
            MatchScript {
                mode: Some(Mode::Pvp),
                seed: Some(SEED),
                frames: vec![InputSet::EMPTY; 100],
            }
        }
        _ => {
            eprintln!("Unknown kind: {}. Use 'retreat', 'duel', or 'short'", kind);
            std::process::exit(1);
        }
    };

    // Verify by playing it
    let replay = ScriptInput::new(script.frames.clone());
    let mut game = Game::new(Headless, replay, script.seed.unwrap_or(SEED));
    let mut now = 0;
    game.start_match(script.mode.unwrap_or(Mode::Pva), now);
    for _ in 0..MAX_FRAMES {
        if game.screen() == Screen::EndScreen {
            break;
        }
        now += FRAME_MS;
        game.frame(now);
    }

    eprintln!("=== Sim result ({} script) ===", kind);
    eprintln!("Elapsed: {} ms", now);
    eprintln!("Ticks played: {}", game.input_log().len());
    match game.last_result() {
        Some(r) => eprintln!(
            "Winner: {:?}, scores: P1={}, P2={}",
            r.winner, r.score_a, r.score_b
        ),
        None => eprintln!("Match unfinished"),
    }

    match serde_json::to_string(&script) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("failed to encode script: {}", err);
            std::process::exit(1);
        }
    }
}
