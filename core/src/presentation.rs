//! Contracts for the side-effecting collaborators (drawing, audio, input)
//! and the read-only view of the world handed to them each frame.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::constants::*;
use crate::matches::MatchState;
use crate::round::{RoundController, RoundPhase};
use crate::transition::CountdownLabel;
use crate::types::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("playback blocked: {0}")]
    PlaybackBlocked(String),
    #[error("asset not ready: {0}")]
    AssetNotReady(String),
    #[error("render failed: {0}")]
    Render(String),
}

/// Drawing and audio. Failures are reported but never stop the simulation.
pub trait Presentation {
    /// Must not mutate simulation state; it only receives a borrowed view.
    fn render_frame(&mut self, world: &WorldView<'_>) -> Result<(), PresentationError>;
    fn play_sound(&mut self, sound: Sound) -> Result<(), PresentationError>;
    fn play_music(&mut self, music: Music) -> Result<(), PresentationError>;
    fn stop_music(&mut self, music: Music) -> Result<(), PresentationError>;

    fn on_round_end(&mut self, _summary: &RoundSummary) {}
    fn on_match_end(&mut self, _result: &MatchResult) {}
}

/// Polled once per fighting tick.
pub trait InputSource {
    fn poll_input(&mut self) -> InputSet;
}

/// Replays recorded inputs in order, then holds `fallback` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptInput {
    frames: Vec<InputSet>,
    cursor: usize,
    fallback: InputSet,
}

impl ScriptInput {
    pub fn new(frames: Vec<InputSet>) -> Self {
        Self {
            frames,
            cursor: 0,
            fallback: InputSet::EMPTY,
        }
    }

    /// Holds one input for every tick.
    pub fn holding(input: InputSet) -> Self {
        Self::new(Vec::new()).with_fallback(input)
    }

    pub fn with_fallback(mut self, fallback: InputSet) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl InputSource for ScriptInput {
    fn poll_input(&mut self) -> InputSet {
        let input = self.frames.get(self.cursor).copied().unwrap_or(self.fallback);
        self.cursor += 1;
        input
    }
}

/// Log and drop a collaborator failure.
pub(crate) fn swallow(result: Result<(), PresentationError>, what: &'static str) {
    if let Err(err) = result {
        warn!(error = %err, what, "presentation call failed, continuing");
    }
}

// ── View model ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Screen {
    Menu,
    Match,
    EndScreen,
    /// After "Quit": nothing is drawn and the music is left as it was.
    Closed,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scoreboard {
    pub round_label: String,
    pub left_label: String,
    pub right_label: String,
}

impl Scoreboard {
    pub fn new(state: &MatchState) -> Self {
        let right_name = match state.mode {
            Mode::Pva => "AI",
            Mode::Pvp => "P2",
        };
        Self {
            round_label: format!("Round {}/{}", state.current_round, MAX_ROUNDS),
            left_label: format!("P1: {}", state.score_a),
            right_label: format!("{}: {}", right_name, state.score_b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActorView {
    pub actor: CombatActor,
    pub muzzle_x: f64,
    pub muzzle_y: f64,
    pub health_bar_width: f64,
}

impl ActorView {
    pub fn new(actor: &CombatActor) -> Self {
        let muzzle_x = if actor.facing > 0 {
            actor.x + actor.width - 8.0
        } else {
            actor.x + 2.0
        };
        Self {
            actor: *actor,
            muzzle_x,
            muzzle_y: actor.y + 14.0,
            health_bar_width: actor.health.max(0) as f64 * HEALTH_BAR_UNIT,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldView<'a> {
    pub screen: Screen,
    pub mode: Mode,
    pub phase: RoundPhase,
    pub arena_width: f64,
    pub arena_height: f64,
    pub platforms: &'a [Platform],
    pub actors: [ActorView; 2],
    pub projectiles: [&'a [Projectile]; 2],
    pub scoreboard: Scoreboard,
    pub countdown: Option<CountdownLabel>,
    pub fade_alpha: f64,
    pub end_message: Option<&'static str>,
}

impl<'a> WorldView<'a> {
    pub fn new(
        screen: Screen,
        state: &MatchState,
        round: &'a RoundController,
        fade_alpha: f64,
    ) -> Self {
        let rs = round.state();
        let end_message = (screen == Screen::EndScreen).then(|| end_message(state));
        Self {
            screen,
            mode: state.mode,
            phase: round.phase(),
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            platforms: &PLATFORMS,
            actors: [
                ActorView::new(rs.actor(Side::A)),
                ActorView::new(rs.actor(Side::B)),
            ],
            projectiles: [&rs.projectiles[0], &rs.projectiles[1]],
            scoreboard: Scoreboard::new(state),
            countdown: round.countdown_label(),
            fade_alpha,
            end_message,
        }
    }
}

pub fn end_message(state: &MatchState) -> &'static str {
    if state.score_a > state.score_b {
        "Player 1 Wins Match!"
    } else if state.mode == Mode::Pva {
        "AI Wins Match!"
    } else {
        "Player 2 Wins Match!"
    }
}
