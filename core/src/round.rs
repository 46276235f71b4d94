use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::*;
use crate::init::create_actors;
use crate::physics::derive_facing;
use crate::step::{fight_tick, TickReport};
use crate::transition::{Countdown, CountdownLabel, CountdownStep};
use crate::types::*;

/// Per-round simulation state. Discarded when the round ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub generation: u64,
    pub actors: [CombatActor; 2],
    /// Indexed by the owning side.
    pub projectiles: [Vec<Projectile>; 2],
    pub ai_fire_cooldown: i32,
    pub is_over: bool,
}

impl RoundState {
    pub fn new(generation: u64, mode: Mode) -> Self {
        let mut actors = create_actors(mode);
        derive_facing(&mut actors);
        Self {
            generation,
            actors,
            projectiles: [Vec::new(), Vec::new()],
            ai_fire_cooldown: AI_INITIAL_FIRE_DELAY,
            is_over: false,
        }
    }

    pub fn actor(&self, side: Side) -> &CombatActor {
        &self.actors[side.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Initializing,
    CountingDown,
    Fighting,
    RoundEnded,
}

/// Owns one round: `Initializing → CountingDown → Fighting → RoundEnded`.
#[derive(Clone, Debug)]
pub struct RoundController {
    number: u32,
    phase: RoundPhase,
    state: RoundState,
    countdown: Countdown,
    result: Option<RoundResult>,
}

impl RoundController {
    pub fn new(number: u32, generation: u64, mode: Mode) -> Self {
        Self {
            number,
            phase: RoundPhase::Initializing,
            state: RoundState::new(generation, mode),
            countdown: Countdown::start(),
            result: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Label to show while counting down.
    pub fn countdown_label(&self) -> Option<CountdownLabel> {
        (self.phase == RoundPhase::CountingDown).then(|| self.countdown.label())
    }

    /// Leave Initializing and start the countdown. Returns the first label,
    /// or `None` if the round was already past Initializing.
    pub fn begin(&mut self) -> Option<CountdownLabel> {
        if self.phase != RoundPhase::Initializing {
            return None;
        }
        self.phase = RoundPhase::CountingDown;
        self.countdown = Countdown::start();
        info!(round = self.number, generation = self.generation(), "countdown started");
        Some(self.countdown.label())
    }

    /// One countdown interval elapsed. `Finished` means the round is now Fighting.
    pub fn advance_countdown(&mut self) -> Option<CountdownStep> {
        if self.phase != RoundPhase::CountingDown {
            return None;
        }
        let step = self.countdown.advance();
        if step == CountdownStep::Finished {
            self.phase = RoundPhase::Fighting;
            info!(round = self.number, "fight");
        }
        Some(step)
    }

    /// Run one simulation tick. Outside Fighting this is a no-op.
    pub fn tick(&mut self, input: InputSet, rng_state: &mut u32) -> TickReport {
        if self.phase != RoundPhase::Fighting {
            return TickReport::default();
        }
        let report = fight_tick(&mut self.state, input, rng_state);
        if let Some(result) = report.outcome {
            self.phase = RoundPhase::RoundEnded;
            self.result = Some(result);
            info!(
                round = self.number,
                winner = ?result.winner,
                hp_a = self.state.actor(Side::A).health,
                hp_b = self.state.actor(Side::B).health,
                "round ended"
            );
        } else if report.hits != [0, 0] {
            debug!(round = self.number, hits = ?report.hits, "hits landed");
        }
        report
    }
}
