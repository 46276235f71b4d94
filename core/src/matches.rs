use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::MAX_ROUNDS;
use crate::round::RoundController;
use crate::timers::GenerationCounter;
use crate::types::*;

/// Match-level bookkeeping. Only changes at round boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub generation: u64,
    pub mode: Mode,
    pub score_a: u32,
    pub score_b: u32,
    pub current_round: u32,
    pub is_over: bool,
    pub winner: Option<Side>,
    /// AI randomness; carried across rounds so rounds do not replay each other.
    pub rng_state: u32,
}

impl MatchState {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchAdvance {
    /// Another round follows; `round` is its number.
    NextRound { round: u32 },
    MatchOver(MatchResult),
}

/// Sequences rounds and decides the match.
#[derive(Clone, Debug)]
pub struct MatchController {
    state: MatchState,
    round: RoundController,
}

impl MatchController {
    pub fn start_match(mode: Mode, seed: u32, generations: &mut GenerationCounter) -> Self {
        let state = MatchState {
            generation: generations.next(),
            mode,
            score_a: 0,
            score_b: 0,
            current_round: 1,
            is_over: false,
            winner: None,
            rng_state: seed,
        };
        let round = RoundController::new(1, generations.next(), mode);
        info!(generation = state.generation, mode = ?mode, seed, "match started");
        Self { state, round }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut RoundController {
        &mut self.round
    }

    /// Run one fighting tick of the active round with the match's RNG.
    pub fn tick_round(&mut self, input: InputSet) -> crate::step::TickReport {
        self.round.tick(input, &mut self.state.rng_state)
    }

    /// Award the round and decide whether the match continues.
    ///
    /// Every round is played; a 2-0 lead does not end the match early. With an
    /// odd round count and one point per round the final scores cannot tie.
    pub fn advance(&mut self, result: RoundResult) -> MatchAdvance {
        if self.state.is_over {
            return MatchAdvance::MatchOver(self.result_summary(result.winner));
        }

        match result.winner {
            Side::A => self.state.score_a += 1,
            Side::B => self.state.score_b += 1,
        }

        if self.state.current_round >= MAX_ROUNDS {
            let winner = if self.state.score_a > self.state.score_b {
                Side::A
            } else {
                Side::B
            };
            self.state.is_over = true;
            self.state.winner = Some(winner);
            info!(
                winner = ?winner,
                score_a = self.state.score_a,
                score_b = self.state.score_b,
                "match over"
            );
            return MatchAdvance::MatchOver(self.result_summary(winner));
        }

        self.state.current_round += 1;
        MatchAdvance::NextRound {
            round: self.state.current_round,
        }
    }

    /// Replace the finished round with a fresh one for `current_round`.
    /// Returns false when the match is over or the active round is still live.
    pub fn begin_next_round(&mut self, generations: &mut GenerationCounter) -> bool {
        if self.state.is_over || self.round.result().is_none() {
            return false;
        }
        if self.round.number() == self.state.current_round {
            return false;
        }
        self.round = RoundController::new(self.state.current_round, generations.next(), self.state.mode);
        true
    }

    fn result_summary(&self, winner: Side) -> MatchResult {
        MatchResult {
            mode: self.state.mode,
            winner: self.state.winner.unwrap_or(winner),
            score_a: self.state.score_a,
            score_b: self.state.score_b,
            rounds_played: self.state.current_round,
        }
    }
}
