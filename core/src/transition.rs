//! Frame- and timer-driven sequencing that gates when a round may simulate.
//!
//! [`TransitionSequencer`] is the fade between rounds: opacity climbs to full,
//! hands back the caller's continuation exactly once, then falls to zero.
//! [`Countdown`] is the "3, 2, 1, FIGHT!" sequence shown before each round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COUNTDOWN_STEPS, FADE_STEP};

// ── Fade ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FadePhase {
    Idle,
    FadingOut,
    FadingIn,
}

/// Result of advancing the fade by one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FadeStep<K> {
    /// Nothing is running.
    Idle,
    /// Still ramping.
    Running,
    /// Full opacity reached; run this continuation before the fade-in.
    Continue(K),
    /// Back at zero opacity; the transition is over.
    Finished,
}

/// Fade-out → continuation → fade-in, one step per animation frame.
///
/// There is no cancellation: once started both halves always run.
#[derive(Clone, Debug)]
pub struct TransitionSequencer<K> {
    phase: FadePhase,
    frame: u32,
    continuation: Option<K>,
}

impl<K> Default for TransitionSequencer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TransitionSequencer<K> {
    pub fn new() -> Self {
        Self {
            phase: FadePhase::Idle,
            frame: 0,
            continuation: None,
        }
    }

    /// Frames needed for one half of the fade.
    pub fn frames_per_half() -> u32 {
        (1.0 / FADE_STEP).round() as u32
    }

    /// Begin a transition. A running transition is never replaced, so the
    /// continuation is handed back instead.
    pub fn start(&mut self, continuation: K) -> Result<(), K> {
        if self.is_running() {
            return Err(continuation);
        }
        self.phase = FadePhase::FadingOut;
        self.frame = 0;
        self.continuation = Some(continuation);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Current overlay opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        (self.frame as f64 / Self::frames_per_half() as f64).min(1.0)
    }

    pub fn step(&mut self) -> FadeStep<K> {
        match self.phase {
            FadePhase::Idle => FadeStep::Idle,
            FadePhase::FadingOut => {
                self.frame += 1;
                if self.frame < Self::frames_per_half() {
                    return FadeStep::Running;
                }
                self.phase = FadePhase::FadingIn;
                match self.continuation.take() {
                    Some(k) => FadeStep::Continue(k),
                    None => FadeStep::Running,
                }
            }
            FadePhase::FadingIn => {
                self.frame = self.frame.saturating_sub(1);
                if self.frame > 0 {
                    return FadeStep::Running;
                }
                self.phase = FadePhase::Idle;
                FadeStep::Finished
            }
        }
    }
}

// ── Countdown ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownLabel {
    Three,
    Two,
    One,
    Fight,
}

impl fmt::Display for CountdownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CountdownLabel::Three => "3",
            CountdownLabel::Two => "2",
            CountdownLabel::One => "1",
            CountdownLabel::Fight => "FIGHT!",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    Show(CountdownLabel),
    Finished,
}

/// Pre-round countdown. Five displays one interval apart: `3`, `2`, `1`,
/// `FIGHT!`, and `FIGHT!` once more as it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    shown: u8,
}

impl Countdown {
    /// Starts already showing the first label.
    pub fn start() -> Self {
        Self { shown: 1 }
    }

    pub fn label(&self) -> CountdownLabel {
        match self.shown {
            0 | 1 => CountdownLabel::Three,
            2 => CountdownLabel::Two,
            3 => CountdownLabel::One,
            _ => CountdownLabel::Fight,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= COUNTDOWN_STEPS
    }

    /// Called once per countdown interval.
    pub fn advance(&mut self) -> CountdownStep {
        if self.is_finished() {
            return CountdownStep::Finished;
        }
        self.shown += 1;
        if self.is_finished() {
            CountdownStep::Finished
        } else {
            CountdownStep::Show(self.label())
        }
    }
}
