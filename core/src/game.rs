//! Cooperative driver. The host calls [`Game::frame`] once per animation
//! frame; everything else (countdown steps, post-round delays, fades,
//! simulation ticks) is advanced from there.

use tracing::{debug, info};

use crate::constants::*;
use crate::hash::hash_inputs;
use crate::matches::{MatchAdvance, MatchController};
use crate::presentation::{swallow, InputSource, Presentation, Screen, WorldView};
use crate::round::RoundPhase;
use crate::timers::{DueTimer, GenerationCounter, TimerQueue};
use crate::transition::{CountdownStep, FadeStep, TransitionSequencer};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerAction {
    CountdownStep,
    NextRound,
    ShowEndScreen,
}

pub struct Game<P, I> {
    presentation: P,
    input: I,
    seed: u32,
    match_seed: u32,
    matches_started: u32,
    screen: Screen,
    session: Option<MatchController>,
    last_mode: Option<Mode>,
    last_result: Option<MatchResult>,
    /// Continuation is the generation of the round whose countdown it starts.
    fade: TransitionSequencer<u64>,
    queued_fade: Option<u64>,
    timers: TimerQueue<TimerAction>,
    generations: GenerationCounter,
    input_log: Vec<InputSet>,
}

impl<P: Presentation, I: InputSource> Game<P, I> {
    /// Opens on the menu with the menu music playing.
    pub fn new(presentation: P, input: I, seed: u32) -> Self {
        let mut game = Self {
            presentation,
            input,
            seed,
            match_seed: seed,
            matches_started: 0,
            screen: Screen::Menu,
            session: None,
            last_mode: None,
            last_result: None,
            fade: TransitionSequencer::new(),
            queued_fade: None,
            timers: TimerQueue::default(),
            generations: GenerationCounter::default(),
            input_log: Vec::new(),
        };
        swallow(game.presentation.play_music(Music::Menu), "play menu music");
        game
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&MatchController> {
        self.session.as_ref()
    }

    pub fn last_result(&self) -> Option<MatchResult> {
        self.last_result
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_running()
    }

    pub fn fade_alpha(&self) -> f64 {
        self.fade.alpha()
    }

    /// Seed the AI of the current (or last) match was started with.
    pub fn match_seed(&self) -> u32 {
        self.match_seed
    }

    /// Every input polled during fighting ticks of the current match.
    pub fn input_log(&self) -> &[InputSet] {
        &self.input_log
    }

    pub fn replay_digest(&self) -> [u8; 32] {
        hash_inputs(&self.input_log)
    }

    /// Start a fresh match. Round one goes straight into its countdown.
    pub fn start_match(&mut self, mode: Mode, now_ms: u64) {
        swallow(self.presentation.stop_music(Music::Menu), "stop menu music");

        self.match_seed = self.seed.wrapping_add(self.matches_started);
        self.matches_started += 1;

        let mut session = MatchController::start_match(mode, self.match_seed, &mut self.generations);
        session.round_mut().begin();
        let generation = session.round().generation();

        self.session = Some(session);
        self.screen = Screen::Match;
        self.last_mode = Some(mode);
        self.last_result = None;
        self.input_log.clear();
        self.fade = TransitionSequencer::new();
        self.queued_fade = None;
        self.timers
            .schedule(now_ms + COUNTDOWN_INTERVAL_MS, generation, TimerAction::CountdownStep);
    }

    /// "Restart Match" from the end screen: same mode, new match.
    /// Returns false when no match has been played yet.
    pub fn restart_match(&mut self, now_ms: u64) -> bool {
        let Some(mode) = self.last_mode else {
            return false;
        };
        swallow(self.presentation.play_sound(Sound::Restart), "play restart sound");
        self.start_match(mode, now_ms);
        true
    }

    /// "Main Menu": abandon whatever is running. Pending timers go stale.
    pub fn return_to_menu(&mut self) {
        if self.session.take().is_some() {
            info!("match abandoned");
        }
        self.screen = Screen::Menu;
        self.fade = TransitionSequencer::new();
        self.queued_fade = None;
        swallow(self.presentation.stop_music(Music::Fight), "stop fight music");
        swallow(self.presentation.play_music(Music::Menu), "play menu music");
    }

    /// "Quit" from the end screen: drop the match and draw nothing more.
    /// Music is left alone.
    pub fn quit(&mut self) {
        if self.session.take().is_some() {
            info!("match closed");
        }
        self.screen = Screen::Closed;
        self.fade = TransitionSequencer::new();
        self.queued_fade = None;
    }

    /// One animation frame.
    pub fn frame(&mut self, now_ms: u64) {
        self.run_due_timers(now_ms);
        self.step_fade(now_ms);
        self.run_fight_tick(now_ms);
        self.render();
    }

    fn is_current(&self, generation: u64) -> bool {
        !matches!(self.screen, Screen::Menu | Screen::Closed)
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.round().generation() == generation)
    }

    /// Fires everything due, including timers rescheduled by an earlier one
    /// when the host frame arrives late.
    fn run_due_timers(&mut self, now_ms: u64) {
        loop {
            let due = self.timers.pop_due(now_ms);
            if due.is_empty() {
                return;
            }
            for timer in due {
                self.fire(timer);
            }
        }
    }

    fn fire(&mut self, timer: DueTimer<TimerAction>) {
        if !self.is_current(timer.generation) {
            debug!(
                generation = timer.generation,
                action = ?timer.action,
                "stale timer dropped"
            );
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match timer.action {
            TimerAction::CountdownStep => match session.round_mut().advance_countdown() {
                Some(CountdownStep::Show(label)) => {
                    debug!(%label, "countdown");
                    self.timers.schedule(
                        timer.due_ms + COUNTDOWN_INTERVAL_MS,
                        timer.generation,
                        TimerAction::CountdownStep,
                    );
                }
                Some(CountdownStep::Finished) => {
                    swallow(self.presentation.play_music(Music::Fight), "play fight music");
                }
                None => {}
            },
            TimerAction::NextRound => {
                if session.begin_next_round(&mut self.generations) {
                    let generation = session.round().generation();
                    info!(round = session.round().number(), "next round, fading");
                    self.start_fade(generation);
                }
            }
            TimerAction::ShowEndScreen => {
                self.screen = Screen::EndScreen;
                if let Some(result) = self.last_result {
                    self.presentation.on_match_end(&result);
                }
            }
        }
    }

    /// Start the fade into round `generation`, or queue it behind a running one.
    fn start_fade(&mut self, generation: u64) {
        if let Err(generation) = self.fade.start(generation) {
            debug!(generation, "fade busy, queued");
            self.queued_fade = Some(generation);
        }
    }

    fn step_fade(&mut self, now_ms: u64) {
        if !self.fade.is_running() {
            if let Some(generation) = self.queued_fade.take() {
                self.start_fade(generation);
            }
        }

        if let FadeStep::Continue(generation) = self.fade.step() {
            if !self.is_current(generation) {
                debug!(generation, "stale fade continuation dropped");
                return;
            }
            if let Some(session) = self.session.as_mut() {
                if session.round_mut().begin().is_some() {
                    self.timers.schedule(
                        now_ms + COUNTDOWN_INTERVAL_MS,
                        generation,
                        TimerAction::CountdownStep,
                    );
                }
            }
        }
    }

    fn run_fight_tick(&mut self, now_ms: u64) {
        if self.screen != Screen::Match || self.fade.is_running() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.round().phase() != RoundPhase::Fighting {
            return;
        }

        let input = self.input.poll_input();
        self.input_log.push(input);
        let report = session.tick_round(input);
        for sound in &report.sounds {
            swallow(self.presentation.play_sound(*sound), "play sound");
        }

        let Some(result) = report.outcome else {
            return;
        };

        swallow(self.presentation.stop_music(Music::Fight), "stop fight music");
        let round = session.round().number();
        let generation = session.round().generation();
        let advance = session.advance(result);
        let summary = RoundSummary {
            round,
            result,
            score_a: session.state().score_a,
            score_b: session.state().score_b,
        };
        self.presentation.on_round_end(&summary);

        match advance {
            MatchAdvance::NextRound { .. } => {
                self.timers
                    .schedule(now_ms + POST_ROUND_DELAY_MS, generation, TimerAction::NextRound);
            }
            MatchAdvance::MatchOver(result) => {
                self.last_result = Some(result);
                self.timers
                    .schedule(now_ms + END_SCREEN_DELAY_MS, generation, TimerAction::ShowEndScreen);
            }
        }
    }

    fn render(&mut self) {
        if matches!(self.screen, Screen::Menu | Screen::Closed) {
            return;
        }
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let view = WorldView::new(self.screen, session.state(), session.round(), self.fade.alpha());
        swallow(self.presentation.render_frame(&view), "render frame");
    }
}
