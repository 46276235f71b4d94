//! Presentation for running without a window: everything goes to the log.
//! Input comes from the script through `duel_core::ScriptInput`.

use duel_core::*;
use tracing::{debug, info, trace};

#[derive(Default)]
pub struct LogPresenter {
    pub frames_rendered: u64,
    pub sounds_played: u64,
    pub rounds: Vec<RoundSummary>,
}

impl Presentation for LogPresenter {
    fn render_frame(&mut self, world: &WorldView<'_>) -> Result<(), PresentationError> {
        self.frames_rendered += 1;
        trace!(
            screen = ?world.screen,
            phase = ?world.phase,
            hp_a = world.actors[0].actor.health,
            hp_b = world.actors[1].actor.health,
            fade = world.fade_alpha,
            "frame"
        );
        Ok(())
    }

    fn play_sound(&mut self, sound: Sound) -> Result<(), PresentationError> {
        self.sounds_played += 1;
        trace!(?sound, "sound");
        Ok(())
    }

    fn play_music(&mut self, music: Music) -> Result<(), PresentationError> {
        debug!(?music, "music on");
        Ok(())
    }

    fn stop_music(&mut self, music: Music) -> Result<(), PresentationError> {
        debug!(?music, "music off");
        Ok(())
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        info!(
            round = summary.round,
            winner = ?summary.result.winner,
            score_a = summary.score_a,
            score_b = summary.score_b,
            "round over"
        );
        self.rounds.push(*summary);
    }

    fn on_match_end(&mut self, result: &MatchResult) {
        info!(winner = ?result.winner, score_a = result.score_a, score_b = result.score_b, "end screen");
    }
}
