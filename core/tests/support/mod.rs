// Shared fakes for driving `Game` without a window or audio device.
use duel_core::*;

/// What one rendered frame looked like, reduced to what tests assert on.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    pub screen: Screen,
    pub phase: RoundPhase,
    pub round_label: String,
    pub fade_alpha: f64,
    pub countdown: Option<CountdownLabel>,
    pub end_message: Option<&'static str>,
    pub health: [i32; 2],
    pub facing: [i32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicEvent {
    Play(Music),
    Stop(Music),
}

/// Presentation that records every call. With `fail_all` set, each call
/// still records but reports an error back to the driver.
#[derive(Default)]
pub struct Recorder {
    pub fail_all: bool,
    pub frames: Vec<RenderedFrame>,
    pub sounds: Vec<Sound>,
    pub music: Vec<MusicEvent>,
    pub round_ends: Vec<RoundSummary>,
    pub match_ends: Vec<MatchResult>,
}

impl Recorder {
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    fn outcome(&self, what: &str) -> Result<(), PresentationError> {
        if self.fail_all {
            Err(PresentationError::PlaybackBlocked(what.to_string()))
        } else {
            Ok(())
        }
    }
}

impl Presentation for Recorder {
    fn render_frame(&mut self, world: &WorldView<'_>) -> Result<(), PresentationError> {
        self.frames.push(RenderedFrame {
            screen: world.screen,
            phase: world.phase,
            round_label: world.scoreboard.round_label.clone(),
            fade_alpha: world.fade_alpha,
            countdown: world.countdown,
            end_message: world.end_message,
            health: [world.actors[0].actor.health, world.actors[1].actor.health],
            facing: [world.actors[0].actor.facing, world.actors[1].actor.facing],
        });
        if self.fail_all {
            return Err(PresentationError::Render("canvas lost".to_string()));
        }
        Ok(())
    }

    fn play_sound(&mut self, sound: Sound) -> Result<(), PresentationError> {
        self.sounds.push(sound);
        self.outcome("sound")
    }

    fn play_music(&mut self, music: Music) -> Result<(), PresentationError> {
        self.music.push(MusicEvent::Play(music));
        self.outcome("music")
    }

    fn stop_music(&mut self, music: Music) -> Result<(), PresentationError> {
        self.music.push(MusicEvent::Stop(music));
        self.outcome("music")
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.round_ends.push(*summary);
    }

    fn on_match_end(&mut self, result: &MatchResult) {
        self.match_ends.push(*result);
    }
}

pub const FRAME_MS: u64 = 16;

/// Advance one frame at a time until `done` holds. Returns false if it never
/// did within `max_frames`.
pub fn run_until<P, I>(
    game: &mut Game<P, I>,
    clock: &mut u64,
    max_frames: usize,
    mut done: impl FnMut(&Game<P, I>) -> bool,
) -> bool
where
    P: Presentation,
    I: InputSource,
{
    for _ in 0..max_frames {
        if done(game) {
            return true;
        }
        *clock += FRAME_MS;
        game.frame(*clock);
    }
    done(game)
}

pub fn on_end_screen<P: Presentation, I: InputSource>(game: &Game<P, I>) -> bool {
    game.screen() == Screen::EndScreen
}
