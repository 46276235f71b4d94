pub mod ai;
pub mod constants;
pub mod game;
pub mod hash;
pub mod init;
pub mod matches;
pub mod physics;
pub mod presentation;
pub mod prng;
pub mod projectiles;
pub mod round;
pub mod step;
pub mod timers;
pub mod transition;
pub mod types;

pub use ai::{ai_update, AiActions};
pub use constants::*;
pub use game::Game;
pub use hash::*;
pub use init::*;
pub use matches::{MatchAdvance, MatchController, MatchState};
pub use physics::*;
pub use presentation::{
    end_message, ActorView, InputSource, Presentation, PresentationError, Scoreboard, Screen,
    ScriptInput, WorldView,
};
pub use prng::*;
pub use projectiles::{is_out_of_bounds, spawn_projectile, update_projectiles, ProjectileReport};
pub use round::{RoundController, RoundPhase, RoundState};
pub use step::{fight_tick, TickReport};
pub use timers::{GenerationCounter, TimerQueue};
pub use transition::{Countdown, CountdownLabel, CountdownStep, FadeStep, TransitionSequencer};
pub use types::*;
