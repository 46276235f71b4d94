use serde::{Deserialize, Serialize};

// ── Sides & modes ───────────────────────────────────────────

/// Which fighter an entity belongs to. Side A is always human-controlled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans sharing one keyboard.
    Pvp,
    /// Side B is driven by the AI.
    Pva,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Some(Self::Pvp),
            "pva" => Some(Self::Pva),
            _ => None,
        }
    }
}

// ── Input ───────────────────────────────────────────────────

/// Control identifier bitmask constants.
pub mod control {
    pub const A_LEFT: u8 = 1;
    pub const A_RIGHT: u8 = 2;
    pub const A_JUMP: u8 = 4;
    pub const A_FIRE: u8 = 8;
    pub const B_LEFT: u8 = 16;
    pub const B_RIGHT: u8 = 32;
    pub const B_JUMP: u8 = 64;
    pub const B_FIRE: u8 = 128;

    /// Keyboard key name to control bit.
    pub fn from_key(key: &str) -> Option<u8> {
        match key {
            "a" => Some(A_LEFT),
            "d" => Some(A_RIGHT),
            "w" => Some(A_JUMP),
            "e" => Some(A_FIRE),
            "ArrowLeft" => Some(B_LEFT),
            "ArrowRight" => Some(B_RIGHT),
            "ArrowUp" => Some(B_JUMP),
            "0" => Some(B_FIRE),
            _ => None,
        }
    }
}

/// The set of controls held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSet(pub u8);

impl InputSet {
    pub const EMPTY: InputSet = InputSet(0);

    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let bits = keys
            .into_iter()
            .filter_map(control::from_key)
            .fold(0u8, |acc, bit| acc | bit);
        InputSet(bits)
    }

    pub fn with(self, bits: u8) -> Self {
        InputSet(self.0 | bits)
    }

    pub fn contains(self, bits: u8) -> bool {
        self.0 & bits != 0
    }

    /// Controls for one side, expressed as (left, right, jump, fire).
    pub fn side_controls(self, side: Side) -> SideControls {
        match side {
            Side::A => SideControls {
                left: self.contains(control::A_LEFT),
                right: self.contains(control::A_RIGHT),
                jump: self.contains(control::A_JUMP),
                fire: self.contains(control::A_FIRE),
            },
            Side::B => SideControls {
                left: self.contains(control::B_LEFT),
                right: self.contains(control::B_RIGHT),
                jump: self.contains(control::B_JUMP),
                fire: self.contains(control::B_FIRE),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideControls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
}

// ── Actor ───────────────────────────────────────────────────

/// Facing direction: Right = 1, Left = -1.
pub mod facing {
    pub const RIGHT: i32 = 1;
    pub const LEFT: i32 = -1;
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatActor {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub vertical_velocity: f64,
    pub grounded: bool,
    pub facing: i32,
    pub shoot_cooldown: i32,
    pub jump_budget: i32,
    pub is_ai: bool,
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
}

// ── Map ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ── Outcomes ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: Side,
    pub loser: Side,
}

/// Score line after a round, handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub result: RoundResult,
    pub score_a: u32,
    pub score_b: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mode: Mode,
    pub winner: Side,
    pub score_a: u32,
    pub score_b: u32,
    pub rounds_played: u32,
}

// ── Audio ids ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Gun,
    Jump,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Music {
    Menu,
    Fight,
}

// ── Scripted runs ───────────────────────────────────────────

/// A recorded or generated input log. One entry per fighting tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScript {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub seed: Option<u32>,
    pub frames: Vec<InputSet>,
}
