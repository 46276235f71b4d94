use crate::types::Platform;

// All values are per-tick at the render frame rate unless noted.

// Arena
pub const ARENA_WIDTH: f64 = 700.0;
pub const ARENA_HEIGHT: f64 = 400.0;
pub const FLOOR_Y: f64 = 300.0;

// Physics
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -12.0;
pub const MOVE_SPEED: f64 = 5.0;

// Actor hitbox
pub const ACTOR_WIDTH: f64 = 50.0;
pub const ACTOR_HEIGHT: f64 = 50.0;

// Health / combat
pub const MAX_HEALTH: i32 = 5;
pub const SHOOT_COOLDOWN: i32 = 20;
pub const PROJECTILE_SPEED: f64 = 8.0;
pub const PROJECTILE_WIDTH: f64 = 10.0;
pub const PROJECTILE_HEIGHT: f64 = 4.0;

// Jump budgets
pub const HUMAN_MAX_JUMPS: i32 = 1;
pub const AI_MAX_JUMPS: i32 = 2;

// AI behaviour
pub const AI_SPEED: f64 = 2.0;
pub const AI_CHASE_DISTANCE: f64 = 60.0;
pub const AI_INITIAL_FIRE_DELAY: i32 = 60;
pub const AI_FIRE_INTERVAL: i32 = 90;
pub const AI_GROUND_JUMP_CHANCE: f64 = 0.01;
pub const AI_AIR_JUMP_CHANCE: f64 = 0.005;

// Spawns
pub const SPAWN_X_A: f64 = 100.0;
pub const SPAWN_X_B: f64 = 650.0;
pub const SPAWN_Y: f64 = 300.0;

// Match rules
pub const MAX_ROUNDS: u32 = 3;

// Sequencing (wall-clock delays in milliseconds, fade in opacity per frame)
pub const COUNTDOWN_INTERVAL_MS: u64 = 800;
pub const COUNTDOWN_STEPS: u8 = 5;
pub const POST_ROUND_DELAY_MS: u64 = 1500;
pub const END_SCREEN_DELAY_MS: u64 = 1000;
pub const FADE_STEP: f64 = 0.02;

// Presentation
pub const HEALTH_BAR_UNIT: f64 = 20.0;

/// Static platforms in declaration order. Landing resolution depends on this order.
pub const PLATFORMS: [Platform; 2] = [
    Platform { x: 150.0, y: 260.0, width: 200.0, height: 10.0 },
    Platform { x: 450.0, y: 200.0, width: 200.0, height: 10.0 },
];
