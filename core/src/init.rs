use crate::constants::*;
use crate::types::*;

/// Jump budget an actor regains whenever it lands.
pub fn max_jumps(is_ai: bool) -> i32 {
    if is_ai {
        AI_MAX_JUMPS
    } else {
        HUMAN_MAX_JUMPS
    }
}

/// Fresh fighter standing on the floor at its side's spawn point.
pub fn create_actor(side: Side, is_ai: bool) -> CombatActor {
    let x = match side {
        Side::A => SPAWN_X_A,
        Side::B => SPAWN_X_B,
    };
    CombatActor {
        side,
        x,
        y: SPAWN_Y,
        width: ACTOR_WIDTH,
        height: ACTOR_HEIGHT,
        health: MAX_HEALTH,
        vertical_velocity: 0.0,
        grounded: true,
        facing: facing::RIGHT,
        shoot_cooldown: 0,
        jump_budget: max_jumps(is_ai),
        is_ai,
    }
}

/// Both fighters for a round in the given mode. Side B is the AI in PvA.
pub fn create_actors(mode: Mode) -> [CombatActor; 2] {
    [
        create_actor(Side::A, false),
        create_actor(Side::B, mode == Mode::Pva),
    ]
}
