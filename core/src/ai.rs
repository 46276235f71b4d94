use crate::constants::*;
use crate::physics::apply_horizontal;
use crate::prng::prng_chance;
use crate::projectiles::spawn_projectile;
use crate::types::*;

/// What the AI did this tick, so the caller can emit sounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AiActions {
    pub jumped: bool,
    pub fired: Option<Projectile>,
}

/// Drive the AI fighter for one tick.
///
/// Chases toward a fixed horizontal distance, jumps at random (a ground jump
/// leaves exactly one air jump), and fires on its own counter, independent of
/// `shoot_cooldown`. Random rolls are only drawn when the branch is eligible.
pub fn ai_update(
    ai: &mut CombatActor,
    target: &CombatActor,
    fire_cooldown: &mut i32,
    rng_state: &mut u32,
) -> AiActions {
    let mut actions = AiActions::default();

    if ai.x < target.x - AI_CHASE_DISTANCE {
        apply_horizontal(ai, AI_SPEED);
    }
    if ai.x > target.x + AI_CHASE_DISTANCE {
        apply_horizontal(ai, -AI_SPEED);
    }

    if ai.grounded {
        let (roll, next) = prng_chance(*rng_state, AI_GROUND_JUMP_CHANCE);
        *rng_state = next;
        if roll {
            ai.vertical_velocity = JUMP_VELOCITY;
            ai.jump_budget = 1;
            ai.grounded = false;
            actions.jumped = true;
        }
    } else if ai.jump_budget > 0 {
        let (roll, next) = prng_chance(*rng_state, AI_AIR_JUMP_CHANCE);
        *rng_state = next;
        if roll {
            ai.vertical_velocity = JUMP_VELOCITY;
            ai.jump_budget -= 1;
            actions.jumped = true;
        }
    }

    *fire_cooldown -= 1;
    if *fire_cooldown <= 0 {
        *fire_cooldown = AI_FIRE_INTERVAL;
        actions.fired = Some(spawn_projectile(ai));
    }

    actions
}
