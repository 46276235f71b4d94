use crate::constants::*;
use crate::init::max_jumps;
use crate::types::*;

/// Integrate gravity and resolve landing against the floor and platforms.
///
/// Platforms are one-way and only tested while descending. Every platform is
/// checked in declaration order with no early exit against the candidate
/// left by the previous check, so the last platform that still matches wins.
pub fn apply_physics(actor: &mut CombatActor, platforms: &[Platform]) {
    actor.vertical_velocity += GRAVITY;
    let mut ny = actor.y + actor.vertical_velocity;

    if ny >= FLOOR_Y {
        ny = FLOOR_Y;
        land(actor);
    } else {
        actor.grounded = false;
    }

    if actor.vertical_velocity >= 0.0 {
        for plat in platforms {
            let feet_before = actor.y + actor.height;
            let feet_after = ny + actor.height;

            if actor.x + actor.width > plat.x
                && actor.x < plat.x + plat.width
                && feet_before <= plat.y
                && feet_after >= plat.y
            {
                ny = plat.y - actor.height;
                land(actor);
            }
        }
    }

    actor.y = ny;
}

fn land(actor: &mut CombatActor) {
    actor.vertical_velocity = 0.0;
    actor.grounded = true;
    actor.jump_budget = max_jumps(actor.is_ai);
}

/// Shift horizontally by `dx`. Arena limits are applied later by [`clamp_to_arena`].
pub fn apply_horizontal(actor: &mut CombatActor, dx: f64) {
    actor.x += dx;
}

/// Human movement from held controls.
pub fn apply_controls_movement(actor: &mut CombatActor, controls: &SideControls) {
    if controls.left {
        apply_horizontal(actor, -MOVE_SPEED);
    }
    if controls.right {
        apply_horizontal(actor, MOVE_SPEED);
    }
}

/// Spend one jump from the budget. Returns false when the budget is empty.
pub fn try_jump(actor: &mut CombatActor) -> bool {
    if actor.jump_budget <= 0 {
        return false;
    }
    actor.vertical_velocity = JUMP_VELOCITY;
    actor.jump_budget -= 1;
    actor.grounded = false;
    true
}

pub fn clamp_to_arena(actor: &mut CombatActor) {
    actor.x = actor.x.min(ARENA_WIDTH - actor.width).max(0.0);
}

/// Face each actor toward the other. Ties face left.
pub fn derive_facing(actors: &mut [CombatActor; 2]) {
    let (ax, bx) = (actors[0].x, actors[1].x);
    actors[0].facing = if ax < bx { facing::RIGHT } else { facing::LEFT };
    actors[1].facing = if bx < ax { facing::RIGHT } else { facing::LEFT };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::create_actor;

    fn airborne(x: f64, y: f64, vy: f64) -> CombatActor {
        let mut a = create_actor(Side::A, false);
        a.x = x;
        a.y = y;
        a.vertical_velocity = vy;
        a.grounded = false;
        a.jump_budget = 0;
        a
    }

    #[test]
    fn gravity_accumulates_in_air() {
        let mut a = airborne(10.0, 100.0, 0.0);
        apply_physics(&mut a, &[]);
        assert_eq!(a.vertical_velocity, GRAVITY);
        assert_eq!(a.y, 100.5);
        assert!(!a.grounded);
    }

    #[test]
    fn floor_clamps_and_resets_budget() {
        let mut a = airborne(10.0, 295.0, 6.0);
        apply_physics(&mut a, &[]);
        assert_eq!(a.y, FLOOR_Y);
        assert_eq!(a.vertical_velocity, 0.0);
        assert!(a.grounded);
        assert_eq!(a.jump_budget, HUMAN_MAX_JUMPS);
    }

    #[test]
    fn ai_budget_resets_to_two() {
        let mut a = airborne(10.0, 299.0, 3.0);
        a.is_ai = true;
        apply_physics(&mut a, &[]);
        assert_eq!(a.jump_budget, AI_MAX_JUMPS);
    }

    #[test]
    fn resting_actor_stays_on_floor() {
        let mut a = create_actor(Side::A, false);
        for _ in 0..10 {
            apply_physics(&mut a, &PLATFORMS);
        }
        assert_eq!(a.y, FLOOR_Y);
        assert!(a.grounded);
    }

    #[test]
    fn lands_on_platform_when_descending() {
        // Feet at 205 above platform top 210 (y=260 - h=50)
        let plat = Platform { x: 0.0, y: 260.0, width: 200.0, height: 10.0 };
        let mut a = airborne(50.0, 205.0, 5.0);
        apply_physics(&mut a, &[plat]);
        assert_eq!(a.y, 210.0);
        assert!(a.grounded);
        assert_eq!(a.vertical_velocity, 0.0);
        assert_eq!(a.jump_budget, HUMAN_MAX_JUMPS);
    }

    #[test]
    fn rising_actor_passes_through_platform() {
        let plat = Platform { x: 0.0, y: 260.0, width: 200.0, height: 10.0 };
        let mut a = airborne(50.0, 215.0, -8.0);
        apply_physics(&mut a, &[plat]);
        assert_eq!(a.y, 207.5);
        assert!(!a.grounded);
    }

    #[test]
    fn no_landing_without_horizontal_overlap() {
        let plat = Platform { x: 300.0, y: 260.0, width: 100.0, height: 10.0 };
        let mut a = airborne(250.0, 205.0, 5.0);
        apply_physics(&mut a, &[plat]);
        assert!(!a.grounded);
        assert_eq!(a.y, 210.5);
    }

    #[test]
    fn later_platform_wins_tie_break() {
        // Both tops are crossed this tick. Each check sees the candidate left
        // by the previous one, so the later upper platform overrides the lower.
        let upper = Platform { x: 0.0, y: 258.0, width: 200.0, height: 10.0 };
        let lower = Platform { x: 0.0, y: 262.0, width: 200.0, height: 10.0 };

        let mut a = airborne(50.0, 200.0, 15.0);
        apply_physics(&mut a, &[lower, upper]);
        assert_eq!(a.y, 258.0 - ACTOR_HEIGHT);
        assert!(a.grounded);

        // Once resting on the upper top, the lower one no longer qualifies.
        let mut b = airborne(50.0, 200.0, 15.0);
        apply_physics(&mut b, &[upper, lower]);
        assert_eq!(b.y, 258.0 - ACTOR_HEIGHT);

        // The later platform also overrides a floor landing.
        let low_shelf = Platform { x: 0.0, y: 340.0, width: 200.0, height: 10.0 };
        let mut c = airborne(50.0, 285.0, 16.0);
        apply_physics(&mut c, &[low_shelf]);
        assert_eq!(c.y, 290.0);
        assert!(c.grounded);
    }

    #[test]
    fn jump_spends_budget_then_rejects() {
        let mut a = create_actor(Side::A, false);
        assert!(a.grounded);
        assert_eq!(a.jump_budget, 1);

        assert!(try_jump(&mut a));
        assert_eq!(a.vertical_velocity, JUMP_VELOCITY);
        assert_eq!(a.jump_budget, 0);
        assert!(!a.grounded);

        apply_physics(&mut a, &PLATFORMS);
        let vy = a.vertical_velocity;
        assert!(!try_jump(&mut a));
        assert_eq!(a.vertical_velocity, vy);
    }

    #[test]
    fn clamp_keeps_actor_inside() {
        let mut a = create_actor(Side::A, false);
        a.x = -12.0;
        clamp_to_arena(&mut a);
        assert_eq!(a.x, 0.0);
        a.x = 690.0;
        clamp_to_arena(&mut a);
        assert_eq!(a.x, ARENA_WIDTH - ACTOR_WIDTH);
    }

    #[test]
    fn facing_points_at_opponent() {
        let mut actors = [create_actor(Side::A, false), create_actor(Side::B, false)];
        derive_facing(&mut actors);
        assert_eq!(actors[0].facing, facing::RIGHT);
        assert_eq!(actors[1].facing, facing::LEFT);

        actors[0].x = 600.0;
        actors[1].x = 200.0;
        derive_facing(&mut actors);
        assert_eq!(actors[0].facing, facing::LEFT);
        assert_eq!(actors[1].facing, facing::RIGHT);
    }

    #[test]
    fn controls_move_by_fixed_speed() {
        let mut a = create_actor(Side::A, false);
        let controls = SideControls { right: true, ..Default::default() };
        apply_controls_movement(&mut a, &controls);
        assert_eq!(a.x, 100.0 + MOVE_SPEED);
        let both = SideControls { left: true, right: true, ..Default::default() };
        apply_controls_movement(&mut a, &both);
        assert_eq!(a.x, 100.0 + MOVE_SPEED);
    }
}
