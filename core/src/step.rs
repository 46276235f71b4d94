use crate::ai::ai_update;
use crate::constants::*;
use crate::physics::*;
use crate::projectiles::*;
use crate::round::RoundState;
use crate::types::*;

/// Everything a fighting tick produced besides the state mutation itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub sounds: Vec<Sound>,
    /// Hits landed this tick, indexed by the shooter's side.
    pub hits: [u32; 2],
    pub outcome: Option<RoundResult>,
}

/// One simulation tick of a round in the Fighting phase.
///
/// Sub-step order is fixed; later stages read what earlier stages wrote:
///  1. Tick shoot cooldowns
///  2. Derive facing from relative positions
///  3. Side A input (movement, jump, fire)
///  4. Side B input, or the AI
///  5. Clamp both actors to the arena
///  6. Physics for both actors, then facing again for the post-tick view
///  7. A's projectiles against B, then B's against A
///  8. Win check (A's defeat is tested first)
pub fn fight_tick(state: &mut RoundState, input: InputSet, rng_state: &mut u32) -> TickReport {
    let mut report = TickReport::default();

    if state.is_over {
        return report;
    }

    // 1. Cooldowns
    for actor in state.actors.iter_mut() {
        if actor.shoot_cooldown > 0 {
            actor.shoot_cooldown -= 1;
        }
    }

    // 2. Facing
    derive_facing(&mut state.actors);

    // 3. Side A is always human
    apply_human_input(state, Side::A, input, &mut report);

    // 4. Side B
    if state.actors[Side::B.index()].is_ai {
        let target = state.actors[Side::A.index()];
        let actions = ai_update(
            &mut state.actors[Side::B.index()],
            &target,
            &mut state.ai_fire_cooldown,
            rng_state,
        );
        if actions.jumped {
            report.sounds.push(Sound::Jump);
        }
        if let Some(proj) = actions.fired {
            state.projectiles[Side::B.index()].push(proj);
            report.sounds.push(Sound::Gun);
        }
    } else {
        apply_human_input(state, Side::B, input, &mut report);
    }

    // 5 + 6. Clamp, then physics
    for actor in state.actors.iter_mut() {
        clamp_to_arena(actor);
        apply_physics(actor, &PLATFORMS);
    }
    derive_facing(&mut state.actors);

    // 7. Each list targets the opposing actor
    let [proj_a, proj_b] = &mut state.projectiles;
    let [actor_a, actor_b] = &mut state.actors;
    report.hits[Side::A.index()] = update_projectiles(proj_a, Side::A, actor_b).hits;
    report.hits[Side::B.index()] = update_projectiles(proj_b, Side::B, actor_a).hits;

    // 8. Win check. A simultaneous double KO counts as A's defeat.
    let loser = if state.actors[Side::A.index()].health <= 0 {
        Some(Side::A)
    } else if state.actors[Side::B.index()].health <= 0 {
        Some(Side::B)
    } else {
        None
    };

    if let Some(loser) = loser {
        state.is_over = true;
        report.outcome = Some(RoundResult {
            winner: loser.opponent(),
            loser,
        });
    }

    report
}

fn apply_human_input(state: &mut RoundState, side: Side, input: InputSet, report: &mut TickReport) {
    let controls = input.side_controls(side);
    let actor = &mut state.actors[side.index()];

    apply_controls_movement(actor, &controls);

    if controls.jump && try_jump(actor) {
        report.sounds.push(Sound::Jump);
    }

    if controls.fire && actor.shoot_cooldown == 0 {
        actor.shoot_cooldown = SHOOT_COOLDOWN;
        let proj = spawn_projectile(actor);
        state.projectiles[side.index()].push(proj);
        report.sounds.push(Sound::Gun);
    }
}
