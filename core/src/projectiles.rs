use tracing::debug;

use crate::constants::*;
use crate::types::*;

/// Spawn a projectile at the shooter's leading edge, travelling the way it faces.
pub fn spawn_projectile(shooter: &CombatActor) -> Projectile {
    let x = if shooter.facing > 0 {
        shooter.x + shooter.width
    } else {
        shooter.x
    };
    Projectile {
        x,
        y: shooter.y + shooter.height / 2.0,
        velocity_x: PROJECTILE_SPEED * shooter.facing as f64,
    }
}

pub fn is_out_of_bounds(proj: &Projectile) -> bool {
    proj.x < 0.0 || proj.x > ARENA_WIDTH
}

/// AABB: projectile box vs actor hitbox.
fn overlaps(proj: &Projectile, target: &CombatActor) -> bool {
    proj.x < target.x + target.width
        && proj.x + PROJECTILE_WIDTH > target.x
        && proj.y < target.y + target.height
        && proj.y + PROJECTILE_HEIGHT > target.y
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    pub hits: u32,
    pub culled: u32,
}

/// Advance one side's projectiles and resolve them against the opposing actor.
///
/// Each projectile moves first, then either leaves the arena or strikes the
/// target; the bounds check wins when both apply. Survivors are compacted in
/// order so a removal never causes the next projectile to be skipped.
pub fn update_projectiles(
    projectiles: &mut Vec<Projectile>,
    shooter: Side,
    target: &mut CombatActor,
) -> ProjectileReport {
    let mut report = ProjectileReport::default();

    projectiles.retain_mut(|proj| {
        proj.x += proj.velocity_x;

        if is_out_of_bounds(proj) {
            report.culled += 1;
            return false;
        }

        if overlaps(proj, target) {
            target.health = (target.health - 1).max(0);
            report.hits += 1;
            debug!(
                shooter = ?shooter,
                victim = ?target.side,
                victim_hp = target.health,
                "actor hit"
            );
            return false;
        }

        true
    });

    report
}
