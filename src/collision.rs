/// Projectile collision resolution.
///
/// Every projectile is tested against the categories it can strike, in a
/// fixed order, and is consumed by the first category it matches:
///
/// * player shots: invaders, then the saucer, then bunkers;
/// * invader shots: the player, then bunkers.
///
/// Invaders are tested in spawn order, so when a shot overlaps two invaders
/// at once the one spawned first is taken.

use tracing::debug;

use crate::bunker::Bunker;
use crate::entities::{Entity, Invader, Owner, Player, Projectile, ProjectileId, Saucer};
use crate::geometry::Rect;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionOutcome {
    pub score_delta: u32,
    pub lives_lost: u32,
    /// Projectiles that struck something, in the order they were tested.
    pub consumed: Vec<ProjectileId>,
    pub invaders_destroyed: usize,
    pub saucer_destroyed: bool,
}

/// Resolve every projectile against the other entity sets, removing struck
/// invaders and the saucer and eroding bunkers.  The projectile list itself
/// is left alone; callers drop the ids in `consumed`.
pub fn resolve(
    projectiles: &[Projectile],
    invaders: &mut Vec<Invader>,
    bunkers: &mut [Bunker],
    saucer: &mut Option<Saucer>,
    player: &Player,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    for projectile in projectiles {
        let hit = match projectile.owner {
            Owner::Player => strike_from_below(projectile, invaders, saucer, bunkers, &mut outcome),
            Owner::Invader => strike_from_above(projectile, player, bunkers, &mut outcome),
        };
        if hit {
            outcome.consumed.push(projectile.id);
        }
    }

    outcome
}

fn strike_from_below(
    projectile: &Projectile,
    invaders: &mut Vec<Invader>,
    saucer: &mut Option<Saucer>,
    bunkers: &mut [Bunker],
    outcome: &mut CollisionOutcome,
) -> bool {
    let shot = projectile.bounds();

    if let Some(index) = invaders.iter().position(|i| i.bounds().intersects(&shot)) {
        let invader = invaders.remove(index);
        debug!(tier = ?invader.tier, points = invader.tier.points(), "invader destroyed");
        outcome.score_delta += invader.tier.points();
        outcome.invaders_destroyed += 1;
        return true;
    }

    if saucer.as_ref().is_some_and(|s| s.bounds().intersects(&shot)) {
        if let Some(s) = saucer.take() {
            debug!(points = s.points, "saucer destroyed");
            outcome.score_delta += s.points;
            outcome.saucer_destroyed = true;
        }
        return true;
    }

    erode_first(&shot, bunkers)
}

fn strike_from_above(
    projectile: &Projectile,
    player: &Player,
    bunkers: &mut [Bunker],
    outcome: &mut CollisionOutcome,
) -> bool {
    let shot = projectile.bounds();

    if player.rect.intersects(&shot) {
        outcome.lives_lost += 1;
        return true;
    }

    erode_first(&shot, bunkers)
}

/// Only cells that are still standing stop a shot.
fn erode_first(shot: &Rect, bunkers: &mut [Bunker]) -> bool {
    match bunkers.iter_mut().find(|b| b.overlaps_intact(shot)) {
        Some(bunker) => {
            bunker.hit(shot.center_x(), shot.center_y());
            true
        }
        None => false,
    }
}
