/// Round orchestration.
///
/// Every public function takes an immutable reference to the current
/// `SimulationState` (and, where needed, an RNG handle) and returns a
/// brand-new `SimulationState`.  Side effects are limited to the injected RNG
/// and to tracing events.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::bunker::Bunker;
use crate::collision;
use crate::constants::{
    EXTRA_LIFE_EVERY, INVADER_FIRE_CHANCE, SAUCER_COOLDOWN, SAUCER_REWARDS, SAUCER_SPAWN_CHANCE,
};
use crate::entities::{Entity, Phase, Player, Projectile, Saucer, SimulationState};
use crate::input::InputState;
use crate::swarm::Swarm;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a brand-new round.
pub fn init_state() -> SimulationState {
    SimulationState {
        player: Player::new(),
        projectiles: Vec::new(),
        swarm: Swarm::spawn(),
        bunkers: Bunker::row(),
        saucer: None,
        saucer_timer: 0,
        phase: Phase::Playing,
        frame: 0,
        wave: 1,
        next_projectile_id: 0,
    }
}

/// Start a new round after a game over.  Player, swarm, projectiles and the
/// saucer are reset; bunker damage carries over.  Ignored while playing.
pub fn restart(state: &SimulationState) -> SimulationState {
    if state.phase != Phase::GameOver {
        return state.clone();
    }
    info!(final_score = state.player.score, "round restarted");
    SimulationState {
        bunkers: state.bunkers.clone(),
        frame: state.frame,
        next_projectile_id: state.next_projectile_id,
        ..init_state()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &SimulationState) -> SimulationState {
    let mut next = state.clone();
    next.player.steer(true, false);
    next
}

pub fn move_player_right(state: &SimulationState) -> SimulationState {
    let mut next = state.clone();
    next.player.steer(false, true);
    next
}

/// Fire from the ship's nose.  Only one player shot may be in flight, so a
/// second press while one is live is silently dropped.
pub fn player_shoot(state: &SimulationState) -> SimulationState {
    if state.phase != Phase::Playing || state.player_projectile_live() {
        return state.clone();
    }
    let mut next = state.clone();
    let id = next.alloc_projectile_id();
    let nose = next.player.rect;
    next.projectiles
        .push(Projectile::from_player(id, nose.center_x(), nose.top()));
    next
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Extra lives earned by moving from `old_score` to `new_score`: one per
/// multiple of `EXTRA_LIFE_EVERY` crossed, none for merely staying above one.
pub fn extra_lives_earned(old_score: u32, new_score: u32) -> u32 {
    (new_score / EXTRA_LIFE_EVERY).saturating_sub(old_score / EXTRA_LIFE_EVERY)
}

// ── Random events ────────────────────────────────────────────────────────────

/// With a small chance, one invader picked uniformly drops a shot.
pub fn invader_fire(state: &SimulationState, rng: &mut impl Rng) -> SimulationState {
    let mut next = state.clone();
    roll_invader_fire(&mut next, rng);
    next
}

fn roll_invader_fire(state: &mut SimulationState, rng: &mut impl Rng) {
    if state.swarm.is_empty() || !rng.gen_bool(INVADER_FIRE_CHANCE) {
        return;
    }
    let Some(shooter) = state.swarm.pick_shooter(rng).map(|i| i.rect) else {
        return;
    };
    let id = state.alloc_projectile_id();
    state
        .projectiles
        .push(Projectile::from_invader(id, shooter.center_x(), shooter.bottom()));
}

/// Count down the saucer cooldown and possibly launch one.
fn roll_saucer(state: &mut SimulationState, rng: &mut impl Rng) {
    state.saucer_timer += 1;
    if state.saucer_timer <= SAUCER_COOLDOWN
        || state.saucer.is_some()
        || !rng.gen_bool(SAUCER_SPAWN_CHANCE)
    {
        return;
    }
    let from_left = rng.gen_bool(0.5);
    let points = SAUCER_REWARDS.choose(rng).copied().unwrap_or(SAUCER_REWARDS[0]);
    debug!(from_left, points, "saucer launched");
    state.saucer = Some(Saucer::new(from_left, points));
    state.saucer_timer = 0;
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &SimulationState, input: &InputState, rng: &mut impl Rng) -> SimulationState {
    let mut next = state.clone();
    next.frame += 1;

    if next.phase == Phase::GameOver {
        return if input.restart { restart(&next) } else { next };
    }

    // ── 1. Player ────────────────────────────────────────────────────────────
    next.player.steer(input.move_left, input.move_right);
    if input.fire {
        next = player_shoot(&next);
    }

    // ── 2. Projectiles and saucer ────────────────────────────────────────────
    for projectile in &mut next.projectiles {
        projectile.advance();
    }
    next.projectiles.retain(|p| !p.is_offscreen());

    if let Some(saucer) = next.saucer.as_mut() {
        saucer.advance();
    }
    if next.saucer.as_ref().is_some_and(|s| s.is_offscreen()) {
        next.saucer = None;
    }

    // ── 3. Swarm: movement, then the animation pass ─────────────────────────
    next.swarm.tick();
    next.swarm.animate();

    // ── 4. Random events ─────────────────────────────────────────────────────
    roll_invader_fire(&mut next, rng);
    roll_saucer(&mut next, rng);

    // ── 5. Collisions ────────────────────────────────────────────────────────
    let outcome = collision::resolve(
        &next.projectiles,
        &mut next.swarm.invaders,
        &mut next.bunkers,
        &mut next.saucer,
        &next.player,
    );
    next.projectiles.retain(|p| !outcome.consumed.contains(&p.id));

    let old_score = next.player.score;
    next.player.score += outcome.score_delta;

    if outcome.lives_lost > 0 {
        next.player.lives = next.player.lives.saturating_sub(outcome.lives_lost);
        debug!(lives = next.player.lives, "player hit");
        if next.player.lives == 0 {
            info!(score = next.player.score, "game over: out of lives");
            next.phase = Phase::GameOver;
        }
    }

    // ── 6. Invasion ──────────────────────────────────────────────────────────
    if next.phase == Phase::Playing && next.swarm.has_reached(next.player.rect.top()) {
        info!(score = next.player.score, "game over: invasion line breached");
        next.player.lives = 0;
        next.phase = Phase::GameOver;
    }

    if next.phase != Phase::Playing {
        return next;
    }

    // ── 7. Extra life and wave refill ────────────────────────────────────────
    let earned = extra_lives_earned(old_score, next.player.score);
    if earned > 0 {
        next.player.lives += earned;
        info!(score = next.player.score, lives = next.player.lives, "extra life");
    }

    if next.swarm.is_empty() {
        next.wave += 1;
        info!(wave = next.wave, "formation cleared");
        next.swarm = Swarm::spawn();
    }

    next
}
