/// Playfield, entity and timing constants — all in logical units.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 224;
pub const FIELD_HEIGHT: i32 = 256;

/// Reference tick rate of the simulation.
pub const TICKS_PER_SECOND: u32 = 60;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 11;
pub const PLAYER_HEIGHT: i32 = 8;
/// Bottom edge of the player ship (30 units above the playfield floor).
pub const PLAYER_BOTTOM: i32 = FIELD_HEIGHT - 30;
pub const PLAYER_SPEED: i32 = 2;
pub const STARTING_LIVES: u32 = 3;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: i32 = 2;
pub const PROJECTILE_HEIGHT: i32 = 8;
pub const PROJECTILE_SPEED: i32 = 5;

// ── Swarm ─────────────────────────────────────────────────────────────────────

pub const SWARM_ROWS: usize = 5;
pub const SWARM_COLS: usize = 11;
pub const SWARM_ORIGIN_X: i32 = 40;
pub const SWARM_ORIGIN_Y: i32 = 40;
/// Distance between neighbouring invaders, both axes.
pub const SWARM_SPACING: i32 = 16;

pub const INVADER_WIDTH: i32 = 16;
pub const INVADER_HEIGHT: i32 = 8;

/// Horizontal distance covered by one formation step.
pub const SWARM_STEP: i32 = 8;
/// Vertical drop applied on every direction reversal.
pub const SWARM_DESCENT: i32 = 8;
/// Gap kept between the formation and either side of the playfield.
pub const SWARM_MARGIN: i32 = 8;

/// Ticks between formation steps at `speed_factor == 1.0`.
pub const SWARM_BASE_INTERVAL: f32 = 30.0;
pub const SWARM_MIN_SPEED_FACTOR: f32 = 0.5;
/// Speed factor gained between a full formation and an empty one.
pub const SWARM_SPEED_FACTOR_RANGE: f32 = 2.0;

/// Per-tick chance that one invader fires.
pub const INVADER_FIRE_CHANCE: f64 = 0.01;

// ── Bunkers ───────────────────────────────────────────────────────────────────

pub const BUNKER_COUNT: usize = 4;
pub const BUNKER_COLS: usize = 24;
pub const BUNKER_ROWS: usize = 18;
pub const BUNKER_ORIGIN_X: i32 = 30;
pub const BUNKER_SPACING: i32 = 50;
pub const BUNKER_Y: i32 = 180;
/// Chebyshev radius (in cells) cleared around an impact.
pub const EROSION_RADIUS: i32 = 4;

// ── Saucer ────────────────────────────────────────────────────────────────────

pub const SAUCER_WIDTH: i32 = 32;
pub const SAUCER_HEIGHT: i32 = 8;
pub const SAUCER_Y: i32 = 20;
pub const SAUCER_SPEED: i32 = 2;
pub const SAUCER_REWARDS: [u32; 4] = [50, 100, 150, 300];
/// The cooldown counter must exceed this before a saucer may spawn.
pub const SAUCER_COOLDOWN: u32 = 600;
pub const SAUCER_SPAWN_CHANCE: f64 = 0.01;

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const EXTRA_LIFE_EVERY: u32 = 1500;
