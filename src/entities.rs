/// Game entity types and the simulation state that owns them.
///
/// Entities never reference each other.  Anything that involves two of them
/// (a bullet striking an invader, the swarm reaching the player) goes through
/// `collision` or `swarm`.

use crate::bunker::Bunker;
use crate::constants::{
    FIELD_HEIGHT, FIELD_WIDTH, INVADER_HEIGHT, INVADER_WIDTH, PLAYER_BOTTOM, PLAYER_HEIGHT,
    PLAYER_SPEED, PLAYER_WIDTH, PROJECTILE_HEIGHT, PROJECTILE_SPEED, PROJECTILE_WIDTH,
    SAUCER_HEIGHT, SAUCER_SPEED, SAUCER_WIDTH, SAUCER_Y, STARTING_LIVES,
};
use crate::geometry::Rect;
use crate::swarm::Swarm;

/// Behaviour shared by every moving thing on the playfield.
pub trait Entity {
    fn bounds(&self) -> Rect;

    /// Apply one tick of the entity's own motion or animation rule.
    fn advance(&mut self);

    /// Whether the owning collection should drop this entity.
    fn is_offscreen(&self) -> bool {
        let r = self.bounds();
        r.bottom() < 0 || r.top() > FIELD_HEIGHT || r.right() < 0 || r.left() > FIELD_WIDTH
    }
}

// ── Round phase ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            rect: Rect::from_center_bottom(
                FIELD_WIDTH / 2,
                PLAYER_BOTTOM,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: PLAYER_SPEED,
            lives: STARTING_LIVES,
            score: 0,
        }
    }

    /// Apply held movement keys.  Both directions may be held at once, in
    /// which case they cancel out; each is refused at its playfield edge.
    pub fn steer(&mut self, left: bool, right: bool) {
        if left && self.rect.left() > 0 {
            self.rect.translate(-self.speed, 0);
        }
        if right && self.rect.right() < FIELD_WIDTH {
            self.rect.translate(self.speed, 0);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Invader,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub rect: Rect,
    pub direction: Direction,
    pub speed: i32,
    pub owner: Owner,
}

impl Projectile {
    /// A player shot leaving the ship's nose, bottom edge at `top`.
    pub fn from_player(id: ProjectileId, center_x: i32, top: i32) -> Self {
        Projectile {
            id,
            rect: Rect::from_center_bottom(center_x, top, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            direction: Direction::Up,
            speed: PROJECTILE_SPEED,
            owner: Owner::Player,
        }
    }

    /// An invader shot, bottom edge at the shooter's lower edge.
    pub fn from_invader(id: ProjectileId, center_x: i32, bottom: i32) -> Self {
        Projectile {
            id,
            rect: Rect::from_center_bottom(center_x, bottom, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            direction: Direction::Down,
            speed: PROJECTILE_SPEED,
            owner: Owner::Invader,
        }
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self) {
        self.rect.translate(0, self.direction.sign() * self.speed);
    }
}

// ── Invaders ──────────────────────────────────────────────────────────────────

/// Visual and scoring class of an invader, fixed at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    /// Rows 0–1 are small, 2–3 medium, everything below large.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => Tier::Small,
            2 | 3 => Tier::Medium,
            _ => Tier::Large,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Tier::Large => 30,
            Tier::Medium => 20,
            Tier::Small => 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub rect: Rect,
    pub tier: Tier,
    /// Active animation frame, 0 or 1.
    pub frame: u8,
    /// Set by the swarm when it moves this invader; consumed by `advance`.
    pub pending_toggle: bool,
}

impl Invader {
    pub fn new(x: i32, y: i32, tier: Tier) -> Self {
        Invader {
            rect: Rect::new(x, y, INVADER_WIDTH, INVADER_HEIGHT),
            tier,
            frame: 0,
            pending_toggle: false,
        }
    }
}

impl Entity for Invader {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self) {
        if self.pending_toggle {
            self.frame ^= 1;
            self.pending_toggle = false;
        }
    }

    fn is_offscreen(&self) -> bool {
        false
    }
}

// ── Saucer ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Saucer {
    pub rect: Rect,
    /// Signed horizontal speed; positive moves right.
    pub velocity: i32,
    pub points: u32,
}

impl Saucer {
    /// A saucer entering just outside one edge and heading across the field.
    pub fn new(from_left: bool, points: u32) -> Self {
        let (x, velocity) = if from_left {
            (-SAUCER_WIDTH, SAUCER_SPEED)
        } else {
            (FIELD_WIDTH, -SAUCER_SPEED)
        };
        Saucer {
            rect: Rect::new(x, SAUCER_Y, SAUCER_WIDTH, SAUCER_HEIGHT),
            velocity,
            points,
        }
    }
}

impl Entity for Saucer {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self) {
        self.rect.translate(self.velocity, 0);
    }
}

// ── Master simulation state ───────────────────────────────────────────────────

/// Everything one round of play consists of.  Owned by the orchestrator in
/// `compute` and only mutated inside a tick.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub player: Player,
    /// Live projectiles in firing order.
    pub projectiles: Vec<Projectile>,
    pub swarm: Swarm,
    pub bunkers: Vec<Bunker>,
    /// At most one saucer is alive at a time.
    pub saucer: Option<Saucer>,
    /// Ticks since the last saucer spawn (or round start).
    pub saucer_timer: u32,
    pub phase: Phase,
    pub frame: u64,
    /// 1-based count of formations faced this round.
    pub wave: u32,
    pub next_projectile_id: u64,
}

impl SimulationState {
    pub fn alloc_projectile_id(&mut self) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;
        id
    }

    pub fn player_projectile_live(&self) -> bool {
        self.projectiles.iter().any(|p| p.owner == Owner::Player)
    }
}
