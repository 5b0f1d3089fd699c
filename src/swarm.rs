/// The invader formation.
///
/// All live invaders move as one rigid body: every step translates the whole
/// formation, and a reversal drops every invader by the same amount.  Moving
/// an invader only marks it for an animation flip; the flip itself happens in
/// the separate [`Swarm::animate`] pass.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::constants::{
    FIELD_WIDTH, SWARM_BASE_INTERVAL, SWARM_COLS, SWARM_DESCENT, SWARM_MARGIN,
    SWARM_MIN_SPEED_FACTOR, SWARM_ORIGIN_X, SWARM_ORIGIN_Y, SWARM_ROWS, SWARM_SPACING,
    SWARM_SPEED_FACTOR_RANGE, SWARM_STEP,
};
use crate::entities::{Entity, Invader, Tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// What the most recent move event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmPhase {
    /// Stepped sideways.
    Advancing,
    /// Hit a margin, turned round and dropped.
    Reversing,
}

/// Outcome of one [`Swarm::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmMove {
    /// The move interval has not elapsed yet.
    Waiting,
    Stepped,
    Reversed,
}

#[derive(Clone, Debug)]
pub struct Swarm {
    /// Live invaders in spawn order (row-major, top-left first).
    pub invaders: Vec<Invader>,
    pub heading: Heading,
    pub phase: SwarmPhase,
    /// Ticks since the last move event.
    pub move_timer: u32,
    /// Size of the formation when it was spawned.
    pub total_spawned: usize,
}

impl Swarm {
    /// A fresh 5×11 formation heading right.
    pub fn spawn() -> Self {
        let mut invaders = Vec::with_capacity(SWARM_ROWS * SWARM_COLS);
        for row in 0..SWARM_ROWS {
            for col in 0..SWARM_COLS {
                invaders.push(Invader::new(
                    SWARM_ORIGIN_X + col as i32 * SWARM_SPACING,
                    SWARM_ORIGIN_Y + row as i32 * SWARM_SPACING,
                    Tier::for_row(row),
                ));
            }
        }
        Swarm::from_invaders(invaders)
    }

    pub fn from_invaders(invaders: Vec<Invader>) -> Self {
        Swarm {
            total_spawned: invaders.len(),
            invaders,
            heading: Heading::Right,
            phase: SwarmPhase::Advancing,
            move_timer: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.invaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    /// Grows from 0.5 (full formation) to 2.5 (nothing left) as invaders die.
    pub fn speed_factor(&self) -> f32 {
        if self.total_spawned == 0 {
            return SWARM_MIN_SPEED_FACTOR;
        }
        let killed = self.total_spawned.saturating_sub(self.len()) as f32;
        SWARM_MIN_SPEED_FACTOR + killed / self.total_spawned as f32 * SWARM_SPEED_FACTOR_RANGE
    }

    /// Ticks that must accumulate between move events.
    pub fn move_interval(&self) -> f32 {
        SWARM_BASE_INTERVAL / self.speed_factor()
    }

    /// Leftmost and rightmost edge of the formation, if any invader is left.
    pub fn extent(&self) -> Option<(i32, i32)> {
        let left = self.invaders.iter().map(|i| i.rect.left()).min()?;
        let right = self.invaders.iter().map(|i| i.rect.right()).max()?;
        Some((left, right))
    }

    /// Lowest bottom edge in the formation.
    pub fn lowest_edge(&self) -> Option<i32> {
        self.invaders.iter().map(|i| i.rect.bottom()).max()
    }

    /// Advance the move timer and perform a move event once it is due.
    pub fn tick(&mut self) -> SwarmMove {
        self.move_timer += 1;
        if (self.move_timer as f32) < self.move_interval() {
            return SwarmMove::Waiting;
        }
        let outcome = self.step();
        self.move_timer = 0;
        outcome
    }

    /// One move event: reverse-and-descend at a margin, otherwise step
    /// sideways.  Every live invader gets its animation flip queued.
    pub fn step(&mut self) -> SwarmMove {
        let Some((left, right)) = self.extent() else {
            return SwarmMove::Waiting;
        };

        let at_edge = match self.heading {
            Heading::Right => right >= FIELD_WIDTH - SWARM_MARGIN,
            Heading::Left => left <= SWARM_MARGIN,
        };

        let (dx, dy) = if at_edge {
            self.heading = self.heading.flipped();
            self.phase = SwarmPhase::Reversing;
            trace!(heading = ?self.heading, live = self.len(), "swarm reversed");
            (0, SWARM_DESCENT)
        } else {
            self.phase = SwarmPhase::Advancing;
            (self.heading.sign() * SWARM_STEP, 0)
        };

        for invader in &mut self.invaders {
            invader.rect.translate(dx, dy);
            invader.pending_toggle = true;
        }

        if at_edge {
            SwarmMove::Reversed
        } else {
            SwarmMove::Stepped
        }
    }

    /// Per-entity update pass: flips the animation frame of every invader
    /// that moved since the last pass.
    pub fn animate(&mut self) {
        for invader in &mut self.invaders {
            invader.advance();
        }
    }

    /// True once any invader's lower edge reaches `line_y`.
    pub fn has_reached(&self, line_y: i32) -> bool {
        self.invaders.iter().any(|i| i.rect.bottom() >= line_y)
    }

    /// Pick a shooter uniformly from the live set.
    pub fn pick_shooter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Invader> {
        self.invaders.choose(rng)
    }
}
