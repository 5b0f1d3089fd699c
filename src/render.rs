/// Draw list and HUD text produced once per tick.
///
/// No terminal code lives here: a front-end walks `commands` in order and
/// prints the HUD strings wherever it likes.

use crate::constants::{BUNKER_COLS, BUNKER_ROWS};
use crate::entities::{Entity, Owner, Phase, SimulationState, Tier};
use crate::geometry::Rect;

pub const GAME_OVER_PROMPT: &str = "Game Over - Press R to Restart";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Invader(Tier),
    PlayerShot,
    InvaderShot,
    Bunker,
    Saucer,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Visual {
    /// Plain filled rectangle.
    Solid,
    /// Active animation frame index.
    Frame(u8),
    /// Row-major occupancy of a bunker, `true` = intact.
    Cells {
        cols: usize,
        rows: usize,
        cells: Vec<bool>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub kind: EntityKind,
    pub rect: Rect,
    pub visual: Visual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score: String,
    pub lives: String,
    pub wave: u32,
    pub game_over: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
    pub hud: Hud,
}

/// Snapshot the state into draw order: player, invaders, projectiles,
/// bunkers, saucer.
pub fn frame(state: &SimulationState) -> RenderFrame {
    let mut commands = Vec::with_capacity(
        2 + state.swarm.len() + state.projectiles.len() + state.bunkers.len(),
    );

    commands.push(DrawCommand {
        kind: EntityKind::Player,
        rect: state.player.rect,
        visual: Visual::Solid,
    });

    for invader in &state.swarm.invaders {
        commands.push(DrawCommand {
            kind: EntityKind::Invader(invader.tier),
            rect: invader.bounds(),
            visual: Visual::Frame(invader.frame),
        });
    }

    for projectile in &state.projectiles {
        let kind = match projectile.owner {
            Owner::Player => EntityKind::PlayerShot,
            Owner::Invader => EntityKind::InvaderShot,
        };
        commands.push(DrawCommand {
            kind,
            rect: projectile.bounds(),
            visual: Visual::Solid,
        });
    }

    for bunker in &state.bunkers {
        commands.push(DrawCommand {
            kind: EntityKind::Bunker,
            rect: bunker.rect,
            visual: Visual::Cells {
                cols: BUNKER_COLS,
                rows: BUNKER_ROWS,
                cells: bunker.cells().to_vec(),
            },
        });
    }

    if let Some(saucer) = &state.saucer {
        commands.push(DrawCommand {
            kind: EntityKind::Saucer,
            rect: saucer.bounds(),
            visual: Visual::Solid,
        });
    }

    RenderFrame {
        commands,
        hud: hud(state),
    }
}

pub fn hud(state: &SimulationState) -> Hud {
    Hud {
        score: format!("Score: {}", state.player.score),
        lives: format!("Lives: {}", state.player.lives),
        wave: state.wave,
        game_over: (state.phase == Phase::GameOver).then(|| GAME_OVER_PROMPT.to_string()),
    }
}
