/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable `RenderFrame`.
/// No game logic is performed; this module only maps the 224×256 logical
/// playfield onto whatever terminal grid is available and prints it.

use std::collections::HashSet;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use space_invaders::entities::Tier;
use space_invaders::render::{DrawCommand, EntityKind, RenderFrame, Visual};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_WAVE: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_INVADER_LARGE: Color = Color::Green;
const C_INVADER_MEDIUM: Color = Color::Cyan;
const C_INVADER_SMALL: Color = Color::Magenta;
const C_SHOT_PLAYER: Color = Color::White;
const C_SHOT_INVADER: Color = Color::Green;
const C_BUNKER: Color = Color::Green;
const C_SAUCER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Logical → terminal mapping ────────────────────────────────────────────────

/// Inner playfield area: inside the border, below the HUD row.
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }

    fn inner_cols(&self) -> i32 {
        self.width.saturating_sub(2).max(1) as i32
    }

    fn inner_rows(&self) -> i32 {
        self.height.saturating_sub(4).max(1) as i32
    }

    fn col(&self, x: i32) -> Option<u16> {
        if !(0..FIELD_WIDTH).contains(&x) {
            return None;
        }
        Some((1 + x * self.inner_cols() / FIELD_WIDTH) as u16)
    }

    fn row(&self, y: i32) -> Option<u16> {
        if !(0..FIELD_HEIGHT).contains(&y) {
            return None;
        }
        Some((2 + y * self.inner_rows() / FIELD_HEIGHT) as u16)
    }

    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        Some((self.col(x)?, self.row(y)?))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &RenderFrame) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, &view, frame)?;

    for command in &frame.commands {
        draw_command(out, &view, command)?;
    }

    draw_controls_hint(out, &view)?;

    if let Some(prompt) = &frame.hud.game_over {
        draw_game_over(out, &view, frame, prompt)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, frame: &RenderFrame) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&frame.hud.score))?;

    let wave = format!("[ WAVE {} ]", frame.hud.wave);
    let wx = (view.width / 2).saturating_sub(wave.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(&wave))?;

    let lx = view
        .width
        .saturating_sub(frame.hud.lives.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&frame.hud.lives))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_command<W: Write>(
    out: &mut W,
    view: &Viewport,
    command: &DrawCommand,
) -> std::io::Result<()> {
    let r = command.rect;
    match (&command.kind, &command.visual) {
        (EntityKind::Player, _) => {
            //   ▲       ← nose
            //  /█\      ← hull
            let Some((cx, top)) = view.cell(r.center_x(), r.top()) else {
                return Ok(());
            };
            out.queue(style::SetForegroundColor(C_PLAYER))?;
            out.queue(cursor::MoveTo(cx, top))?;
            out.queue(Print("▲"))?;
            if let Some(bottom) = view.row(r.bottom() - 1) {
                let hull_row = if bottom > top { bottom } else { top + 1 };
                out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), hull_row))?;
                out.queue(Print("/█\\"))?;
            }
        }
        (EntityKind::Invader(tier), visual) => {
            let frame = match visual {
                Visual::Frame(f) => *f,
                _ => 0,
            };
            let (glyph, color) = invader_glyph(*tier, frame);
            if let Some((cx, row)) = view.cell(r.center_x(), r.top()) {
                out.queue(style::SetForegroundColor(color))?;
                out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), row))?;
                out.queue(Print(glyph))?;
            }
        }
        (EntityKind::PlayerShot, _) => draw_shot(out, view, r.center_x(), r.top(), "║", C_SHOT_PLAYER)?,
        (EntityKind::InvaderShot, _) => {
            draw_shot(out, view, r.center_x(), r.bottom() - 1, "↓", C_SHOT_INVADER)?
        }
        (EntityKind::Bunker, Visual::Cells { cols, rows, cells }) => {
            // Several cells share a terminal cell; any intact one lights it.
            let mut lit: HashSet<(u16, u16)> = HashSet::new();
            for row in 0..*rows {
                for col in 0..*cols {
                    if cells[row * cols + col] {
                        if let Some(cell) = view.cell(r.x + col as i32, r.y + row as i32) {
                            lit.insert(cell);
                        }
                    }
                }
            }
            out.queue(style::SetForegroundColor(C_BUNKER))?;
            for (col, row) in lit {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("█"))?;
            }
        }
        (EntityKind::Bunker, _) => {}
        (EntityKind::Saucer, _) => {
            let left = view.col(r.left().max(0));
            let row = view.row(r.top());
            if let (Some(col), Some(row)) = (left, row) {
                out.queue(style::SetForegroundColor(C_SAUCER))?;
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("<=O=>"))?;
            }
        }
    }
    Ok(())
}

/// Sprite per tier and animation frame.
fn invader_glyph(tier: Tier, frame: u8) -> (&'static str, Color) {
    match (tier, frame) {
        (Tier::Large, 0) => ("«▼»", C_INVADER_LARGE),
        (Tier::Large, _) => ("»▼«", C_INVADER_LARGE),
        (Tier::Medium, 0) => ("(◎)", C_INVADER_MEDIUM),
        (Tier::Medium, _) => ("{◎}", C_INVADER_MEDIUM),
        (Tier::Small, 0) => ("/o\\", C_INVADER_SMALL),
        (Tier::Small, _) => ("\\o/", C_INVADER_SMALL),
    }
}

fn draw_shot<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: i32,
    y: i32,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    frame: &RenderFrame,
    prompt: &str,
) -> std::io::Result<()> {
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (frame.hud.score.as_str(), Color::Yellow),
        (prompt, Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
