/// Destructible cover.
///
/// A bunker is a 24×18 grid of one-unit cells.  Cells only ever go from
/// intact to destroyed; the bunker itself is never removed.

use crate::constants::{
    BUNKER_COLS, BUNKER_COUNT, BUNKER_ORIGIN_X, BUNKER_ROWS, BUNKER_SPACING, BUNKER_Y,
    EROSION_RADIUS,
};
use crate::geometry::Rect;

/// Rows 12–17, columns 7–17 form the arch under the bunker.
const ARCH_TOP_ROW: usize = 12;
const ARCH_FIRST_COL: usize = 7;
const ARCH_LAST_COL: usize = 17;

#[derive(Clone, Debug, PartialEq)]
pub struct Bunker {
    pub rect: Rect,
    /// Row-major occupancy, `true` = intact.
    cells: Vec<bool>,
}

impl Bunker {
    /// A bunker with the classic arch cut out of its base.
    pub fn new(x: i32, y: i32) -> Self {
        let mut bunker = Bunker::solid(x, y);
        for row in ARCH_TOP_ROW..BUNKER_ROWS {
            for col in ARCH_FIRST_COL..=ARCH_LAST_COL {
                bunker.cells[row * BUNKER_COLS + col] = false;
            }
        }
        bunker
    }

    /// A bunker with every cell intact.
    pub fn solid(x: i32, y: i32) -> Self {
        Bunker {
            rect: Rect::new(x, y, BUNKER_COLS as i32, BUNKER_ROWS as i32),
            cells: vec![true; BUNKER_COLS * BUNKER_ROWS],
        }
    }

    /// The four bunkers of a fresh round, left to right.
    pub fn row() -> Vec<Bunker> {
        (0..BUNKER_COUNT)
            .map(|i| Bunker::new(BUNKER_ORIGIN_X + i as i32 * BUNKER_SPACING, BUNKER_Y))
            .collect()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Out-of-grid coordinates read as destroyed.
    pub fn is_intact(&self, col: i32, row: i32) -> bool {
        Self::index(col, row).map_or(false, |i| self.cells[i])
    }

    pub fn intact_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.cells.len() - self.intact_count()
    }

    /// Does `r` cover at least one still-intact cell?
    pub fn overlaps_intact(&self, r: &Rect) -> bool {
        if !self.rect.intersects(r) {
            return false;
        }
        let x0 = r.left().max(self.rect.left()) - self.rect.x;
        let x1 = r.right().min(self.rect.right()) - self.rect.x;
        let y0 = r.top().max(self.rect.top()) - self.rect.y;
        let y1 = r.bottom().min(self.rect.bottom()) - self.rect.y;
        (y0..y1).any(|row| (x0..x1).any(|col| self.is_intact(col, row)))
    }

    /// Erode every cell within `EROSION_RADIUS` (Chebyshev) of the world
    /// point `(px, py)`.  Cells falling outside the grid are skipped.
    /// Returns how many cells went from intact to destroyed.
    pub fn hit(&mut self, px: i32, py: i32) -> usize {
        let cx = px - self.rect.x;
        let cy = py - self.rect.y;
        let mut cleared = 0;
        for dy in -EROSION_RADIUS..=EROSION_RADIUS {
            for dx in -EROSION_RADIUS..=EROSION_RADIUS {
                if let Some(i) = Self::index(cx + dx, cy + dy) {
                    if self.cells[i] {
                        self.cells[i] = false;
                        cleared += 1;
                    }
                }
            }
        }
        cleared
    }

    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= BUNKER_COLS as i32 || row >= BUNKER_ROWS as i32 {
            return None;
        }
        Some(row as usize * BUNKER_COLS + col as usize)
    }
}
