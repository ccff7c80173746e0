use crate::vec2::Vec2;

/// Square playing field with toroidal topology on both axes.
///
/// Replaces the pair of loose `CELL_NUMBER` comparisons that would otherwise
/// appear at every wrap site, making the board side explicit at call sites.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    cells: u16,
}

impl Board {
    /// Creates a square board with `cells` cells per side.
    #[must_use]
    pub fn new(cells: u16) -> Self {
        debug_assert!(cells > 0);
        Self { cells }
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub fn cells(self) -> u16 {
        self.cells
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cells) * usize::from(self.cells)
    }

    /// Returns true when `position` lies inside `[0, cells)` on both axes.
    #[must_use]
    pub fn contains(self, position: Vec2) -> bool {
        let side = f64::from(self.cells);
        position.x >= 0.0 && position.x < side && position.y >= 0.0 && position.y < side
    }

    /// Wraps `position` back onto the board, independently per axis.
    ///
    /// Single-step correction: a movement step has magnitude exactly 1, so a
    /// coordinate can leave the board by at most 1 and one addition or
    /// subtraction of the side length restores it.
    #[must_use]
    pub fn wrap(self, position: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(position.x, f64::from(self.cells)),
            wrap_axis(position.y, f64::from(self.cells)),
        )
    }

    /// Returns the single-cell step from `from` to `to` for logically
    /// adjacent positions, corrected across the wrap seam.
    ///
    /// Adjacent snake segments always represent a one-cell step, but the
    /// plain difference of their positions has magnitude `cells - 1` when
    /// one of them has wrapped. Renderers classify segment orientation from
    /// this delta, so the seam case is folded back to a unit component by
    /// modular difference.
    #[must_use]
    pub fn unit_delta(self, from: Vec2, to: Vec2) -> Vec2 {
        let delta = to - from;
        Vec2::new(
            fold_seam(delta.x, f64::from(self.cells)),
            fold_seam(delta.y, f64::from(self.cells)),
        )
    }
}

fn wrap_axis(value: f64, side: f64) -> f64 {
    if value >= side {
        value - side
    } else if value < 0.0 {
        value + side
    } else {
        value
    }
}

fn fold_seam(delta: f64, side: f64) -> f64 {
    if delta > 1.0 {
        delta - side
    } else if delta < -1.0 {
        delta + side
    } else {
        delta
    }
}
