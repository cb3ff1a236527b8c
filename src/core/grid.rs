use glam::Vec2;

/// Grid cell spacing in logical pixels.
pub const CELL_SIZE: f32 = 40.0;

// Two deliberately unequal drift rates so the pattern's repeat period stays
// long along both axes.
pub const DRIFT_X: f32 = 0.05;
pub const DRIFT_Y: f32 = 0.03;

/// Monotonic time accumulator driving the blueprint-grid drift.
///
/// There is no per-cell state; every frame is a pure function of this phase
/// and the current viewport bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridPhase {
    time: f32,
}

impl GridPhase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.time += 1.0;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Toroidal offset of the grid within one cell. A non-positive cell size
    /// degrades to a static grid rather than a division by zero.
    pub fn offset(&self, cell: f32) -> Vec2 {
        if cell <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (self.time * DRIFT_X).rem_euclid(cell),
            (self.time * DRIFT_Y).rem_euclid(cell),
        )
    }
}

/// Line coordinates along one axis: from `-offset` in `cell` steps to one
/// cell beyond `extent`, so the animated offset never exposes a gap at the
/// edges. Empty when the spacing is degenerate.
pub fn line_positions(offset: f32, extent: f32, cell: f32) -> impl Iterator<Item = f32> {
    let first = (cell > 0.0 && extent >= 0.0).then_some(-offset);
    std::iter::successors(first, move |x| {
        let next = x + cell;
        (next <= extent + cell).then_some(next)
    })
}
