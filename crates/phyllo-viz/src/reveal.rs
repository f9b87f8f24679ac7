//! Progressive reveal cursor for the shape that draws itself.

/// Visible prefix of the progressive shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RevealState {
    cursor: usize,
    total: usize,
}

impl RevealState {
    /// Starts with nothing visible. A zero total is always fully revealed.
    pub fn new(total: usize) -> Self {
        Self { cursor: 0, total }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves the cursor to where `rate` points per second puts it at `wall_secs`.
    pub fn advance(&mut self, wall_secs: f64, rate: f64) -> usize {
        self.cursor = reveal_cursor(wall_secs, rate, self.total);
        self.cursor
    }
}

/// `trunc((wall_secs · rate) mod total)`, kept in `[0, total − 1]`.
///
/// Negative and non-finite times never produce an out-of-range cursor.
pub fn reveal_cursor(wall_secs: f64, rate: f64, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let x = wall_secs * rate;
    if !x.is_finite() {
        return 0;
    }
    // rem_euclid can round up to exactly `total` for tiny negative inputs.
    let m = x.rem_euclid(total as f64).trunc();
    (m as usize).min(total - 1)
}
