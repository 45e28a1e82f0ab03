use crate::extensions::easing::{clamp, normalize};

/// A named sub-interval of the loop phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
}

impl PhaseWindow {
    /// First 20% of the loop: the entity recovers from the landing squash.
    pub const ENTRY: PhaseWindow = PhaseWindow::new(0.0, 0.2);
    /// Middle 60%: the ground scrolls and the entity hops.
    pub const TRAVEL: PhaseWindow = PhaseWindow::new(0.2, 0.8);
    /// Last 20%: the entity squashes ahead of the seam.
    pub const EXIT: PhaseWindow = PhaseWindow::new(0.8, 1.0);

    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Progress through the window: 0 before it, 1 after it, linear inside.
    #[inline]
    pub fn progress(&self, phase: f64) -> f64 {
        clamp(normalize(self.start, self.end, phase), 0.0, 1.0)
    }

    pub fn contains(&self, phase: f64) -> bool {
        phase >= self.start && phase <= self.end
    }
}
