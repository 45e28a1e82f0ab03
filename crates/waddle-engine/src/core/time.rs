/// Loop period used by the reference vignette, in milliseconds.
pub const DEFAULT_PERIOD_MS: f64 = 1000.0;

/// Fractional position of `elapsed` within a repeating period.
///
/// Uses floor rather than truncation so negative readings still land in
/// [0, 1). Non-finite input maps to 0.
#[inline]
pub fn phase(elapsed: f64, period_ms: f64) -> f64 {
    let cycles = elapsed / period_ms;
    if !cycles.is_finite() {
        return 0.0;
    }
    let p = cycles - cycles.floor();
    // Tiny negative cycles round up to exactly 1.0; that point is the seam.
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

/// A validated loop period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopPhase {
    period_ms: f64,
}

impl LoopPhase {
    /// Returns `None` if the period is not a positive finite number.
    pub fn new(period_ms: f64) -> Option<Self> {
        (period_ms.is_finite() && period_ms > 0.0).then_some(Self { period_ms })
    }

    /// Phase in [0, 1) at the given clock reading.
    #[inline]
    pub fn at(&self, elapsed: f64) -> f64 {
        phase(elapsed, self.period_ms)
    }

    /// Number of completed loops at the given clock reading.
    pub fn cycle(&self, elapsed: f64) -> i64 {
        (elapsed / self.period_ms).floor() as i64
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }
}

impl Default for LoopPhase {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

/// Monotonic elapsed-time accumulator for hosts that report frame deltas.
/// Readings are in milliseconds and never run backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    elapsed: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta. Negative or non-finite deltas are dropped.
    /// Returns the new elapsed reading.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed += delta_ms;
        }
        self.elapsed
    }

    /// Current elapsed reading in milliseconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_stays_in_unit_interval() {
        let mut elapsed = 0.0;
        while elapsed < 10_000.0 {
            let p = phase(elapsed, DEFAULT_PERIOD_MS);
            assert!((0.0..1.0).contains(&p), "phase({}) = {}", elapsed, p);
            elapsed += 7.3;
        }
    }

    #[test]
    fn phase_is_periodic() {
        for elapsed in [0.0, 1.0, 250.0, 499.5, 999.0, 12_345.0] {
            let a = phase(elapsed, 1000.0);
            let b = phase(elapsed + 1000.0, 1000.0);
            assert!((a - b).abs() < 1e-9, "elapsed = {}", elapsed);
        }
    }

    #[test]
    fn phase_reference_points() {
        assert_eq!(phase(0.0, 1000.0), 0.0);
        assert_eq!(phase(500.0, 1000.0), 0.5);
        assert_eq!(phase(1000.0, 1000.0), 0.0);
        assert_eq!(phase(2250.0, 1000.0), 0.25);
    }

    #[test]
    fn negative_elapsed_uses_floor() {
        assert_eq!(phase(-250.0, 1000.0), 0.75);
        let p = phase(-1e-20, 1000.0);
        assert!((0.0..1.0).contains(&p), "got {}", p);
    }

    #[test]
    fn non_finite_elapsed_maps_to_zero() {
        assert_eq!(phase(f64::NAN, 1000.0), 0.0);
        assert_eq!(phase(f64::INFINITY, 1000.0), 0.0);
    }

    #[test]
    fn loop_phase_rejects_bad_period() {
        assert!(LoopPhase::new(0.0).is_none());
        assert!(LoopPhase::new(-5.0).is_none());
        assert!(LoopPhase::new(f64::NAN).is_none());
        assert!(LoopPhase::new(1000.0).is_some());
    }

    #[test]
    fn loop_phase_counts_cycles() {
        let lp = LoopPhase::default();
        assert_eq!(lp.cycle(0.0), 0);
        assert_eq!(lp.cycle(999.0), 0);
        assert_eq!(lp.cycle(1000.0), 1);
        assert_eq!(lp.at(1500.0), 0.5);
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = Clock::new();
        clock.advance(16.0);
        clock.advance(-100.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.elapsed(), 16.0);
        assert_eq!(clock.advance(4.0), 20.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
    }
}
