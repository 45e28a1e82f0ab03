// animation/driver.rs
//
// Phase -> EntityTransform. Pure: no scene access, no state between calls.

use crate::api::types::EntityTransform;
use crate::extensions::easing::{lerp, parabola, Easing};
use super::window::PhaseWindow;

/// Ground travel per loop in the reference vignette (one asphalt tile).
pub const TRACK_LENGTH: f64 = 330.0;
/// Hop height at the middle of the travel window.
pub const BOB_AMPLITUDE: f64 = 50.0;
/// Squash applied at each side of the loop seam (`K`).
pub const SQUASH: f64 = 0.25;

/// Converts loop phase into the entity and ground transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDriver {
    pub track_length: f64,
    pub bob_amplitude: f64,
    pub squash: f64,
    /// Ramp used while recovering from the landing squash.
    pub entry_easing: Easing,
    /// Ramp used while squashing ahead of the seam.
    pub exit_easing: Easing,
}

impl Default for TransformDriver {
    fn default() -> Self {
        Self {
            track_length: TRACK_LENGTH,
            bob_amplitude: BOB_AMPLITUDE,
            squash: SQUASH,
            entry_easing: Easing::CubicIn,
            exit_easing: Easing::CubicOut,
        }
    }
}

impl TransformDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the transforms for one phase value.
    ///
    /// Both ends of the loop squash to `1 - K` and sit at zero height, so
    /// `drive(0)` and `drive(1⁻)` agree. The ground offset jumps by exactly
    /// one track length, which the repeating ground tiles hide.
    pub fn drive(&self, phase: f64) -> EntityTransform {
        let mp = PhaseWindow::TRAVEL.progress(phase);
        let ground_offset_z = lerp(0.0, -self.track_length, mp);
        let bob_height_y = parabola(mp) * self.bob_amplitude;

        let fp = self.entry_easing.apply(PhaseWindow::ENTRY.progress(phase));
        let lp = self.exit_easing.apply(PhaseWindow::EXIT.progress(phase));
        let scale_y = 1.0 - (1.0 - fp) * self.squash - lp * self.squash;

        EntityTransform {
            ground_offset_z,
            bob_height_y,
            scale_y,
        }
    }

    /// Scale at the loop seam. At phase 0 only the entry term is active,
    /// just before 1 only the exit term, and each contributes `K`.
    pub fn seam_scale(&self) -> f64 {
        1.0 - self.squash
    }
}

/// [`TransformDriver::drive`] with the reference constants.
pub fn drive(phase: f64) -> EntityTransform {
    TransformDriver::default().drive(phase)
}
