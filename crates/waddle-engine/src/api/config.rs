use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::driver::{TransformDriver, BOB_AMPLITUDE, SQUASH, TRACK_LENGTH};
use crate::animation::ground::GroundLayout;
use crate::core::time::{LoopPhase, DEFAULT_PERIOD_MS};
use crate::extensions::easing::Easing;
use crate::renderer::camera::{ProjectionController, CAMERA_DISTANCE, FAR_FACTOR, NEAR_PLANE};
use crate::renderer::orbit::OrbitRig;

/// Upper bound on ground tiles; the whole row is laid out up front.
pub const MAX_GROUND_TILES: u32 = 64;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("loop period must be positive and finite, got {0}")]
    Period(f64),
    #[error("squash must be in [0, 1), got {0}")]
    Squash(f64),
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("far plane {far} does not enclose the camera orbit radius {radius}")]
    FarPlaneTooClose { far: f32, radius: f32 },
    #[error("track length {track_length} is not a whole number of {tile_size}-unit ground tiles")]
    SeamMismatch { track_length: f64, tile_size: f64 },
    #[error("bob amplitude must be finite and non-negative, got {0}")]
    BobAmplitude(f64),
    #[error("ground needs at least one tile")]
    NoGroundTiles,
    #[error("ground tile count {count} exceeds the limit of {max}")]
    TooManyTiles { count: u32, max: u32 },
}

/// Tuning for the vignette. Every field has the reference value as default,
/// so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VignetteConfig {
    /// Loop period in milliseconds.
    pub period_ms: f64,
    /// Ground travel per loop.
    pub track_length: f64,
    /// Hop height at the top of the arc.
    pub bob_amplitude: f64,
    /// Squash at the loop seam.
    pub squash: f64,
    pub entry_easing: Easing,
    pub exit_easing: Easing,
    /// Initial camera offset along each axis.
    pub camera_distance: f32,
    pub near: f32,
    /// Far plane as a multiple of `camera_distance`.
    pub far_factor: f32,
    /// Pinned orbit polar angle, radians from +Y.
    pub polar_angle: f32,
    pub ground_tile_size: f64,
    pub ground_tile_count: u32,
}

impl Default for VignetteConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            track_length: TRACK_LENGTH,
            bob_amplitude: BOB_AMPLITUDE,
            squash: SQUASH,
            entry_easing: Easing::CubicIn,
            exit_easing: Easing::CubicOut,
            camera_distance: CAMERA_DISTANCE,
            near: NEAR_PLANE,
            far_factor: FAR_FACTOR,
            polar_angle: std::f32::consts::FRAC_PI_4,
            ground_tile_size: TRACK_LENGTH,
            ground_tile_count: 5,
        }
    }
}

impl VignetteConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if LoopPhase::new(self.period_ms).is_none() {
            return Err(ConfigError::Period(self.period_ms));
        }
        if !(0.0..1.0).contains(&self.squash) {
            return Err(ConfigError::Squash(self.squash));
        }
        if !(self.bob_amplitude.is_finite() && self.bob_amplitude >= 0.0) {
            return Err(ConfigError::BobAmplitude(self.bob_amplitude));
        }
        let projection = self.projection();
        if !(projection.near > 0.0 && projection.far > projection.near) {
            return Err(ConfigError::ClipPlanes {
                near: projection.near,
                far: projection.far,
            });
        }
        let radius = self.orbit().radius;
        if projection.far <= radius {
            return Err(ConfigError::FarPlaneTooClose {
                far: projection.far,
                radius,
            });
        }
        if self.ground_tile_count == 0 {
            return Err(ConfigError::NoGroundTiles);
        }
        if self.ground_tile_count > MAX_GROUND_TILES {
            return Err(ConfigError::TooManyTiles {
                count: self.ground_tile_count,
                max: MAX_GROUND_TILES,
            });
        }
        if !self.ground().is_seamless(self.track_length) {
            return Err(ConfigError::SeamMismatch {
                track_length: self.track_length,
                tile_size: self.ground_tile_size,
            });
        }
        Ok(())
    }

    /// Loop period. Falls back to the reference period if unvalidated
    /// input slipped through.
    pub fn loop_phase(&self) -> LoopPhase {
        LoopPhase::new(self.period_ms).unwrap_or_default()
    }

    pub fn driver(&self) -> TransformDriver {
        TransformDriver {
            track_length: self.track_length,
            bob_amplitude: self.bob_amplitude,
            squash: self.squash,
            entry_easing: self.entry_easing,
            exit_easing: self.exit_easing,
        }
    }

    pub fn projection(&self) -> ProjectionController {
        ProjectionController::new(self.camera_distance, self.near, self.far_factor)
    }

    /// Camera orbit: starts at `(d, d, d)` with the polar angle pinned.
    pub fn orbit(&self) -> OrbitRig {
        OrbitRig::from_eye(glam::Vec3::splat(self.camera_distance)).with_polar(self.polar_angle)
    }

    pub fn ground(&self) -> GroundLayout {
        GroundLayout::new(self.ground_tile_size, self.ground_tile_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        VignetteConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = VignetteConfig::from_json(r#"{ "bob_amplitude": 80.0 }"#).unwrap();
        assert_eq!(config.bob_amplitude, 80.0);
        assert_eq!(config.period_ms, 1000.0);
        assert_eq!(config.entry_easing, Easing::CubicIn);
    }

    #[test]
    fn easing_parses_by_name() {
        let config =
            VignetteConfig::from_json(r#"{ "entry_easing": "QuadIn", "exit_easing": "Linear" }"#)
                .unwrap();
        assert_eq!(config.entry_easing, Easing::QuadIn);
        assert_eq!(config.exit_easing, Easing::Linear);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = VignetteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_bad_period() {
        let err = VignetteConfig::from_json(r#"{ "period_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Period(_)));
    }

    #[test]
    fn rejects_full_squash() {
        let err = VignetteConfig::from_json(r#"{ "squash": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Squash(_)));
    }

    #[test]
    fn rejects_inverted_planes() {
        let err = VignetteConfig::from_json(r#"{ "near": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ClipPlanes { .. }));
    }

    #[test]
    fn rejects_far_plane_inside_orbit() {
        // Orbit radius is d * sqrt(3) ~ 1732 > 1.5 * 1000.
        let err = VignetteConfig::from_json(r#"{ "far_factor": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FarPlaneTooClose { .. }));
    }

    #[test]
    fn rejects_track_that_breaks_the_seam() {
        let err = VignetteConfig::from_json(r#"{ "track_length": 300.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SeamMismatch { .. }));
        VignetteConfig::from_json(r#"{ "track_length": 660.0 }"#).unwrap();
    }

    #[test]
    fn rejects_empty_ground() {
        let err = VignetteConfig::from_json(r#"{ "ground_tile_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoGroundTiles));
    }

    #[test]
    fn rejects_oversized_ground() {
        let err =
            VignetteConfig::from_json(r#"{ "ground_tile_count": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyTiles { count: u32::MAX, .. }));
        VignetteConfig::from_json(r#"{ "ground_tile_count": 64 }"#).unwrap();
    }

    #[test]
    fn rejects_negative_bob() {
        let err = VignetteConfig::from_json(r#"{ "bob_amplitude": -10.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BobAmplitude(_)));
        VignetteConfig::from_json(r#"{ "bob_amplitude": 0.0 }"#).unwrap();
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = VignetteConfig {
            squash: 0.1,
            ..VignetteConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(VignetteConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn derived_parts_follow_fields() {
        let config = VignetteConfig::default();
        assert_eq!(config.driver(), TransformDriver::default());
        assert_eq!(config.projection(), ProjectionController::default());
        assert_eq!(config.loop_phase().period_ms(), 1000.0);
        assert_eq!(config.ground(), GroundLayout::default());
    }
}
