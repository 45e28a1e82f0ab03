use serde::Serialize;

use crate::api::types::ViewportRect;
use super::camera::OrthographicFrustum;

/// Viewport extent (CSS pixels) at which the world is drawn at unit scale.
pub const REFERENCE_EXTENT: f32 = 400.0;
/// World drop below the camera target, in reference units.
pub const WORLD_DROP: f32 = 60.0;
/// Half-size of the shadow camera's square frustum, in reference units.
pub const SHADOW_HALF_EXTENT: f32 = 200.0;
pub const SHADOW_NEAR: f32 = 100.0;
pub const SHADOW_FAR: f32 = 600.0;
/// Shadow map resolution per side.
pub const SHADOW_MAP_SIZE: u32 = 1 << 7;

/// World scaling that keeps the vignette filling the viewport, plus the
/// matching shadow camera volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldFit {
    /// Uniform scale applied to the world root.
    pub scale: f32,
    /// Y position of the world root.
    pub offset_y: f32,
    /// Orthographic volume of the directional light's shadow camera.
    pub shadow: OrthographicFrustum,
    pub shadow_map_size: u32,
}

/// Derive the world fit from the viewport's larger side.
pub fn fit_world(viewport: &ViewportRect) -> WorldFit {
    let scale = viewport.width.max(viewport.height) / REFERENCE_EXTENT;
    WorldFit {
        scale,
        offset_y: -WORLD_DROP * scale,
        shadow: OrthographicFrustum {
            left: -SHADOW_HALF_EXTENT * scale,
            right: SHADOW_HALF_EXTENT * scale,
            top: SHADOW_HALF_EXTENT * scale,
            bottom: -SHADOW_HALF_EXTENT * scale,
            near: SHADOW_NEAR * scale,
            far: SHADOW_FAR * scale,
        },
        shadow_map_size: SHADOW_MAP_SIZE,
    }
}
