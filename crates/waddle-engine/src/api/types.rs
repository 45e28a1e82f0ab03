use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Per-frame output of the transform driver.
///
/// Values only; the scene node they are written onto belongs to whoever
/// implements [`SceneNodes`](crate::core::scene::SceneNodes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EntityTransform {
    /// Z offset of the ground plane. Scrolls backward while the entity stays put.
    pub ground_offset_z: f64,
    /// Height of the entity above its rest position.
    pub bob_height_y: f64,
    /// Vertical scale of the entity (squash/stretch).
    pub scale_y: f64,
}

/// Snapshot of the host viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub width: f32,
    pub height: f32,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f32,
}

impl ViewportRect {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width over height. Zero-height viewports report 1.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}
