//! Render surface trait for everything that must follow the viewport size.
//!
//! The framebuffer, the post-processing composer and its outline pass all
//! live outside this crate (WebGL in the browser). They implement
//! [`RenderSurface`] so the composer can resize them in the same call that
//! recomputes the camera frustum.

use serde::Serialize;

use crate::api::types::ViewportRect;

/// Target size for a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    /// CSS width.
    pub width: f32,
    /// CSS height.
    pub height: f32,
    pub pixel_ratio: f32,
    /// Backing-store width in device pixels (at least 1).
    pub physical_width: u32,
    /// Backing-store height in device pixels (at least 1).
    pub physical_height: u32,
}

impl SurfaceSize {
    pub fn from_viewport(viewport: &ViewportRect) -> Self {
        let ratio = if viewport.pixel_ratio.is_finite() && viewport.pixel_ratio > 0.0 {
            viewport.pixel_ratio
        } else {
            1.0
        };
        Self {
            width: viewport.width,
            height: viewport.height,
            pixel_ratio: ratio,
            physical_width: physical(viewport.width, ratio),
            physical_height: physical(viewport.height, ratio),
        }
    }
}

fn physical(css: f32, ratio: f32) -> u32 {
    let px = (css * ratio).round();
    if px.is_finite() && px >= 1.0 {
        px as u32
    } else {
        1
    }
}

/// Anything whose resolution must track the viewport.
///
/// # Example Implementation
///
/// ```ignore
/// struct OutlinePass {
///     resolution: [u32; 2],
/// }
///
/// impl RenderSurface for OutlinePass {
///     fn name(&self) -> &'static str { "outline" }
///
///     fn resize(&mut self, size: &SurfaceSize) {
///         self.resolution = [size.physical_width, size.physical_height];
///     }
/// }
/// ```
pub trait RenderSurface {
    /// Identifier used in logs (e.g., "framebuffer", "composer", "outline").
    fn name(&self) -> &'static str;

    /// Resize backing buffers. Called once per viewport change.
    fn resize(&mut self, size: &SurfaceSize);
}
