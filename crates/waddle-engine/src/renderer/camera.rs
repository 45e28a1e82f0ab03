use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::api::types::ViewportRect;

/// Fixed camera offset along each axis in the reference vignette.
pub const CAMERA_DISTANCE: f32 = 1000.0;
/// Near clip plane.
pub const NEAR_PLANE: f32 = 0.1;
/// Far plane as a multiple of the camera distance.
pub const FAR_FACTOR: f32 = 3.0;

/// Orthographic projection volume. One world unit maps to one CSS pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OrthographicFrustum {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthographicFrustum {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Build the projection matrix (GL clip space, Z in [-1, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

/// Recomputes the camera frustum from the viewport.
///
/// Holds only the clip-plane configuration; every call derives the frustum
/// from scratch and keeps no aspect state between resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionController {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionController {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE, NEAR_PLANE, FAR_FACTOR)
    }
}

impl ProjectionController {
    /// `far = far_factor * distance` so the far plane encloses the camera
    /// offset with margin.
    pub fn new(distance: f32, near: f32, far_factor: f32) -> Self {
        Self {
            near,
            far: distance * far_factor,
        }
    }

    pub fn compute_frustum(&self, viewport: &ViewportRect) -> OrthographicFrustum {
        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;
        OrthographicFrustum {
            left: -half_w,
            right: half_w,
            top: half_h,
            bottom: -half_h,
            near: self.near,
            far: self.far,
        }
    }
}

/// [`ProjectionController::compute_frustum`] with the reference planes.
pub fn compute_frustum(viewport: &ViewportRect) -> OrthographicFrustum {
    ProjectionController::default().compute_frustum(viewport)
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
}

/// Orthographic camera looking at the origin from a fixed eye position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub frustum: OrthographicFrustum,
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl OrthoCamera {
    pub fn new(frustum: OrthographicFrustum, eye: Vec3) -> Self {
        Self {
            frustum,
            eye,
            target: Vec3::ZERO,
        }
    }

    /// Replace the frustum wholesale (e.g. on window resize).
    pub fn set_frustum(&mut self, frustum: OrthographicFrustum) {
        self.frustum = frustum;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.frustum.projection_matrix()
    }

    /// Y-up look-at matrix from the eye to the target.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Combined projection * view matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }

    /// Distance from the eye to the target.
    pub fn distance_to_target(&self) -> f32 {
        self.eye.distance(self.target)
    }
}
