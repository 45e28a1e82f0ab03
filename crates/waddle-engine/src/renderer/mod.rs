pub mod camera;
pub mod fit;
pub mod orbit;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{
    compute_frustum, CameraUniform, OrthoCamera, OrthographicFrustum, ProjectionController,
};
pub use fit::{fit_world, WorldFit};
pub use orbit::OrbitRig;
pub use traits::{RenderSurface, SurfaceSize};
