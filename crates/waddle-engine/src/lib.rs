pub mod api;
pub mod animation;
pub mod bridge;
pub mod core;
pub mod extensions;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::composer::{FrameOutput, ResizeOutput, SceneComposer};
pub use api::config::{ConfigError, VignetteConfig};
pub use api::types::{EntityTransform, NodeId, ViewportRect};
pub use animation::{drive, GroundLayout, PhaseWindow, TransformDriver};
pub use animation::{BOB_AMPLITUDE, SQUASH, TRACK_LENGTH};
pub use bridge::protocol::{FrameRecord, PROTOCOL_VERSION};
pub use crate::core::scene::{Node, Scene, SceneNodes};
pub use crate::core::time::{phase, Clock, LoopPhase};
pub use renderer::camera::{
    compute_frustum, CameraUniform, OrthoCamera, OrthographicFrustum, ProjectionController,
};
pub use renderer::fit::{fit_world, WorldFit};
pub use renderer::orbit::OrbitRig;
pub use renderer::traits::{RenderSurface, SurfaceSize};

// Extensions: pure math helpers
pub use extensions::{
    clamp, ease_in_cubic, ease_out_cubic, lerp, normalize, parabola, Easing,
};
