// animation/mod.rs
//
// Procedural loop animation: phase windows, the transform driver, and the
// ground tiling that hides the loop seam.

pub mod driver;
pub mod ground;
pub mod window;

pub use driver::{drive, TransformDriver, BOB_AMPLITUDE, SQUASH, TRACK_LENGTH};
pub use ground::GroundLayout;
pub use window::PhaseWindow;
