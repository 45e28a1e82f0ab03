// extensions/mod.rs
//
// Pure math helpers shared by the animation driver.
// No dependencies on the scene or camera.

pub mod easing;

pub use easing::{clamp, ease_in_cubic, ease_out_cubic, lerp, normalize, parabola, Easing};
