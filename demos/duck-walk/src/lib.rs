//! A duck walking across a looping asphalt track.
//!
//! The page loads `duck.glb` and the ground textures itself, then calls
//! `vignette_init` once and `vignette_frame(clock.elapsed)` every animation
//! frame, reading node transforms and camera planes from the frame record.

use wasm_bindgen::prelude::*;

waddle_web::export_vignette!("duck-walk");
