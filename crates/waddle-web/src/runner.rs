use waddle_engine::{
    Clock, FrameRecord, Scene, SceneComposer, ViewportRect, VignetteConfig,
};

/// Wires the scene composer to the browser frame loop.
///
/// The vignette crate creates one `thread_local!` VignetteRunner and exports
/// free functions via `#[wasm_bindgen]` (see [`export_vignette!`](crate::export_vignette)).
/// The host reads results from the [`FrameRecord`] after each call.
pub struct VignetteRunner {
    composer: SceneComposer<Scene>,
    ground_tiles: Vec<f32>,
    clock: Clock,
    record: FrameRecord,
    frame_counter: u32,
}

impl VignetteRunner {
    pub fn new(config: &VignetteConfig, viewport: ViewportRect) -> Self {
        let composer = SceneComposer::new(config, Scene::vignette(), viewport);
        let ground_tiles = config
            .ground()
            .tile_positions()
            .into_iter()
            .map(|z| z as f32)
            .collect();

        let mut runner = Self {
            composer,
            ground_tiles,
            clock: Clock::new(),
            record: FrameRecord::new(),
            frame_counter: 0,
        };
        runner.sync_resize();
        runner
    }

    /// Build from a JSON config. Invalid config is logged and replaced by
    /// the defaults; the vignette always starts.
    pub fn from_json(json: &str, viewport: ViewportRect) -> Self {
        let config = match VignetteConfig::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using default config", err);
                VignetteConfig::default()
            }
        };
        Self::new(&config, viewport)
    }

    /// Compose one frame at an absolute clock reading (ms).
    pub fn frame(&mut self, elapsed: f64) {
        self.composer.on_frame(elapsed);
        self.frame_counter = self.frame_counter.wrapping_add(1);
        if let Some(frame) = self.composer.last_frame() {
            self.record.write_frame(frame, self.frame_counter);
        }
    }

    /// Advance the internal clock by a frame delta (ms) and compose.
    pub fn tick(&mut self, delta_ms: f64) {
        let elapsed = self.clock.advance(delta_ms);
        self.frame(elapsed);
    }

    /// Recompute frustum, world fit and surface size for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.composer
            .on_resize(ViewportRect::new(width, height, pixel_ratio));
        self.sync_resize();
    }

    fn sync_resize(&mut self) {
        let eye = self.composer.camera().eye;
        let generation = self.composer.resize_generation();
        if let Some(resize) = self.composer.last_resize() {
            self.record.write_resize(resize, eye, generation);
        }
    }

    pub fn composer(&self) -> &SceneComposer<Scene> {
        &self.composer
    }

    // ---- Accessors for direct wasm-memory reads ----

    pub fn record_ptr(&self) -> *const f32 {
        self.record.as_ptr()
    }

    pub fn record_len(&self) -> u32 {
        FrameRecord::FLOATS as u32
    }

    pub fn record_floats(&self) -> &[f32] {
        self.record.as_floats()
    }

    /// Z positions of the ground tiles, in world units.
    pub fn ground_tiles(&self) -> &[f32] {
        &self.ground_tiles
    }

    /// Column-major view-projection matrix.
    pub fn camera_uniform(&self) -> [f32; 16] {
        self.composer.camera().view_projection().to_cols_array()
    }
}
