pub mod runner;

pub use runner::VignetteRunner;
pub use waddle_engine;

/// Generate all `#[wasm_bindgen]` exports for a vignette.
///
/// This macro generates:
/// - `thread_local!` storage for the VignetteRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, frame/tick, resize, record accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// waddle_web::export_vignette!("duck-walk");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `js-sys`, `log`,
/// `console_log` and `console_error_panic_hook`.
///
/// # Arguments
///
/// - `$name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_vignette {
    ($name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::VignetteRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::VignetteRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Vignette not initialized. Call vignette_init() first.");
                f(runner)
            })
        }

        fn install(runner: $crate::VignetteRunner) {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $name);
        }

        fn init_hooks() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }

        #[wasm_bindgen]
        pub fn vignette_init(width: f32, height: f32, pixel_ratio: f32) {
            init_hooks();
            let viewport = $crate::waddle_engine::ViewportRect::new(width, height, pixel_ratio);
            install($crate::VignetteRunner::new(
                &$crate::waddle_engine::VignetteConfig::default(),
                viewport,
            ));
        }

        #[wasm_bindgen]
        pub fn vignette_init_with_config(json: &str, width: f32, height: f32, pixel_ratio: f32) {
            init_hooks();
            let viewport = $crate::waddle_engine::ViewportRect::new(width, height, pixel_ratio);
            install($crate::VignetteRunner::from_json(json, viewport));
        }

        /// Compose a frame at an absolute clock reading in milliseconds.
        #[wasm_bindgen]
        pub fn vignette_frame(elapsed_ms: f64) {
            with_runner(|r| r.frame(elapsed_ms));
        }

        /// Compose a frame after advancing the runner's own clock.
        #[wasm_bindgen]
        pub fn vignette_tick(delta_ms: f64) {
            with_runner(|r| r.tick(delta_ms));
        }

        #[wasm_bindgen]
        pub fn vignette_resize(width: f32, height: f32, pixel_ratio: f32) {
            with_runner(|r| r.resize(width, height, pixel_ratio));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_record_ptr() -> *const f32 {
            with_runner(|r| r.record_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_record_len() -> u32 {
            with_runner(|r| r.record_len())
        }

        /// Copy of the frame record, for hosts without shared memory access.
        #[wasm_bindgen]
        pub fn get_frame_record() -> js_sys::Float32Array {
            with_runner(|r| js_sys::Float32Array::from(r.record_floats()))
        }

        #[wasm_bindgen]
        pub fn get_ground_tiles() -> js_sys::Float32Array {
            with_runner(|r| js_sys::Float32Array::from(r.ground_tiles()))
        }

        #[wasm_bindgen]
        pub fn get_camera_uniform() -> js_sys::Float32Array {
            with_runner(|r| js_sys::Float32Array::from(&r.camera_uniform()[..]))
        }
    };
}
