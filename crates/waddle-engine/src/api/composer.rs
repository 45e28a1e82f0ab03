use crate::animation::driver::TransformDriver;
use crate::api::config::VignetteConfig;
use crate::api::types::{EntityTransform, ViewportRect};
use crate::core::scene::SceneNodes;
use crate::core::time::LoopPhase;
use crate::renderer::camera::{OrthoCamera, OrthographicFrustum, ProjectionController};
use crate::renderer::fit::{fit_world, WorldFit};
use crate::renderer::traits::{RenderSurface, SurfaceSize};

/// Everything the composer derived on the latest frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub elapsed: f64,
    pub phase: f64,
    pub transform: EntityTransform,
}

/// Everything the composer derived on the latest resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutput {
    pub frustum: OrthographicFrustum,
    pub fit: WorldFit,
    pub surface: SurfaceSize,
}

/// Applies the pure driver and projection outputs to the scene, camera and
/// render surfaces. This is the only stateful piece; all math it calls is
/// pure.
///
/// `on_resize` takes `&mut self` and returns only after the camera and every
/// surface are updated, so the next `on_frame` can never observe a frustum
/// that disagrees with the surface size.
pub struct SceneComposer<N: SceneNodes> {
    loop_phase: LoopPhase,
    driver: TransformDriver,
    projection: ProjectionController,
    camera: OrthoCamera,
    nodes: N,
    surfaces: Vec<Box<dyn RenderSurface>>,
    last_frame: Option<FrameOutput>,
    last_resize: Option<ResizeOutput>,
    resize_generation: u32,
}

impl<N: SceneNodes> SceneComposer<N> {
    /// Build the composer and run an initial resize for `viewport`.
    pub fn new(config: &VignetteConfig, nodes: N, viewport: ViewportRect) -> Self {
        let projection = config.projection();
        let camera = OrthoCamera::new(projection.compute_frustum(&viewport), config.orbit().eye());
        let mut composer = Self {
            loop_phase: config.loop_phase(),
            driver: config.driver(),
            projection,
            camera,
            nodes,
            surfaces: Vec::new(),
            last_frame: None,
            last_resize: None,
            resize_generation: 0,
        };
        composer.on_resize(viewport);
        composer
    }

    /// Register a surface and bring it to the current size immediately.
    pub fn add_surface(&mut self, mut surface: Box<dyn RenderSurface>) {
        if let Some(resize) = &self.last_resize {
            surface.resize(&resize.surface);
        }
        log::debug!("surface '{}' registered", surface.name());
        self.surfaces.push(surface);
    }

    /// Per-frame hook: phase -> drive -> scene nodes.
    pub fn on_frame(&mut self, elapsed: f64) -> EntityTransform {
        let phase = self.loop_phase.at(elapsed);
        let transform = self.driver.drive(phase);
        self.nodes.apply_transform(&transform);
        self.last_frame = Some(FrameOutput {
            elapsed,
            phase,
            transform,
        });
        transform
    }

    /// Resize hook: frustum, world fit and every render surface, in one call.
    pub fn on_resize(&mut self, viewport: ViewportRect) -> OrthographicFrustum {
        let frustum = self.projection.compute_frustum(&viewport);
        self.camera.set_frustum(frustum);

        let fit = fit_world(&viewport);
        self.nodes.apply_world_fit(&fit);

        let surface = SurfaceSize::from_viewport(&viewport);
        for s in self.surfaces.iter_mut() {
            s.resize(&surface);
        }

        self.resize_generation = self.resize_generation.wrapping_add(1);
        log::debug!(
            "resize {}x{} @{} -> frustum [{}, {}] x [{}, {}], {} surfaces",
            viewport.width,
            viewport.height,
            surface.pixel_ratio,
            frustum.left,
            frustum.right,
            frustum.bottom,
            frustum.top,
            self.surfaces.len(),
        );

        self.last_resize = Some(ResizeOutput {
            frustum,
            fit,
            surface,
        });
        frustum
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn nodes(&self) -> &N {
        &self.nodes
    }

    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last_frame.as_ref()
    }

    pub fn last_resize(&self) -> Option<&ResizeOutput> {
        self.last_resize.as_ref()
    }

    /// Incremented on every resize; hosts compare it to know when to
    /// re-apply sizes on their side.
    pub fn resize_generation(&self) -> u32 {
        self.resize_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::animation::driver::{BOB_AMPLITUDE, SQUASH, TRACK_LENGTH};
    use crate::core::scene::{Scene, ENTITY_TAG, GROUND_TAG, WORLD_TAG};

    /// Records every size it is given.
    struct Probe {
        name: &'static str,
        sizes: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl RenderSurface for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn resize(&mut self, size: &SurfaceSize) {
            self.sizes
                .borrow_mut()
                .push((size.physical_width, size.physical_height));
        }
    }

    fn composer() -> SceneComposer<Scene> {
        SceneComposer::new(
            &VignetteConfig::default(),
            Scene::vignette(),
            ViewportRect::new(800.0, 600.0, 1.0),
        )
    }

    #[test]
    fn frame_at_zero_is_seam_pose() {
        let mut c = composer();
        let t = c.on_frame(0.0);
        assert_eq!(t.ground_offset_z, 0.0);
        assert_eq!(t.bob_height_y, 0.0);
        assert!((t.scale_y - (1.0 - SQUASH)).abs() < 1e-12);

        let entity = c.nodes().find_by_tag(ENTITY_TAG).unwrap();
        assert_eq!(entity.scale.y, 0.75);
        assert_eq!(entity.position.y, 0.0);
    }

    #[test]
    fn frame_at_half_period_is_top_of_hop() {
        let mut c = composer();
        let t = c.on_frame(500.0);
        assert!((t.ground_offset_z + 0.5 * TRACK_LENGTH).abs() < 1e-9);
        assert_eq!(t.bob_height_y, BOB_AMPLITUDE);
        assert_eq!(t.scale_y, 1.0);

        let ground = c.nodes().find_by_tag(GROUND_TAG).unwrap();
        assert!((ground.position.z + 165.0).abs() < 1e-3);
        assert_eq!(c.last_frame().unwrap().phase, 0.5);
    }

    #[test]
    fn frames_are_deterministic() {
        let mut a = composer();
        let mut b = composer();
        for elapsed in [0.0, 16.7, 333.3, 999.9, 4321.0] {
            assert_eq!(a.on_frame(elapsed), b.on_frame(elapsed));
        }
        // Out-of-order readings give the same answer as fresh ones.
        assert_eq!(a.on_frame(16.7), b.on_frame(16.7));
    }

    #[test]
    fn resize_updates_camera_world_and_surfaces_together() {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let mut c = composer();
        c.add_surface(Box::new(Probe {
            name: "framebuffer",
            sizes: sizes.clone(),
        }));
        c.add_surface(Box::new(Probe {
            name: "outline",
            sizes: sizes.clone(),
        }));
        // Registration sizes each surface to the current viewport.
        assert_eq!(*sizes.borrow(), vec![(800, 600), (800, 600)]);

        let generation = c.resize_generation();
        let frustum = c.on_resize(ViewportRect::new(1024.0, 768.0, 2.0));
        assert_eq!(frustum.right, 512.0);
        assert_eq!(c.camera().frustum, frustum);
        assert_eq!(c.resize_generation(), generation + 1);
        assert_eq!(&sizes.borrow()[2..], &[(2048, 1536), (2048, 1536)]);

        let world = c.nodes().find_by_tag(WORLD_TAG).unwrap();
        assert_eq!(world.scale.x, 1024.0 / 400.0);
    }

    #[test]
    fn initial_resize_runs_in_constructor() {
        let c = composer();
        let resize = c.last_resize().unwrap();
        assert_eq!(resize.frustum.left, -400.0);
        assert_eq!(resize.fit.scale, 2.0);
        assert_eq!(c.resize_generation(), 1);
    }

    #[test]
    fn camera_sits_on_pinned_orbit() {
        let c = composer();
        let eye = c.camera().eye;
        assert!((eye.length() - 1000.0 * 3f32.sqrt()).abs() < 1e-1);
        assert!(c.camera().distance_to_target() < c.camera().frustum.far);
    }
}
