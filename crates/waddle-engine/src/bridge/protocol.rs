/// Frame record shared with the JavaScript host.
/// Must stay in sync with the host's `protocol.ts` reader.
///
/// Layout (all values f32 / 4 bytes, 32 floats total):
/// ```text
/// [0..3]   version, frame counter, resize generation
/// [3..7]   phase, ground_offset_z, bob_height_y, scale_y
/// [7..13]  camera frustum: left, right, top, bottom, near, far
/// [13..16] camera eye: x, y, z
/// [16..18] world scale, world offset y
/// [18..25] shadow frustum (6), shadow map size
/// [25..30] surface: css width, css height, pixel ratio, physical width, physical height
/// [30..32] reserved
/// ```
///
/// The host compares the resize generation with the last one it applied and
/// only then resizes its renderer, composer and outline pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::api::composer::{FrameOutput, ResizeOutput};
use crate::renderer::camera::OrthographicFrustum;

/// Protocol version written into the record.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Field indices, for hosts that read the record as a flat array.
pub const FIELD_VERSION: usize = 0;
pub const FIELD_FRAME_COUNTER: usize = 1;
pub const FIELD_RESIZE_GENERATION: usize = 2;
pub const FIELD_PHASE: usize = 3;
pub const FIELD_GROUND_OFFSET_Z: usize = 4;
pub const FIELD_BOB_HEIGHT_Y: usize = 5;
pub const FIELD_SCALE_Y: usize = 6;
pub const FIELD_CAMERA_FRUSTUM: usize = 7;
pub const FIELD_CAMERA_EYE: usize = 13;
pub const FIELD_WORLD_SCALE: usize = 16;
pub const FIELD_WORLD_OFFSET_Y: usize = 17;
pub const FIELD_SHADOW_FRUSTUM: usize = 18;
pub const FIELD_SHADOW_MAP_SIZE: usize = 24;
pub const FIELD_SURFACE: usize = 25;

/// Floats per frustum: left, right, top, bottom, near, far.
pub const FRUSTUM_FLOATS: usize = 6;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameRecord {
    pub version: f32,
    pub frame_counter: f32,
    pub resize_generation: f32,
    pub phase: f32,
    pub ground_offset_z: f32,
    pub bob_height_y: f32,
    pub scale_y: f32,
    pub camera: [f32; FRUSTUM_FLOATS],
    pub eye: [f32; 3],
    pub world_scale: f32,
    pub world_offset_y: f32,
    pub shadow: [f32; FRUSTUM_FLOATS],
    pub shadow_map_size: f32,
    pub surface_width: f32,
    pub surface_height: f32,
    pub pixel_ratio: f32,
    pub physical_width: f32,
    pub physical_height: f32,
    pub reserved: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<FrameRecord>() == FrameRecord::STRIDE_BYTES);

impl FrameRecord {
    pub const FLOATS: usize = 32;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new() -> Self {
        Self {
            version: PROTOCOL_VERSION,
            ..Self::zeroed()
        }
    }

    /// Write the per-frame fields. The frame counter wraps at 2^24, the
    /// largest integer an f32 holds exactly.
    pub fn write_frame(&mut self, frame: &FrameOutput, counter: u32) {
        self.frame_counter = (counter & 0x00FF_FFFF) as f32;
        self.phase = frame.phase as f32;
        self.ground_offset_z = frame.transform.ground_offset_z as f32;
        self.bob_height_y = frame.transform.bob_height_y as f32;
        self.scale_y = frame.transform.scale_y as f32;
    }

    /// Write the camera, world fit and surface fields after a resize.
    pub fn write_resize(&mut self, resize: &ResizeOutput, eye: Vec3, generation: u32) {
        self.resize_generation = (generation & 0x00FF_FFFF) as f32;
        self.camera = frustum_floats(&resize.frustum);
        self.eye = eye.to_array();
        self.world_scale = resize.fit.scale;
        self.world_offset_y = resize.fit.offset_y;
        self.shadow = frustum_floats(&resize.fit.shadow);
        self.shadow_map_size = resize.fit.shadow_map_size as f32;
        self.surface_width = resize.surface.width;
        self.surface_height = resize.surface.height;
        self.pixel_ratio = resize.surface.pixel_ratio;
        self.physical_width = resize.surface.physical_width as f32;
        self.physical_height = resize.surface.physical_height as f32;
    }

    /// The record as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Raw pointer to the record for direct reads from wasm memory.
    pub fn as_ptr(&self) -> *const f32 {
        self as *const Self as *const f32
    }
}

fn frustum_floats(f: &OrthographicFrustum) -> [f32; FRUSTUM_FLOATS] {
    [f.left, f.right, f.top, f.bottom, f.near, f.far]
}
