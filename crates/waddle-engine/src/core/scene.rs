use glam::Vec3;

use crate::api::types::{EntityTransform, NodeId};
use crate::renderer::fit::WorldFit;

/// Tag of the world root node (parent of ground and entity).
pub const WORLD_TAG: &str = "world";
/// Tag of the scrolling ground node.
pub const GROUND_TAG: &str = "ground";
/// Tag of the animated entity node.
pub const ENTITY_TAG: &str = "entity";

/// The scene-graph channels the composer writes each frame.
///
/// Implemented by whoever owns the actual nodes: the in-crate [`Scene`], or
/// a host binding that forwards to a JavaScript scene graph.
pub trait SceneNodes {
    /// Write the per-frame transform onto the ground and entity nodes.
    fn apply_transform(&mut self, transform: &EntityTransform);

    /// Rescale and reposition the world root after a resize.
    fn apply_world_fit(&mut self, fit: &WorldFit);
}

/// A scene-graph node: position and scale only. Orientation and meshes stay
/// with the asset layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub tag: String,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }
}

/// Simple node storage using a flat Vec.
/// The vignette has a handful of nodes; lookups are linear.
pub struct Scene {
    nodes: Vec<Node>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(8),
            next_id: 1,
        }
    }

    /// Scene with the world, ground and entity nodes already spawned.
    pub fn vignette() -> Self {
        let mut scene = Self::new();
        for tag in [WORLD_TAG, GROUND_TAG, ENTITY_TAG] {
            let id = scene.next_id();
            scene.spawn(Node::new(id).with_tag(tag));
        }
        scene
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find the first node with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNodes for Scene {
    fn apply_transform(&mut self, transform: &EntityTransform) {
        if let Some(ground) = self.find_by_tag_mut(GROUND_TAG) {
            ground.position.z = transform.ground_offset_z as f32;
        }
        if let Some(entity) = self.find_by_tag_mut(ENTITY_TAG) {
            entity.position.y = transform.bob_height_y as f32;
            entity.scale.y = transform.scale_y as f32;
        }
    }

    fn apply_world_fit(&mut self, fit: &WorldFit) {
        if let Some(world) = self.find_by_tag_mut(WORLD_TAG) {
            world.position.y = fit.offset_y;
            world.scale = Vec3::splat(fit.scale);
        }
    }
}
