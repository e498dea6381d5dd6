/*!
Graphics binding layer.

A retained scene graph of render nodes the client mirrors into its renderer.
The simulation only writes node poses, scale and visibility; meshes are named
by source (unit cube or model path) and resolved by the client.
*/

use std::path::{Path, PathBuf};

use crate::types::{Iso, Rgb, Vec3};

/// Dense index of a node in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MeshSource {
    /// Cube spanning [-1, 1] on every axis, sized by the node scale.
    Cube,
    /// Asset path relative to the client's asset root.
    Model(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
    pub name: String,
    pub mesh: MeshSource,
    pub color: Rgb,
    pub transform: Iso,
    pub scale: Vec3,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub translation: Vec3,
    /// Rotation about the X axis, radians.
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 20.0,
            near: 1.0,
            far: 50.0,
            aspect: 4.0 / 3.0,
            translation: Vec3::new(10.0, 45.0, 5.0),
            pitch: -1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    pub position: Vec3,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<RenderNode>,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub clear_color: Rgb,
    viewport: Viewport,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            clear_color: Rgb::new(0.2, 0.2, 0.2),
            viewport: Viewport {
                width: 800,
                height: 600,
            },
        }
    }
}

impl SceneGraph {
    pub fn add_node(&mut self, name: &str, mesh: MeshSource, scale: Vec3, color: Rgb) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RenderNode {
            name: name.to_owned(),
            mesh,
            color,
            transform: Iso::identity(),
            scale,
            visible: true,
        });
        id
    }

    pub fn add_cube(&mut self, name: &str, scale: Vec3, color: Rgb) -> NodeId {
        self.add_node(name, MeshSource::Cube, scale, color)
    }

    pub fn add_model(&mut self, name: &str, path: impl AsRef<Path>, scale: Vec3, color: Rgb) -> NodeId {
        self.add_node(name, MeshSource::Model(path.as_ref().to_path_buf()), scale, color)
    }

    pub fn node(&self, id: NodeId) -> Option<&RenderNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &RenderNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.visible = visible;
        }
    }

    /// Overwrite the node's pose and reassert its scale.
    pub fn set_pose(&mut self, id: NodeId, transform: Iso, scale: Vec3) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.transform = transform;
            node.scale = scale;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport and refresh the camera aspect. A zero height
    /// (minimised window) keeps the previous aspect.
    pub fn reset_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_start_visible_at_identity() {
        let mut graph = SceneGraph::default();
        let key = graph.add_model("key", "models/key.obj", Vec3::repeat(1.0), Rgb::new(0.5, 0.5, 0.5));
        let node = graph.node(key).unwrap();

        assert!(node.visible);
        assert_eq!(node.transform, Iso::identity());
        assert_eq!(node.mesh, MeshSource::Model(PathBuf::from("models/key.obj")));
    }

    #[test]
    fn set_pose_reasserts_scale() {
        let mut graph = SceneGraph::default();
        let id = graph.add_cube("wall", Vec3::new(1.0, 5.0, 10.0), Rgb::WHITE);
        let pose = Iso::translation(16.0, 3.0, 15.0);

        graph.set_pose(id, pose, Vec3::new(1.0, 5.0, 10.0));
        let node = graph.node(id).unwrap();
        assert_eq!(node.transform, pose);
        assert_eq!(node.scale, Vec3::new(1.0, 5.0, 10.0));
    }

    #[test]
    fn resize_updates_aspect_but_ignores_zero_height() {
        let mut graph = SceneGraph::default();
        graph.reset_viewport(1600, 800);
        assert_eq!(graph.camera.aspect, 2.0);

        graph.reset_viewport(1600, 0);
        assert_eq!(graph.camera.aspect, 2.0);
        assert_eq!(graph.viewport(), Viewport { width: 1600, height: 0 });
    }
}
