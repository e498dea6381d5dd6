use std::path::Path;

use bevy::{platform::collections::HashMap, prelude::*};
use tank_sim as sim;

use crate::convert;
use crate::simulation::{SimScene, run_frame};

/// Scene graph node → bevy entity drawing it.
#[derive(Resource, Default)]
pub struct NodeEntityMapping(pub HashMap<sim::NodeId, Entity>);

#[derive(Component, Debug)]
pub struct SceneNode(pub sim::NodeId);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(NodeEntityMapping::default());
    app.add_systems(Update, mirror_scene.after(run_frame));
}

/// Spawn a bevy entity for each new render node and copy pose, scale and
/// visibility onto the existing ones.
fn mirror_scene(
    mut commands: Commands,
    scene: Option<Res<SimScene>>,
    mut mapping: ResMut<NodeEntityMapping>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut drawn: Query<(&mut Transform, &mut Visibility), With<SceneNode>>,
) {
    let Some(scene) = scene else {
        return;
    };

    for (id, node) in scene.0.graphics().nodes() {
        let transform = convert::transform(&node.transform, &node.scale);
        let visibility = if node.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        if let Some(&entity) = mapping.0.get(&id) {
            if let Ok((mut current, mut shown)) = drawn.get_mut(entity) {
                *current = transform;
                *shown = visibility;
            }
            continue;
        }

        let entity = commands
            .spawn((
                Name::new(node.name.clone()),
                SceneNode(id),
                Mesh3d(meshes.add(stand_in_mesh(&node.mesh))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: convert::color(node.color),
                    perceptual_roughness: 1.0,
                    metallic: 0.0,
                    ..default()
                })),
                transform,
                visibility,
            ))
            .id();
        mapping.0.insert(id, entity);
    }
}

/// Primitive drawn in place of each mesh source. Cubes span [-1, 1] so the node
/// scale equals the collision half extents.
fn stand_in_mesh(source: &sim::MeshSource) -> Mesh {
    match source {
        sim::MeshSource::Cube => Cuboid::new(2.0, 2.0, 2.0).into(),
        sim::MeshSource::Model(path) => match model_stem(path) {
            Some("sphere") => Sphere::new(1.0).mesh().uv(24, 16),
            // Same footprint as the key's sensor volume.
            Some("key") => Cuboid::new(0.5, 2.0, 4.0).into(),
            _ => {
                warn!("no stand-in for model {}", path.display());
                Cuboid::new(2.0, 2.0, 2.0).into()
            }
        },
    }
}

fn model_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}
