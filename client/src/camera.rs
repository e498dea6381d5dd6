use bevy::prelude::*;
use tank_sim as sim;

use crate::convert;
use crate::simulation::{SimScene, build_scene, run_frame};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera_and_light.after(build_scene));
    app.add_systems(Update, sync_projection.after(run_frame));
}

/// Fixed overhead camera and a single point light, as configured by the scene graph.
fn add_camera_and_light(mut commands: Commands, scene: Option<Res<SimScene>>) {
    let (camera, light, clear) = match scene {
        Some(scene) => {
            let graph = scene.0.graphics();
            (graph.camera, graph.light, graph.clear_color)
        }
        None => {
            let graph = sim::SceneGraph::default();
            (graph.camera, graph.light, graph.clear_color)
        }
    };

    commands.insert_resource(ClearColor(convert::color(clear)));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective(&camera)),
        Transform::from_translation(convert::vec3(&camera.translation))
            .with_rotation(Quat::from_rotation_x(camera.pitch)),
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(convert::vec3(&light.position)),
    ));
}

fn perspective(camera: &sim::CameraConfig) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: camera.fov_degrees.to_radians(),
        near: camera.near,
        far: camera.far,
        aspect_ratio: camera.aspect,
        ..default()
    }
}

/// Copies the scene graph's camera (aspect updated on resize) into the bevy projection.
fn sync_projection(scene: Option<Res<SimScene>>, mut projections: Query<&mut Projection, With<Camera3d>>) {
    let Some(scene) = scene else {
        return;
    };
    let wanted = perspective(&scene.0.graphics().camera);
    for mut projection in &mut projections {
        let up_to_date = match projection.as_ref() {
            Projection::Perspective(current) => same_frustum(current, &wanted),
            _ => false,
        };
        if !up_to_date {
            *projection = Projection::Perspective(wanted.clone());
        }
    }
}

fn same_frustum(a: &PerspectiveProjection, b: &PerspectiveProjection) -> bool {
    a.fov == b.fov && a.near == b.near && a.far == b.far && a.aspect_ratio == b.aspect_ratio
}
