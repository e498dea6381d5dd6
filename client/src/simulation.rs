//! Drives the simulation scene once per rendered frame.

use bevy::prelude::*;
use bevy::window::{WindowCloseRequested, WindowResized};
use leafwing_input_manager::prelude::*;
use tank_sim as sim;

use crate::input::InputAction;

/// The simulation scene, built once at startup.
#[derive(Resource)]
pub struct SimScene(pub sim::Scene);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, build_scene);
    app.add_systems(Update, run_frame);
}

pub(crate) fn build_scene(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    match sim::Scene::from_level(&sim::reference_level()) {
        Ok(scene) => {
            commands.insert_resource(SimScene(scene));
        }
        Err(err) => {
            error!("failed to build level: {err}");
            exit.write(AppExit::error());
        }
    }
}

pub(crate) fn run_frame(
    scene: Option<ResMut<SimScene>>,
    actions: Res<ActionState<InputAction>>,
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut resizes: MessageReader<WindowResized>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(mut scene) = scene else {
        return;
    };

    let mut events = Vec::new();
    if close_requests.read().count() > 0 {
        events.push(sim::InputEvent::Close);
    }
    for resize in resizes.read() {
        events.push(sim::InputEvent::Resized {
            width: resize.width as u32,
            height: resize.height as u32,
        });
    }
    if actions.just_pressed(&InputAction::Fire) {
        events.push(sim::InputEvent::FirePressed);
    }

    let input = sim::FrameInput {
        events,
        held: sim::HeldControls {
            forward: actions.pressed(&InputAction::Forward),
            backward: actions.pressed(&InputAction::Backward),
            turn_left: actions.pressed(&InputAction::TurnLeft),
            turn_right: actions.pressed(&InputAction::TurnRight),
        },
    };

    let outcome = scene.0.frame(&input);
    if !outcome.running {
        info!("leaving after {} frames", outcome.frame);
        scene.0.shutdown();
        exit.write(AppExit::Success);
    }
}
