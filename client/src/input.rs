use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Fire,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::Forward, KeyCode::KeyW);
    input_map.insert(InputAction::Backward, KeyCode::KeyS);
    input_map.insert(InputAction::TurnLeft, KeyCode::KeyA);
    input_map.insert(InputAction::TurnRight, KeyCode::KeyD);
    input_map.insert(InputAction::Fire, KeyCode::Space);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
