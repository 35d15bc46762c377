use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Start the shared AR session.
    BeginSession,
    /// Sign in with the configured admin credential.
    SignIn,
    /// Admin publish gesture.
    Publish,
    /// Show or hide the simulated marker image.
    ToggleMarker,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::BeginSession, KeyCode::Enter);
    input_map.insert(InputAction::SignIn, KeyCode::KeyL);
    input_map.insert(InputAction::Publish, MouseButton::Left);
    input_map.insert(InputAction::ToggleMarker, KeyCode::KeyM);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
