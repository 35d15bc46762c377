use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
}

/// Eye height of a standing visitor; stands in for the device pose.
const VIEWER_EYE: Vec3 = Vec3::new(0.0, 1.6, 3.0);

fn add_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        // Transparent clear color so the passthrough feed shows behind the gallery.
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Transform::from_translation(VIEWER_EYE).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
}
