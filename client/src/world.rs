use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(AmbientLight {
        color: Color::srgb(0.73, 0.73, 1.0),
        brightness: 400.0,
        ..default()
    });
    app.add_systems(Startup, setup);
}

fn setup(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
