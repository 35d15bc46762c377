//! Diagnostics and a session status overlay for native dev builds.
//!
//! Gated behind `dev_native` in `main.rs`.

use anchor_sync::SyncSession;
use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin,
};
use bevy::prelude::*;

use crate::sync::SessionUpdate;

#[derive(Component)]
struct SessionStatusText;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        LogDiagnosticsPlugin::default(),
    ));

    app.add_systems(Startup, spawn_status_text);
    app.add_systems(Update, update_status_text.after(SessionUpdate));
}

fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        SessionStatusText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn update_status_text(
    mut text: Single<&mut Text, With<SessionStatusText>>,
    session: NonSend<SyncSession>,
) {
    let tracks: Vec<String> = session
        .scene()
        .active_tracks()
        .map(|(id, time)| format!("{id} {time:.1}s"))
        .collect();
    text.0 = format!(
        "session: {:?}\nrole: {:?}\nresolver: {:?}\ntracks: {}",
        session.state(),
        session.role(),
        session.resolver_phase(),
        tracks.join(", ")
    );
}
