//! Drives the shared session from Bevy's frame loop.
//!
//! [`SyncSession`] owns the scene registry and polls its own completions, so it lives in a
//! non-send resource and every system touching it runs on the main thread.

use std::sync::Arc;

use anchor_sync::{AuthState, MemoryStore, RemoteStore, RoleGate, SessionNotice, SyncSession};
use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::{
    catalog::gallery_catalog,
    config::ViewerConfig,
    input::InputAction,
    server,
    tracking::{SimulatedTracker, Tracker},
};

/// Name recorded for a sign-in made with the configured credential.
const ADMIN_USER: &str = "admin";

/// Auth state shared with the session's role gate.
#[derive(Resource, Clone)]
pub struct Auth(pub Arc<RoleGate>);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionUpdate;

pub(super) fn plugin(app: &mut App) {
    let config = ViewerConfig::from_cli_env();
    let tracker = Arc::new(SimulatedTracker::default());
    let role = Arc::new(RoleGate::new());
    let session = SyncSession::new(
        config.sync_config(),
        &gallery_catalog(),
        remote_store(&config),
        tracker.clone(),
        role.clone(),
    );

    if config.admin_token.is_some() {
        info!("Admin credential provided; press L to sign in.");
    }

    app.insert_resource(config)
        .insert_resource(Tracker(tracker))
        .insert_resource(Auth(role))
        .insert_non_send_resource(session);

    app.add_systems(
        Update,
        (handle_actions, drive_session, report_notices)
            .chain()
            .in_set(SessionUpdate),
    );
}

/// The module's store when a server is configured, otherwise an in-process one that only this
/// viewer sees.
fn remote_store(config: &ViewerConfig) -> Arc<dyn RemoteStore> {
    let Some(remote) = &config.server else {
        info!("No server configured; the gallery is shared with this viewer only.");
        return Arc::new(MemoryStore::new());
    };
    match server::connect(remote) {
        Ok(store) => store,
        Err(err) => {
            error!("Falling back to an offline store: {err}");
            Arc::new(MemoryStore::new())
        }
    }
}

fn handle_actions(
    actions: Res<ActionState<InputAction>>,
    config: Res<ViewerConfig>,
    auth: Res<Auth>,
    tracker: Res<Tracker>,
    time: Res<Time>,
    mut session: NonSendMut<SyncSession>,
) {
    let now = time.elapsed();

    if actions.just_pressed(&InputAction::BeginSession) {
        session.begin(now);
    }

    if actions.just_pressed(&InputAction::SignIn) {
        match &config.admin_token {
            Some(_) => auth.0.on_auth_state_changed(AuthState::SignedIn {
                user: ADMIN_USER.to_string(),
            }),
            None => warn!("Sign-in failed: no admin credential configured."),
        }
    }

    if actions.just_pressed(&InputAction::ToggleMarker) {
        let visible = tracker.0.toggle_marker();
        info!("Simulated marker {}", if visible { "shown" } else { "hidden" });
    }

    // Clicks from viewers are not publish gestures.
    if actions.just_pressed(&InputAction::Publish) && auth.0.is_admin() {
        if let Err(err) = session.publish_arrangement(now) {
            warn!("Publish refused: {err}");
        }
    }
}

fn drive_session(time: Res<Time>, mut session: NonSendMut<SyncSession>) {
    session.update(time.elapsed(), time.delta());
}

fn report_notices(mut session: NonSendMut<SyncSession>) {
    for notice in session.drain_notices() {
        match notice {
            SessionNotice::SessionStarted => info!("Shared session started. Look for the marker."),
            SessionNotice::SessionFailed(err) => error!("Shared session unavailable: {err}"),
            SessionNotice::AnchorResolved { anchor_id, placed } => {
                info!("Gallery anchored to {anchor_id}: {placed} objects placed.")
            }
            SessionNotice::ResolveFailed(failure) => {
                warn!("Could not place the gallery yet: {failure}")
            }
            SessionNotice::Published { anchor_id } => info!("Gallery published as {anchor_id}."),
            SessionNotice::PublishFailed(failure) => error!("Gallery not published: {failure}"),
        }
    }
}
