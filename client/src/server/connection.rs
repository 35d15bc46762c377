use std::sync::Arc;

use anchor_sync::{
    AnimationSample, CLOUD_ANCHOR_KEY, ObjectId, PlacementSet, QuatRecord, Vec3Record,
};
use bevy::prelude::*;
use serde_json::{Map, Value, json};
use spacetimedb_sdk::{DbContext, Identity, Status, Table, TableWithPrimaryKey};

use super::{
    ServerConfig,
    store::{ReducerLink, ServerState, ServerStore},
};
use crate::module_bindings::{
    AnimationState, AnimationStateTableAccess, CloudAnchor, CloudAnchorTableAccess,
    DbConnection, DbPlacement, DbQuat, DbVec3, ErrorContext, grant_admin,
    publish_animation_sample, publish_placement,
};

/// Opens the connection and starts processing its messages on a background thread.
pub fn connect(config: &ServerConfig) -> Result<Arc<ServerStore>, String> {
    let state = ServerState::default();

    let builder = DbConnection::builder()
        .with_uri(config.uri.as_str())
        .with_module_name(config.module.as_str())
        .with_token(config.token.clone());
    if config.token.is_some() {
        info!("Using JWT from CLI/ENV for SpacetimeDB connection.");
    } else {
        warn!("No JWT provided via CLI/ENV; identity will be ephemeral for this run.");
    }

    let grant = config.grant_admin.clone();
    let on_connect_state = state.clone();
    let on_error_state = state.clone();
    let on_disconnect_state = state.clone();
    let conn = builder
        .on_connect(move |conn, identity, _token| {
            info!("SpacetimeDB module connected: {identity}");
            let applied = on_connect_state.clone();
            conn.subscription_builder()
                .on_applied(move |_| applied.subscription_applied())
                .on_error(|_, err| error!("Subscription failed: {err}"))
                .subscribe(vec![
                    "SELECT * FROM cloud_anchor",
                    "SELECT * FROM animation_state",
                ]);
            if let Some(hex) = &grant {
                request_grant(conn, hex);
            }
        })
        .on_connect_error(move |_: &ErrorContext, err| {
            on_error_state.connection_lost(&err.to_string());
        })
        .on_disconnect(move |_: &ErrorContext, err| {
            let reason = err.map_or_else(|| "disconnected".to_owned(), |e| e.to_string());
            on_disconnect_state.connection_lost(&reason);
        })
        .build()
        .map_err(|err| format!("could not connect to {}: {err}", config.uri))?;

    register_rows(&conn, &state);
    register_outcomes(&conn, &state);
    conn.run_threaded();

    Ok(Arc::new(ServerStore::new(state, Arc::new(conn))))
}

fn request_grant(conn: &DbConnection, hex: &str) {
    match Identity::from_hex(hex) {
        Ok(identity) => {
            if let Err(err) = conn.reducers.grant_admin(identity) {
                warn!("Could not request admin grant: {err}");
            }
        }
        Err(err) => warn!("Ignoring --grant-admin {hex}: {err}"),
    }
}

fn register_rows(conn: &DbConnection, state: &ServerState) {
    let s = state.clone();
    conn.db
        .cloud_anchor()
        .on_insert(move |_, row| s.row_changed(CLOUD_ANCHOR_KEY, anchor_value(row)));
    let s = state.clone();
    conn.db
        .cloud_anchor()
        .on_update(move |_, _, row| s.row_changed(CLOUD_ANCHOR_KEY, anchor_value(row)));

    let s = state.clone();
    conn.db
        .animation_state()
        .on_insert(move |_, row| sample_changed(&s, row));
    let s = state.clone();
    conn.db
        .animation_state()
        .on_update(move |_, _, row| sample_changed(&s, row));
}

fn register_outcomes(conn: &DbConnection, state: &ServerState) {
    let s = state.clone();
    conn.reducers
        .on_publish_placement(move |ctx, anchor_id, _| {
            let outcome = outcome(&ctx.event.status);
            if let Err(reason) = &outcome {
                warn!("Placement for anchor {anchor_id} rejected: {reason}");
            }
            s.placement_acked(outcome);
        });
    let s = state.clone();
    conn.reducers
        .on_publish_animation_sample(move |ctx, object_id, _| {
            s.sample_acked(&ObjectId::new(object_id.as_str()), outcome(&ctx.event.status));
        });
    conn.reducers.on_grant_admin(|ctx, identity| match &ctx.event.status {
        Status::Committed => info!("Granted admin to {identity}"),
        status => warn!("Admin grant for {identity} failed: {:?}", outcome(status)),
    });
}

fn outcome(status: &Status) -> Result<(), String> {
    match status {
        Status::Committed => Ok(()),
        Status::Failed(reason) => Err(reason.to_string()),
        _ => Err("reducer ran out of energy".into()),
    }
}

fn sample_changed(state: &ServerState, row: &AnimationState) {
    let sample = AnimationSample::new(row.object_id.as_str(), row.time);
    match sample.to_value() {
        Ok(value) => state.row_changed(&sample.key(), value),
        Err(err) => warn!("Dropping animation row for {}: {err}", row.object_id),
    }
}

/// The `cloudAnchor` record a row stands for.
fn anchor_value(row: &CloudAnchor) -> Value {
    let models: Map<String, Value> = row
        .models
        .iter()
        .map(|p| {
            let record = json!({
                "position": Vec3Record { x: p.position.x, y: p.position.y, z: p.position.z },
                "rotation": QuatRecord {
                    x: p.rotation.x,
                    y: p.rotation.y,
                    z: p.rotation.z,
                    w: p.rotation.w,
                },
                "scale": Vec3Record { x: p.scale.x, y: p.scale.y, z: p.scale.z },
                "url": p.url,
            });
            (p.object_id.clone(), record)
        })
        .collect();
    json!({ "id": row.anchor_id, "models": models })
}

fn db_placements(set: &PlacementSet) -> Vec<DbPlacement> {
    set.objects
        .iter()
        .map(|(id, placement)| {
            let position = Vec3Record::from(*placement.position());
            let rotation = QuatRecord::from(*placement.rotation());
            let scale = Vec3Record::from(*placement.scale());
            DbPlacement {
                object_id: id.to_string(),
                position: DbVec3 {
                    x: position.x,
                    y: position.y,
                    z: position.z,
                },
                rotation: DbQuat {
                    x: rotation.x,
                    y: rotation.y,
                    z: rotation.z,
                    w: rotation.w,
                },
                scale: DbVec3 {
                    x: scale.x,
                    y: scale.y,
                    z: scale.z,
                },
                url: placement.source_ref().to_owned(),
            }
        })
        .collect()
}

impl ReducerLink for DbConnection {
    fn publish_placement(&self, set: &PlacementSet) -> Result<(), String> {
        self.reducers
            .publish_placement(set.anchor_id.clone(), db_placements(set))
            .map_err(|err| err.to_string())
    }

    fn publish_animation_sample(&self, sample: &AnimationSample) -> Result<(), String> {
        self.reducers
            .publish_animation_sample(sample.object_id.to_string(), sample.time)
            .map_err(|err| err.to_string())
    }
}
