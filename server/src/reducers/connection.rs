//! Connection lifecycle reducers.
//!
//! Participants need no per-connection state: viewers only subscribe to the public tables, and
//! admin capability is keyed by identity. These reducers only log the lifecycle.

use crate::schema::*;
use spacetimedb::ReducerContext;

#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    let role = if ctx.db.admin().identity().find(ctx.sender).is_some() {
        "admin"
    } else {
        "viewer"
    };
    log::info!("Client connected: {:?} ({role})", ctx.sender);
}

#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
}
