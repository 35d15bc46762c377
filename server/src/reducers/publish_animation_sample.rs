use crate::{reducers::admin::require_admin, schema::*};
use anchor_sync::constants::KEY_SEPARATOR;
use spacetimedb::{ReducerContext, Table};

/// Overwrite the latest playback time of one object.
///
/// Admin only. Each object is written independently; there is no ordering across objects.
#[spacetimedb::reducer]
pub fn publish_animation_sample(
    ctx: &ReducerContext,
    object_id: String,
    time: f32,
) -> Result<(), String> {
    require_admin(ctx)?;

    if object_id.is_empty() || object_id.contains(KEY_SEPARATOR) {
        return Err(format!("invalid object id {object_id:?}"));
    }
    if !time.is_finite() || time < 0.0 {
        return Err(format!("invalid playback time {time}"));
    }

    let row = AnimationState {
        object_id,
        time,
        updated_at: ctx.timestamp,
    };
    if ctx.db.animation_state().object_id().find(&row.object_id).is_some() {
        ctx.db.animation_state().object_id().update(row);
    } else {
        ctx.db.animation_state().insert(row);
    }
    Ok(())
}
