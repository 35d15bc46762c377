use std::collections::BTreeSet;

use crate::{reducers::admin::require_admin, schema::*, types::DbPlacement};
use anchor_sync::Placement;
use spacetimedb::{ReducerContext, Table};

/// Replace the published arrangement.
///
/// Behavior:
/// - Admin only.
/// - Rejects an empty anchor id, duplicate object ids and any placement that violates the
///   placement invariants (unit rotation within tolerance, strictly positive finite scale).
/// - Overwrites the single `cloud_anchor` row. No merge with the previous arrangement.
#[spacetimedb::reducer]
pub fn publish_placement(
    ctx: &ReducerContext,
    anchor_id: String,
    models: Vec<DbPlacement>,
) -> Result<(), String> {
    require_admin(ctx)?;
    validate_arrangement(&anchor_id, &models)?;

    let row = CloudAnchor {
        id: CLOUD_ANCHOR_ROW,
        anchor_id,
        models,
        published_by: ctx.sender,
        published_at: ctx.timestamp,
    };
    log::info!(
        "Publishing anchor {} with {} placements",
        row.anchor_id,
        row.models.len()
    );
    if ctx.db.cloud_anchor().id().find(CLOUD_ANCHOR_ROW).is_some() {
        ctx.db.cloud_anchor().id().update(row);
    } else {
        ctx.db.cloud_anchor().insert(row);
    }
    Ok(())
}

fn validate_arrangement(anchor_id: &str, models: &[DbPlacement]) -> Result<(), String> {
    if anchor_id.trim().is_empty() {
        return Err("anchor id must not be empty".into());
    }
    let mut seen = BTreeSet::new();
    for model in models {
        if model.object_id.is_empty() {
            return Err("object id must not be empty".into());
        }
        if !seen.insert(model.object_id.as_str()) {
            return Err(format!("object {} placed twice", model.object_id));
        }
        Placement::try_from(model).map_err(|e| format!("object {}: {e}", model.object_id))?;
    }
    Ok(())
}
