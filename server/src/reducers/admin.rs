//! Server-side half of the role gate.
//!
//! Clients check their own role before writing, but only this table decides. The database owner
//! is seeded at `init`; further admins are granted by an existing admin.

use crate::schema::*;
use spacetimedb::{Identity, ReducerContext, Table};

/// Fails unless the caller is in the `admin` table.
pub(crate) fn require_admin(ctx: &ReducerContext) -> Result<(), String> {
    if ctx.db.admin().identity().find(ctx.sender).is_some() {
        Ok(())
    } else {
        log::warn!("Rejected write from non-admin {:?}", ctx.sender);
        Err("write requires admin capability".into())
    }
}

pub(crate) fn seed_owner(ctx: &ReducerContext) {
    if ctx.db.admin().identity().find(ctx.sender).is_none() {
        ctx.db.admin().insert(Admin {
            identity: ctx.sender,
            granted_by: ctx.sender,
            granted_at: ctx.timestamp,
        });
        log::info!("Seeded database owner {:?} as admin", ctx.sender);
    }
}

/// Grants admin capability to `identity`. Idempotent.
#[spacetimedb::reducer]
pub fn grant_admin(ctx: &ReducerContext, identity: Identity) -> Result<(), String> {
    require_admin(ctx)?;

    if ctx.db.admin().identity().find(identity).is_some() {
        return Ok(());
    }
    ctx.db.admin().insert(Admin {
        identity,
        granted_by: ctx.sender,
        granted_at: ctx.timestamp,
    });
    log::info!("{:?} granted admin to {:?}", ctx.sender, identity);
    Ok(())
}
