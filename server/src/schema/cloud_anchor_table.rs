use spacetimedb::*;

use crate::types::DbPlacement;

/// The published arrangement (`cloudAnchor`).
///
/// Single-row table (`id = 1`). Every publish replaces the whole row, so subscribers never see a
/// partial arrangement and the last publish wins.
#[table(name = cloud_anchor, public)]
pub struct CloudAnchor {
    /// Unique id (primary key). Always `1`.
    #[primary_key]
    pub id: u32,

    /// Hosted anchor id the placements are relative to.
    pub anchor_id: String,

    /// One entry per placed object; object ids are unique.
    pub models: Vec<DbPlacement>,

    pub published_by: Identity,
    pub published_at: Timestamp,
}

pub const CLOUD_ANCHOR_ROW: u32 = 1;
