use anchor_sync::{Placement, PlacementError};
use nalgebra::UnitQuaternion;

use super::{DbQuat, DbVec3};

/// One object's anchor-relative transform and asset URL, as stored in `cloud_anchor.models`.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, PartialEq)]
pub struct DbPlacement {
    pub object_id: String,
    pub position: DbVec3,
    pub rotation: DbQuat,
    pub scale: DbVec3,
    pub url: String,
}

impl TryFrom<&DbPlacement> for Placement {
    type Error = PlacementError;

    /// Applies the same invariants the clients check when decoding the arrangement.
    fn try_from(p: &DbPlacement) -> Result<Self, Self::Error> {
        let rotation = UnitQuaternion::try_from(anchor_sync::QuatRecord::from(p.rotation))?;
        Placement::new(p.position.into(), rotation, p.scale.into(), p.url.clone())
    }
}
