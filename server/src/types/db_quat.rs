use anchor_sync::QuatRecord;

/// A quaternion (w + xi + yj + zk), stored as four `f32` scalars in `(x, y, z, w)` order.
///
/// Not normalized by the type; [`DbPlacement`](super::DbPlacement) validation checks the norm.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbQuat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl DbQuat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for DbQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<nalgebra::UnitQuaternion<f32>> for DbQuat {
    fn from(uq: nalgebra::UnitQuaternion<f32>) -> Self {
        let q = uq.into_inner();
        DbQuat {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}

impl From<DbQuat> for QuatRecord {
    fn from(q: DbQuat) -> Self {
        QuatRecord {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}
