//! Placement data model: where each shared object sits relative to the hosted anchor.
//!
//! The JSON shape matches what deployed stores already hold under `cloudAnchor`:
//! `{ "id": <anchor id>, "models": { <object id>: { position, rotation, scale, url } } }`.
//! Records are validated while decoding, so a [`Placement`] in memory always satisfies the
//! unit-rotation and positive-scale invariants.

use std::collections::BTreeMap;
use std::fmt;

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::ROTATION_NORM_EPS,
    error::{PlacementError, ReadError, WriteError},
    pose::{ResolvedPose, WorldTransform},
};

/// Identifier of a shared object. The set of ids is fixed by the object catalog.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 3D vector as stored in the remote store (`{x, y, z}`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Vec3Record {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3<f32>> for Vec3Record {
    fn from(v: Vector3<f32>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3Record> for Vector3<f32> {
    fn from(v: Vec3Record) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// A quaternion as stored in the remote store, `(x, y, z, w)` order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct QuatRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl From<UnitQuaternion<f32>> for QuatRecord {
    fn from(uq: UnitQuaternion<f32>) -> Self {
        let q = uq.into_inner();
        Self {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}

impl TryFrom<QuatRecord> for UnitQuaternion<f32> {
    type Error = PlacementError;

    /// Accepts quaternions whose norm is within [`ROTATION_NORM_EPS`] of 1 and renormalizes
    /// away the remaining drift.
    fn try_from(q: QuatRecord) -> Result<Self, Self::Error> {
        let raw = Quaternion::new(q.w, q.x, q.y, q.z);
        if !raw.coords.iter().all(|c| c.is_finite()) {
            return Err(PlacementError::NonFinite("rotation"));
        }
        let norm = raw.norm();
        if (norm - 1.0).abs() > ROTATION_NORM_EPS {
            return Err(PlacementError::NonUnitRotation(norm));
        }
        Ok(UnitQuaternion::new_normalize(raw))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct PlacementRecord {
    position: Vec3Record,
    rotation: QuatRecord,
    scale: Vec3Record,
    url: String,
}

/// An object's transform relative to the anchor, plus the asset it renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlacementRecord", into = "PlacementRecord")]
pub struct Placement {
    position: Vector3<f32>,
    rotation: UnitQuaternion<f32>,
    scale: Vector3<f32>,
    source_ref: String,
}

impl Placement {
    pub fn new(
        position: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
        scale: Vector3<f32>,
        source_ref: impl Into<String>,
    ) -> Result<Self, PlacementError> {
        if !position.iter().all(|c| c.is_finite()) {
            return Err(PlacementError::NonFinite("position"));
        }
        if !rotation.coords.iter().all(|c| c.is_finite()) {
            return Err(PlacementError::NonFinite("rotation"));
        }
        if let Some(bad) = scale.iter().copied().find(|c| !c.is_finite() || *c <= 0.0) {
            return Err(if bad.is_finite() {
                PlacementError::NonPositiveScale(bad)
            } else {
                PlacementError::NonFinite("scale")
            });
        }
        Ok(Self {
            position,
            rotation,
            scale,
            source_ref: source_ref.into(),
        })
    }

    pub fn position(&self) -> &Vector3<f32> {
        &self.position
    }

    pub fn rotation(&self) -> &UnitQuaternion<f32> {
        &self.rotation
    }

    pub fn scale(&self) -> &Vector3<f32> {
        &self.scale
    }

    /// The asset this object renders. Fixed once the object has been placed.
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }
}

impl TryFrom<PlacementRecord> for Placement {
    type Error = PlacementError;

    fn try_from(r: PlacementRecord) -> Result<Self, Self::Error> {
        Placement::new(
            r.position.into(),
            r.rotation.try_into()?,
            r.scale.into(),
            r.url,
        )
    }
}

impl From<Placement> for PlacementRecord {
    fn from(p: Placement) -> Self {
        Self {
            position: p.position.into(),
            rotation: p.rotation.into(),
            scale: p.scale.into(),
            url: p.source_ref,
        }
    }
}

/// The authoritative arrangement: one hosted anchor and every object's placement relative to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementSet {
    #[serde(rename = "id")]
    pub anchor_id: String,
    #[serde(rename = "models", default)]
    pub objects: BTreeMap<ObjectId, Placement>,
}

impl PlacementSet {
    pub fn new(anchor_id: impl Into<String>) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            objects: BTreeMap::new(),
        }
    }

    pub fn with_object(mut self, id: impl Into<ObjectId>, placement: Placement) -> Self {
        self.objects.insert(id.into(), placement);
        self
    }

    /// Decodes the value stored under `cloudAnchor`.
    ///
    /// A JSON `null` is how an absent key reads back, so it maps to [`ReadError::NotFound`].
    pub fn from_value(value: Value) -> Result<Self, ReadError> {
        if value.is_null() {
            return Err(ReadError::NotFound);
        }
        let set: PlacementSet =
            serde_json::from_value(value).map_err(|e| ReadError::Malformed(e.to_string()))?;
        if set.anchor_id.trim().is_empty() {
            return Err(ReadError::Malformed("empty anchor id".into()));
        }
        Ok(set)
    }

    pub fn to_value(&self) -> Result<Value, WriteError> {
        if self.anchor_id.trim().is_empty() {
            return Err(WriteError::Encode("empty anchor id".into()));
        }
        serde_json::to_value(self).map_err(|e| WriteError::Encode(e.to_string()))
    }
}

/// Computes the world transform of every known object that the set places.
///
/// Known objects missing from the set are left out; they keep their hidden default state.
/// The result only depends on the arguments, so resolving twice yields identical transforms.
pub fn resolve_world_transforms<'a>(
    set: &PlacementSet,
    pose: &ResolvedPose,
    known: impl IntoIterator<Item = &'a ObjectId>,
) -> BTreeMap<ObjectId, WorldTransform> {
    known
        .into_iter()
        .filter_map(|id| {
            set.objects
                .get(id)
                .map(|placement| (id.clone(), pose.place(placement)))
        })
        .collect()
}
