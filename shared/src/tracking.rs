//! Contract of the spatial-tracking subsystem (ARCore/ARKit style).
//!
//! Image tracking and anchor hosting are opaque capabilities; this crate only consumes their
//! outcomes.

use std::fmt;

use crate::{
    error::{ResolveError, TrackError},
    pending::Pending,
    pose::ResolvedPose,
};

/// Capability a tracking session must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackingFeature {
    /// A `local` reference space anchored at session start.
    LocalSpace,
    /// Hosting and resolving cloud anchors.
    Anchors,
    /// Detection of registered marker images.
    ImageTracking,
}

/// Features the shared viewer needs from every session.
pub const REQUIRED_FEATURES: [TrackingFeature; 3] = [
    TrackingFeature::LocalSpace,
    TrackingFeature::Anchors,
    TrackingFeature::ImageTracking,
];

/// Identifier of a registered marker image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub String);

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A marker image to register when the session starts.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerImage {
    pub id: TargetId,
    /// Physical width used to estimate distance (meters).
    pub width_m: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Tracked,
    /// Known but currently not visible, or only extrapolated.
    Untracked,
}

/// One per-frame observation for a registered target.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingResult {
    pub target: TargetId,
    pub state: TrackingState,
}

/// Opaque handle to a running tracking session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHandle(pub u64);

/// An anchor freshly hosted from the admin's session.
#[derive(Clone, Debug, PartialEq)]
pub struct HostedAnchor {
    pub id: String,
    /// Where the anchor was hosted, in the admin's local frame.
    pub pose: ResolvedPose,
}

pub trait TrackingSubsystem: Send + Sync {
    /// Starts a session providing every feature in `required` and tracking `markers`.
    fn begin_session(
        &self,
        required: &[TrackingFeature],
        markers: &[MarkerImage],
    ) -> Pending<Result<SessionHandle, TrackError>>;

    /// Observations for the current frame.
    fn tracking_results(&self) -> Vec<TrackingResult>;

    /// Converts a hosted anchor id into its pose in this session's local frame.
    fn resolve_anchor(&self, anchor_id: &str) -> Pending<Result<ResolvedPose, ResolveError>>;

    /// Hosts a new shareable anchor from `session`.
    fn create_anchor(&self, session: &SessionHandle) -> Pending<Result<HostedAnchor, TrackError>>;
}
