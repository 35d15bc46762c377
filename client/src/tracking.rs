//! Desktop stand-in for the device's AR tracking subsystem.
//!
//! Every capability is reported as supported, the marker is "seen" while toggled on, and every
//! anchor resolves at the local origin. Hosting hands out sequential anchor ids.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use anchor_sync::{
    HostedAnchor, MarkerImage, Pending, ResolveError, ResolvedPose, SessionHandle, TargetId,
    TrackError, TrackingFeature, TrackingResult, TrackingState, TrackingSubsystem,
};
use bevy::prelude::*;

#[derive(Debug, Default)]
pub struct SimulatedTracker {
    marker: std::sync::OnceLock<TargetId>,
    marker_visible: AtomicBool,
    next_anchor: AtomicU64,
}

impl SimulatedTracker {
    /// Returns the new visibility.
    pub fn toggle_marker(&self) -> bool {
        !self.marker_visible.fetch_xor(true, Ordering::Relaxed)
    }
}

impl TrackingSubsystem for SimulatedTracker {
    fn begin_session(
        &self,
        required: &[TrackingFeature],
        markers: &[MarkerImage],
    ) -> Pending<Result<SessionHandle, TrackError>> {
        debug!("Simulated session with features {required:?}");
        let Some(marker) = markers.first() else {
            return Pending::ready(Err(TrackError::Unsupported(
                "image tracking needs a marker image".into(),
            )));
        };
        // Only one session per process.
        let _ = self.marker.set(marker.id.clone());
        Pending::ready(Ok(SessionHandle(1)))
    }

    fn tracking_results(&self) -> Vec<TrackingResult> {
        let Some(target) = self.marker.get() else {
            return Vec::new();
        };
        let state = if self.marker_visible.load(Ordering::Relaxed) {
            TrackingState::Tracked
        } else {
            TrackingState::Untracked
        };
        vec![TrackingResult {
            target: target.clone(),
            state,
        }]
    }

    fn resolve_anchor(&self, anchor_id: &str) -> Pending<Result<ResolvedPose, ResolveError>> {
        if anchor_id.is_empty() {
            return Pending::ready(Err(ResolveError::Unknown(anchor_id.to_string())));
        }
        Pending::ready(Ok(ResolvedPose::identity()))
    }

    fn create_anchor(&self, _session: &SessionHandle) -> Pending<Result<HostedAnchor, TrackError>> {
        let n = self.next_anchor.fetch_add(1, Ordering::Relaxed) + 1;
        Pending::ready(Ok(HostedAnchor {
            id: format!("anchor-{n}"),
            pose: ResolvedPose::identity(),
        }))
    }
}

/// Handle to the tracker shared with the session, for the marker toggle.
#[derive(Resource, Clone)]
pub struct Tracker(pub Arc<SimulatedTracker>);
