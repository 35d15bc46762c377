//! Anchor Resolver: turns a marker sighting into world transforms for the published arrangement.
//!
//! ```text
//! Idle -> AwaitingTrigger -> Fetching -> Locating -> Resolved
//!               ^               |           |
//!               +---- failed ---+-----------+
//! ```
//!
//! `Fetching` and `Locating` are both reported as [`ResolverPhase::Resolving`]. Resolution is
//! permanent for the session.

use std::{collections::BTreeMap, time::Duration};

use crate::{
    constants::{FETCH_TIMEOUT, RESOLVE_TIMEOUT},
    error::{ReadError, ResolveError, ResolveFailure},
    pending::{Pending, Poll},
    placement::{ObjectId, PlacementSet, resolve_world_transforms},
    pose::{ResolvedPose, WorldTransform},
    registry::AnchorRegistry,
    scene::SceneRegistry,
    tracking::{TargetId, TrackingResult, TrackingState, TrackingSubsystem},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverPhase {
    Idle,
    AwaitingTrigger,
    Resolving,
    Resolved,
}

/// Outcome of a finished resolution attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolverEvent {
    Resolved(Resolution),
    Failed(ResolveFailure),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub anchor_id: String,
    pub pose: ResolvedPose,
    /// World transforms applied to the scene, one per placed catalog object.
    pub transforms: BTreeMap<ObjectId, WorldTransform>,
}

enum Stage {
    Idle,
    AwaitingTrigger,
    Fetching {
        pending: Pending<Result<PlacementSet, ReadError>>,
        deadline: Duration,
    },
    Locating {
        set: PlacementSet,
        pending: Pending<Result<ResolvedPose, ResolveError>>,
        deadline: Duration,
    },
    Resolved,
}

/// What a single poll of the current stage decided.
enum Step {
    Stay,
    Next(Stage),
    Finish(ResolverEvent),
}

pub struct AnchorResolver {
    marker: TargetId,
    fetch_timeout: Duration,
    resolve_timeout: Duration,
    retry_cooldown: Duration,
    stage: Stage,
    retry_after: Option<Duration>,
    attempts: u32,
}

impl AnchorResolver {
    pub fn new(marker: TargetId) -> Self {
        Self {
            marker,
            fetch_timeout: FETCH_TIMEOUT,
            resolve_timeout: RESOLVE_TIMEOUT,
            retry_cooldown: Duration::ZERO,
            stage: Stage::Idle,
            retry_after: None,
            attempts: 0,
        }
    }

    pub fn with_timeouts(mut self, fetch: Duration, resolve: Duration) -> Self {
        self.fetch_timeout = fetch;
        self.resolve_timeout = resolve;
        self
    }

    /// Ignores triggers for `cooldown` after a failed attempt. Without one, the next trigger
    /// retries, which is every frame while the marker stays tracked.
    pub fn with_retry_cooldown(mut self, cooldown: Duration) -> Self {
        self.retry_cooldown = cooldown;
        self
    }

    pub fn phase(&self) -> ResolverPhase {
        match self.stage {
            Stage::Idle => ResolverPhase::Idle,
            Stage::AwaitingTrigger => ResolverPhase::AwaitingTrigger,
            Stage::Fetching { .. } | Stage::Locating { .. } => ResolverPhase::Resolving,
            Stage::Resolved => ResolverPhase::Resolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.stage, Stage::Resolved)
    }

    /// Resolution attempts started so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The tracking session is running; start listening for triggers.
    pub fn activate(&mut self) {
        if matches!(self.stage, Stage::Idle) {
            self.stage = Stage::AwaitingTrigger;
        }
    }

    fn is_trigger(&self, results: &[TrackingResult], now: Duration) -> bool {
        self.retry_after.is_none_or(|after| now >= after)
            && results
                .iter()
                .any(|r| r.target == self.marker && r.state == TrackingState::Tracked)
    }

    /// Drives the state machine for one frame.
    ///
    /// Completions that are already available chain within the same frame, so a fast store and
    /// tracker can resolve on the frame the marker is first seen.
    pub fn on_frame(
        &mut self,
        now: Duration,
        results: &[TrackingResult],
        registry: &AnchorRegistry,
        tracker: &dyn TrackingSubsystem,
        scene: &mut SceneRegistry,
    ) -> Option<ResolverEvent> {
        loop {
            let triggered =
                matches!(self.stage, Stage::AwaitingTrigger) && self.is_trigger(results, now);
            let step = match &mut self.stage {
                Stage::Idle | Stage::Resolved => Step::Stay,
                Stage::AwaitingTrigger => {
                    if triggered {
                        self.attempts += 1;
                        log::info!(
                            "marker {} tracked; resolving shared arrangement (attempt {})",
                            self.marker,
                            self.attempts
                        );
                        Step::Next(Stage::Fetching {
                            pending: registry.fetch(),
                            deadline: now + self.fetch_timeout,
                        })
                    } else {
                        Step::Stay
                    }
                }
                Stage::Fetching { pending, deadline } => match pending.poll() {
                    Poll::Ready(Ok(set)) => {
                        log::debug!("resolving anchor {}", set.anchor_id);
                        let pending = tracker.resolve_anchor(&set.anchor_id);
                        Step::Next(Stage::Locating {
                            set,
                            pending,
                            deadline: now + self.resolve_timeout,
                        })
                    }
                    Poll::Ready(Err(err)) => Step::Finish(ResolverEvent::Failed(err.into())),
                    Poll::Abandoned => Step::Finish(ResolverEvent::Failed(
                        ReadError::Unreachable("fetch dropped without a reply".into()).into(),
                    )),
                    Poll::Waiting if now >= *deadline => {
                        Step::Finish(ResolverEvent::Failed(ReadError::TimedOut.into()))
                    }
                    Poll::Waiting => Step::Stay,
                },
                Stage::Locating {
                    set,
                    pending,
                    deadline,
                } => match pending.poll() {
                    Poll::Ready(Ok(pose)) => {
                        let transforms = resolve_world_transforms(set, &pose, scene.ids());
                        Step::Finish(ResolverEvent::Resolved(Resolution {
                            anchor_id: set.anchor_id.clone(),
                            pose,
                            transforms,
                        }))
                    }
                    Poll::Ready(Err(err)) => Step::Finish(ResolverEvent::Failed(err.into())),
                    Poll::Abandoned => Step::Finish(ResolverEvent::Failed(
                        ResolveError::Unreachable("resolve dropped without a reply".into()).into(),
                    )),
                    Poll::Waiting if now >= *deadline => {
                        Step::Finish(ResolverEvent::Failed(ResolveError::TimedOut.into()))
                    }
                    Poll::Waiting => Step::Stay,
                },
            };

            match step {
                Step::Stay => return None,
                Step::Next(stage) => self.stage = stage,
                Step::Finish(event) => {
                    self.finish(now, &event, scene);
                    return Some(event);
                }
            }
        }
    }

    fn finish(&mut self, now: Duration, event: &ResolverEvent, scene: &mut SceneRegistry) {
        match event {
            ResolverEvent::Resolved(resolution) => {
                for (id, transform) in &resolution.transforms {
                    scene.set_transform(id, *transform);
                    scene.set_visible(id, true);
                }
                log::info!(
                    "anchor {} resolved; {} objects placed",
                    resolution.anchor_id,
                    resolution.transforms.len()
                );
                self.stage = Stage::Resolved;
            }
            ResolverEvent::Failed(failure) => {
                // Dropping the stage abandons the in-flight request; a late reply is discarded.
                log::warn!("resolution attempt {} failed: {failure}", self.attempts);
                self.retry_after = Some(now + self.retry_cooldown);
                self.stage = Stage::AwaitingTrigger;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nalgebra::{UnitQuaternion, Vector3};

    use super::*;
    use crate::{
        catalog::{AssetFormat, ObjectCatalog, ObjectSpec},
        constants::CLOUD_ANCHOR_KEY,
        placement::Placement,
        role::{AuthState, RoleGate},
        store::{MemoryStore, RemoteStore},
        test_support::FakeTracker,
    };

    const MARKER: &str = "quadro";

    struct Harness {
        store: MemoryStore,
        registry: AnchorRegistry,
        tracker: FakeTracker,
        scene: SceneRegistry,
        resolver: AnchorResolver,
    }

    impl Harness {
        fn new() -> Self {
            let store = MemoryStore::new();
            let registry = AnchorRegistry::new(Arc::new(store.clone()), Arc::new(RoleGate::new()));
            let scene = SceneRegistry::from_catalog(&ObjectCatalog::new([
                ObjectSpec::new("obj1", "obj1.glb", AssetFormat::Gltf),
                ObjectSpec::new("obj2", "obj2.glb", AssetFormat::Gltf),
            ]));
            let mut resolver = AnchorResolver::new(TargetId::from(MARKER))
                .with_timeouts(Duration::from_secs(2), Duration::from_secs(3))
                .with_retry_cooldown(Duration::from_millis(500));
            resolver.activate();
            Self {
                store,
                registry,
                tracker: FakeTracker::new(),
                scene,
                resolver,
            }
        }

        fn publish_obj1(&self) {
            let role = Arc::new(RoleGate::new());
            role.on_auth_state_changed(AuthState::SignedIn { user: "admin".into() });
            let admin = AnchorRegistry::new(Arc::new(self.store.clone()), role);
            let set = PlacementSet::new("ABC123").with_object(
                "obj1",
                Placement::new(
                    Vector3::new(1.0, 0.0, 0.0),
                    UnitQuaternion::identity(),
                    Vector3::new(1.0, 1.0, 1.0),
                    "obj1.glb",
                )
                .unwrap(),
            );
            assert_eq!(admin.publish(&set).poll(), Poll::Ready(Ok(())));
        }

        fn frame(&mut self, now_ms: u64) -> Option<ResolverEvent> {
            let results = self.tracker.tracking_results();
            self.resolver.on_frame(
                Duration::from_millis(now_ms),
                &results,
                &self.registry,
                &self.tracker,
                &mut self.scene,
            )
        }

        fn visible(&self, id: &str) -> bool {
            self.scene.get(&id.into()).unwrap().visible
        }
    }

    #[test]
    fn idle_until_activated() {
        let mut h = Harness::new();
        h.resolver = AnchorResolver::new(TargetId::from(MARKER));
        h.publish_obj1();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert_eq!(h.frame(0), None);
        assert_eq!(h.resolver.phase(), ResolverPhase::Idle);
        assert!(h.tracker.resolve_calls().is_empty());
    }

    #[test]
    fn untracked_or_foreign_marker_is_not_a_trigger() {
        let mut h = Harness::new();
        h.publish_obj1();

        h.tracker.show_marker(MARKER, TrackingState::Untracked);
        assert_eq!(h.frame(0), None);
        h.tracker.show_marker("poster", TrackingState::Tracked);
        assert_eq!(h.frame(16), None);

        assert_eq!(h.resolver.phase(), ResolverPhase::AwaitingTrigger);
        assert_eq!(h.resolver.attempts(), 0);
    }

    #[test]
    fn resolves_published_arrangement_at_identity_pose() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        let Some(ResolverEvent::Resolved(resolution)) = h.frame(0) else {
            panic!("expected resolution");
        };

        assert_eq!(resolution.anchor_id, "ABC123");
        let obj1 = h.scene.get(&"obj1".into()).unwrap();
        assert!(obj1.visible);
        assert_eq!(obj1.transform.translation, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(obj1.transform.scale, Vector3::new(1.0, 1.0, 1.0));
        assert!(!h.visible("obj2"), "objects absent from the set stay hidden");
        assert_eq!(h.resolver.phase(), ResolverPhase::Resolved);
    }

    #[test]
    fn missing_arrangement_keeps_waiting() {
        let mut h = Harness::new();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert_eq!(
            h.frame(0),
            Some(ResolverEvent::Failed(ResolveFailure::Fetch(ReadError::NotFound)))
        );
        assert_eq!(h.resolver.phase(), ResolverPhase::AwaitingTrigger);
        assert!(!h.visible("obj1"));
        assert!(h.tracker.resolve_calls().is_empty());
    }

    #[test]
    fn malformed_arrangement_fails_the_attempt() {
        let mut h = Harness::new();
        h.store
            .write(CLOUD_ANCHOR_KEY, serde_json::json!({ "id": 7 }))
            .poll();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert!(matches!(
            h.frame(0),
            Some(ResolverEvent::Failed(ResolveFailure::Fetch(ReadError::Malformed(_))))
        ));
    }

    #[test]
    fn triggers_are_coalesced_while_resolving() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker.set_resolve_reply(None);
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        for frame in 0..10 {
            assert_eq!(h.frame(frame * 16), None);
        }
        assert_eq!(h.resolver.phase(), ResolverPhase::Resolving);
        assert_eq!(h.tracker.resolve_calls(), vec!["ABC123".to_owned()]);

        assert!(h.tracker.release_resolve(Ok(ResolvedPose::identity())));
        assert!(matches!(h.frame(200), Some(ResolverEvent::Resolved(_))));
        assert_eq!(h.tracker.resolve_calls().len(), 1);
    }

    #[test]
    fn resolve_error_retries_after_cooldown() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker
            .set_resolve_reply(Some(Err(ResolveError::InsufficientTracking)));
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert_eq!(
            h.frame(0),
            Some(ResolverEvent::Failed(ResolveFailure::Resolve(
                ResolveError::InsufficientTracking
            )))
        );
        assert!(!h.visible("obj1"));

        h.tracker.set_resolve_reply(Some(Ok(ResolvedPose::identity())));
        assert_eq!(h.frame(100), None, "still cooling down");
        assert!(matches!(h.frame(600), Some(ResolverEvent::Resolved(_))));
        assert_eq!(h.resolver.attempts(), 2);
        assert!(h.visible("obj1"));
    }

    #[test]
    fn without_cooldown_the_next_trigger_retries() {
        let mut h = Harness::new();
        h.resolver = AnchorResolver::new(TargetId::from(MARKER));
        h.resolver.activate();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert!(matches!(h.frame(0), Some(ResolverEvent::Failed(_))));
        h.publish_obj1();
        assert!(matches!(h.frame(16), Some(ResolverEvent::Resolved(_))));
        assert_eq!(h.resolver.attempts(), 2);
    }

    #[test]
    fn stalled_resolve_times_out_and_late_reply_is_ignored() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker.set_resolve_reply(None);
        h.tracker.show_marker(MARKER, TrackingState::Tracked);

        assert_eq!(h.frame(0), None);
        assert_eq!(h.frame(2_999), None);
        assert_eq!(
            h.frame(3_000),
            Some(ResolverEvent::Failed(ResolveFailure::Resolve(ResolveError::TimedOut)))
        );

        assert!(!h.tracker.release_resolve(Ok(ResolvedPose::identity())));
        assert!(!h.visible("obj1"));

        h.tracker.hide_markers();
        assert_eq!(h.frame(4_000), None);
        assert_eq!(h.resolver.phase(), ResolverPhase::AwaitingTrigger);
    }

    #[test]
    fn abandoned_resolve_counts_as_unreachable() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker.set_resolve_reply(None);
        h.tracker.show_marker(MARKER, TrackingState::Tracked);
        assert_eq!(h.frame(0), None);

        // The tracker shuts down and drops the outstanding request.
        h.tracker = FakeTracker::new();
        assert!(matches!(
            h.frame(16),
            Some(ResolverEvent::Failed(ResolveFailure::Resolve(ResolveError::Unreachable(_))))
        ));
    }

    #[test]
    fn resolution_is_permanent() {
        let mut h = Harness::new();
        h.publish_obj1();
        h.tracker.show_marker(MARKER, TrackingState::Tracked);
        assert!(matches!(h.frame(0), Some(ResolverEvent::Resolved(_))));

        h.tracker.show_marker(MARKER, TrackingState::Untracked);
        assert_eq!(h.frame(16), None);
        h.tracker.show_marker(MARKER, TrackingState::Tracked);
        assert_eq!(h.frame(32), None);

        assert_eq!(h.tracker.resolve_calls().len(), 1);
        assert!(h.visible("obj1"));
    }

    #[test]
    fn rotated_anchor_rotates_offsets_before_translating() {
        let mut h = Harness::new();
        h.publish_obj1();
        let pose = ResolvedPose::new(
            Vector3::new(0.0, 0.0, -2.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f32::consts::FRAC_PI_2),
        );
        h.tracker.set_resolve_reply(Some(Ok(pose)));
        h.tracker.show_marker(MARKER, TrackingState::Tracked);
        assert!(matches!(h.frame(0), Some(ResolverEvent::Resolved(_))));

        let t = h.scene.get(&"obj1".into()).unwrap().transform.translation;
        assert!((t - Vector3::new(0.0, 0.0, -3.0)).norm() < 1.0e-5, "got {t:?}");
    }
}
