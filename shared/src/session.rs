//! The shared-viewer session: one value owned by the frame loop that wires the tracking
//! session, the Anchor Resolver, the Animation Replicator and the admin publish gesture
//! together.
//!
//! Everything here runs on the frame loop. Async outcomes arrive as [`Pending`] handles polled
//! from [`SyncSession::update`], and store notifications are queued by the subscriber, so the
//! [`SceneRegistry`] is never touched from another thread.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    animation::{AnimationPublisher, AnimationSubscriber},
    catalog::ObjectCatalog,
    constants::{
        ANIMATION_PUBLISH_INTERVAL, DEFAULT_MARKER_ID, DEFAULT_MARKER_WIDTH_M, FETCH_TIMEOUT,
        HOST_ANCHOR_TIMEOUT, RESOLVE_TIMEOUT, SESSION_START_TIMEOUT, WRITE_TIMEOUT,
    },
    error::{PublishFailure, ResolveFailure, TrackError, WriteError},
    pending::{Pending, Poll},
    placement::{ObjectId, Placement, PlacementSet},
    registry::AnchorRegistry,
    resolver::{AnchorResolver, ResolverEvent, ResolverPhase},
    role::{Role, RoleGate},
    scene::{LoadState, SceneRegistry},
    store::RemoteStore,
    tracking::{
        HostedAnchor, MarkerImage, REQUIRED_FEATURES, SessionHandle, TargetId, TrackingSubsystem,
    },
};

/// Tunables of a session. [`Default`] uses the protocol constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncConfig {
    /// The marker whose sighting triggers resolution.
    pub marker: MarkerImage,
    pub session_start_timeout: Duration,
    pub fetch_timeout: Duration,
    pub resolve_timeout: Duration,
    pub write_timeout: Duration,
    pub host_timeout: Duration,
    pub publish_interval: Duration,
    /// Quiet period after a failed resolution. Zero retries on the next marker sighting.
    pub retry_cooldown: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            marker: MarkerImage {
                id: TargetId::from(DEFAULT_MARKER_ID),
                width_m: DEFAULT_MARKER_WIDTH_M,
            },
            session_start_timeout: SESSION_START_TIMEOUT,
            fetch_timeout: FETCH_TIMEOUT,
            resolve_timeout: RESOLVE_TIMEOUT,
            write_timeout: WRITE_TIMEOUT,
            host_timeout: HOST_ANCHOR_TIMEOUT,
            publish_interval: ANIMATION_PUBLISH_INTERVAL,
            retry_cooldown: Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    NotStarted,
    Starting,
    Running,
    /// Fatal for this session. There is no automatic retry.
    Failed(TrackError),
}

/// User-facing outcome reported by the session, drained once per frame by the shell.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionNotice {
    SessionStarted,
    SessionFailed(TrackError),
    AnchorResolved { anchor_id: String, placed: usize },
    /// Non-fatal; the next marker sighting retries.
    ResolveFailed(ResolveFailure),
    Published { anchor_id: String },
    PublishFailed(PublishFailure),
}

enum Lifecycle {
    NotStarted,
    Starting {
        pending: Pending<Result<SessionHandle, TrackError>>,
        deadline: Duration,
    },
    Running(SessionHandle),
    Failed(TrackError),
}

enum PublishJob {
    Hosting {
        pending: Pending<Result<HostedAnchor, TrackError>>,
        deadline: Duration,
    },
    Writing {
        anchor_id: String,
        pending: Pending<Result<(), WriteError>>,
        deadline: Duration,
    },
}

pub struct SyncSession {
    config: SyncConfig,
    store: Arc<dyn RemoteStore>,
    tracker: Arc<dyn TrackingSubsystem>,
    role: Arc<RoleGate>,
    registry: AnchorRegistry,
    scene: SceneRegistry,
    resolver: AnchorResolver,
    publisher: AnimationPublisher,
    subscriber: Option<AnimationSubscriber>,
    lifecycle: Lifecycle,
    publish_job: Option<PublishJob>,
    notices: Vec<SessionNotice>,
}

impl SyncSession {
    pub fn new(
        config: SyncConfig,
        catalog: &ObjectCatalog,
        store: Arc<dyn RemoteStore>,
        tracker: Arc<dyn TrackingSubsystem>,
        role: Arc<RoleGate>,
    ) -> Self {
        let resolver = AnchorResolver::new(config.marker.id.clone())
            .with_timeouts(config.fetch_timeout, config.resolve_timeout)
            .with_retry_cooldown(config.retry_cooldown);
        let publisher = AnimationPublisher::new(store.clone(), role.clone())
            .with_interval(config.publish_interval)
            .with_write_timeout(config.write_timeout);
        Self {
            registry: AnchorRegistry::new(store.clone(), role.clone()),
            scene: SceneRegistry::from_catalog(catalog),
            resolver,
            publisher,
            subscriber: None,
            lifecycle: Lifecycle::NotStarted,
            publish_job: None,
            notices: Vec::new(),
            config,
            store,
            tracker,
            role,
        }
    }

    /// Requests the tracking session and subscribes to animation updates.
    ///
    /// Returns `false` if the session was already begun.
    pub fn begin(&mut self, now: Duration) -> bool {
        if !matches!(self.lifecycle, Lifecycle::NotStarted) {
            log::warn!("shared session already begun");
            return false;
        }
        log::info!(
            "starting tracking session with marker {}",
            self.config.marker.id
        );
        let pending = self.tracker.begin_session(
            &REQUIRED_FEATURES,
            std::slice::from_ref(&self.config.marker),
        );
        self.lifecycle = Lifecycle::Starting {
            pending,
            deadline: now + self.config.session_start_timeout,
        };
        self.subscriber = Some(AnimationSubscriber::attach(self.store.as_ref()));
        true
    }

    /// One frame: session start, local playback, replicated seeks, resolution, animation
    /// publishing and the publish gesture, in that order.
    pub fn update(&mut self, now: Duration, dt: Duration) {
        self.poll_lifecycle(now);
        if matches!(self.lifecycle, Lifecycle::Failed(_)) {
            return;
        }

        self.scene.advance(dt.as_secs_f32());
        if let Some(subscriber) = &mut self.subscriber {
            subscriber.apply_pending(&mut self.scene);
        }

        if matches!(self.lifecycle, Lifecycle::Running(_)) {
            let results = self.tracker.tracking_results();
            let event = self.resolver.on_frame(
                now,
                &results,
                &self.registry,
                self.tracker.as_ref(),
                &mut self.scene,
            );
            match event {
                Some(ResolverEvent::Resolved(resolution)) => {
                    self.notices.push(SessionNotice::AnchorResolved {
                        anchor_id: resolution.anchor_id,
                        placed: resolution.transforms.len(),
                    })
                }
                Some(ResolverEvent::Failed(failure)) => {
                    self.notices.push(SessionNotice::ResolveFailed(failure))
                }
                None => {}
            }
        }

        self.publisher.tick(now, &self.scene);
        self.poll_publish(now);
    }

    fn poll_lifecycle(&mut self, now: Duration) {
        let Lifecycle::Starting { pending, deadline } = &mut self.lifecycle else {
            return;
        };
        let outcome = match pending.poll() {
            Poll::Ready(result) => result,
            Poll::Abandoned => Err(TrackError::Unreachable(
                "session request dropped without a reply".into(),
            )),
            Poll::Waiting if now >= *deadline => Err(TrackError::TimedOut),
            Poll::Waiting => return,
        };
        match outcome {
            Ok(handle) => {
                log::info!("tracking session {} running", handle.0);
                self.lifecycle = Lifecycle::Running(handle);
                self.resolver.activate();
                self.notices.push(SessionNotice::SessionStarted);
            }
            Err(err) => {
                log::error!("tracking session failed to start: {err}");
                self.lifecycle = Lifecycle::Failed(err.clone());
                self.notices.push(SessionNotice::SessionFailed(err));
            }
        }
    }

    /// Admin gesture: host a new anchor and publish every loaded object's current transform
    /// relative to it. The outcome arrives as a [`SessionNotice`].
    pub fn publish_arrangement(&mut self, now: Duration) -> Result<(), PublishFailure> {
        self.role.require_admin()?;
        let Lifecycle::Running(handle) = &self.lifecycle else {
            return Err(TrackError::NotRunning.into());
        };
        if self.publish_job.is_some() {
            return Err(WriteError::Rejected("a publish is already in progress".into()).into());
        }
        log::info!("hosting a new anchor for the current arrangement");
        self.publish_job = Some(PublishJob::Hosting {
            pending: self.tracker.create_anchor(handle),
            deadline: now + self.config.host_timeout,
        });
        Ok(())
    }

    /// Loaded objects expressed relative to `hosted`, tagged with their catalog source.
    fn arrangement(&self, hosted: &HostedAnchor) -> PlacementSet {
        let mut set = PlacementSet::new(hosted.id.clone());
        for (id, object) in self.scene.iter() {
            if object.load != LoadState::Ready {
                continue;
            }
            let (position, rotation) = hosted.pose.localize(&object.transform);
            match Placement::new(
                position,
                rotation,
                object.transform.scale,
                object.spec.source.uri.clone(),
            ) {
                Ok(placement) => {
                    set.objects.insert(id.clone(), placement);
                }
                Err(err) => log::warn!("leaving {id} out of the arrangement: {err}"),
            }
        }
        set
    }

    fn poll_publish(&mut self, now: Duration) {
        let Some(job) = &mut self.publish_job else {
            return;
        };
        let next = match job {
            PublishJob::Hosting { pending, deadline } => {
                let hosted = match pending.poll() {
                    Poll::Ready(result) => result,
                    Poll::Abandoned => Err(TrackError::Unreachable(
                        "anchor hosting dropped without a reply".into(),
                    )),
                    Poll::Waiting if now >= *deadline => Err(TrackError::TimedOut),
                    Poll::Waiting => return,
                };
                match hosted {
                    Ok(hosted) => {
                        let set = self.arrangement(&hosted);
                        Ok(Some(PublishJob::Writing {
                            pending: self.registry.publish(&set),
                            anchor_id: hosted.id,
                            deadline: now + self.config.write_timeout,
                        }))
                    }
                    Err(err) => Err(PublishFailure::Host(err)),
                }
            }
            PublishJob::Writing {
                anchor_id,
                pending,
                deadline,
            } => match pending.poll() {
                Poll::Ready(Ok(())) => {
                    log::info!("arrangement published under anchor {anchor_id}");
                    self.notices.push(SessionNotice::Published {
                        anchor_id: anchor_id.clone(),
                    });
                    Ok(None)
                }
                Poll::Ready(Err(err)) => Err(err.into()),
                Poll::Abandoned => Err(WriteError::Unreachable(
                    "placement write dropped without a reply".into(),
                )
                .into()),
                Poll::Waiting if now >= *deadline => Err(WriteError::TimedOut.into()),
                Poll::Waiting => return,
            },
        };
        match next {
            Ok(Some(job)) => {
                self.publish_job = Some(job);
                // A store that acknowledges immediately finishes in the same frame.
                self.poll_publish(now);
            }
            Ok(None) => self.publish_job = None,
            Err(failure) => {
                log::warn!("publish failed: {failure}");
                self.publish_job = None;
                self.notices.push(SessionNotice::PublishFailed(failure));
            }
        }
    }

    /// The asset for `id` finished loading.
    pub fn asset_loaded(&mut self, id: &ObjectId) -> bool {
        self.scene.mark_loaded(id)
    }

    pub fn asset_failed(&mut self, id: &ObjectId, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("asset for {id} failed to load: {reason}");
        self.scene.mark_failed(id, reason);
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    /// Direct access for the admin's local arrangement (moving objects before publishing).
    pub fn scene_mut(&mut self) -> &mut SceneRegistry {
        &mut self.scene
    }

    pub fn state(&self) -> SessionState {
        match &self.lifecycle {
            Lifecycle::NotStarted => SessionState::NotStarted,
            Lifecycle::Starting { .. } => SessionState::Starting,
            Lifecycle::Running(_) => SessionState::Running,
            Lifecycle::Failed(err) => SessionState::Failed(err.clone()),
        }
    }

    pub fn resolver_phase(&self) -> ResolverPhase {
        self.resolver.phase()
    }

    pub fn role(&self) -> Role {
        self.role.role()
    }

    pub fn is_publishing(&self) -> bool {
        self.publish_job.is_some()
    }

    pub fn drain_notices(&mut self) -> Vec<SessionNotice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{UnitQuaternion, Vector3};

    use super::*;
    use crate::{
        catalog::{AssetFormat, ObjectSpec},
        constants::CLOUD_ANCHOR_KEY,
        error::ResolveError,
        pose::{ResolvedPose, WorldTransform},
        role::AuthState,
        store::MemoryStore,
        test_support::{FakeTracker, StallingStore},
        tracking::TrackingState,
    };

    const FRAME: Duration = Duration::from_millis(16);

    fn catalog() -> ObjectCatalog {
        ObjectCatalog::new([
            ObjectSpec::new("obj1", "https://example.com/obj1.glb", AssetFormat::Gltf).animated(),
            ObjectSpec::new("obj2", "https://example.com/obj2.glb", AssetFormat::Gltf),
        ])
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    struct Participant {
        session: SyncSession,
        tracker: Arc<FakeTracker>,
        role: Arc<RoleGate>,
    }

    impl Participant {
        fn join(store: &MemoryStore, admin: bool) -> Self {
            Self::join_store(Arc::new(store.clone()), admin)
        }

        fn join_store(store: Arc<dyn RemoteStore>, admin: bool) -> Self {
            let tracker = Arc::new(FakeTracker::new());
            let role = Arc::new(RoleGate::new());
            if admin {
                role.on_auth_state_changed(AuthState::SignedIn {
                    user: "curator@example.com".into(),
                });
            }
            let session = SyncSession::new(
                SyncConfig::default(),
                &catalog(),
                store,
                tracker.clone(),
                role.clone(),
            );
            Self {
                session,
                tracker,
                role,
            }
        }

        fn start(&mut self) {
            assert!(self.session.begin(ms(0)));
            self.session.update(ms(0), FRAME);
            assert_eq!(self.session.state(), SessionState::Running);
            assert_eq!(self.session.drain_notices(), vec![SessionNotice::SessionStarted]);
        }

        fn object(&self, id: &str) -> &crate::scene::SceneObject {
            self.session.scene().get(&id.into()).unwrap()
        }
    }

    fn publish_obj1_at_x(store: &MemoryStore, x: f32) {
        let mut admin = Participant::join(store, true);
        admin.start();
        admin.session.asset_loaded(&"obj1".into());
        admin.session.scene_mut().set_transform(
            &"obj1".into(),
            WorldTransform {
                translation: Vector3::new(x, 0.0, 0.0),
                ..WorldTransform::default()
            },
        );
        admin.session.publish_arrangement(ms(16)).unwrap();
        admin.session.update(ms(16), FRAME);
        assert!(admin.session.drain_notices().contains(&SessionNotice::Published {
            anchor_id: "ABC123".into()
        }));
    }

    #[test]
    fn viewer_resolves_published_arrangement() {
        let store = MemoryStore::new();
        publish_obj1_at_x(&store, 1.0);

        let mut viewer = Participant::join(&store, false);
        viewer.start();
        assert_eq!(viewer.session.resolver_phase(), ResolverPhase::AwaitingTrigger);

        viewer.tracker.show_marker(DEFAULT_MARKER_ID, TrackingState::Tracked);
        viewer.session.update(ms(32), FRAME);

        let obj1 = viewer.object("obj1");
        assert!(obj1.visible);
        assert!((obj1.transform.translation - Vector3::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
        assert_eq!(obj1.transform.scale, Vector3::new(1.0, 1.0, 1.0));
        assert!(!viewer.object("obj2").visible);
        assert!(viewer.session.drain_notices().contains(&SessionNotice::AnchorResolved {
            anchor_id: "ABC123".into(),
            placed: 1,
        }));
    }

    #[test]
    fn missing_arrangement_leaves_everything_hidden() {
        let store = MemoryStore::new();
        let mut viewer = Participant::join(&store, false);
        viewer.start();
        viewer.tracker.show_marker(DEFAULT_MARKER_ID, TrackingState::Tracked);

        viewer.session.update(ms(32), FRAME);

        assert_eq!(viewer.session.resolver_phase(), ResolverPhase::AwaitingTrigger);
        assert!(!viewer.object("obj1").visible);
        assert!(!viewer.object("obj2").visible);
        assert!(viewer.session.drain_notices().iter().any(|n| matches!(
            n,
            SessionNotice::ResolveFailed(ResolveFailure::Fetch(crate::error::ReadError::NotFound))
        )));
    }

    #[test]
    fn resolve_failure_is_retried_on_a_later_sighting() {
        let store = MemoryStore::new();
        publish_obj1_at_x(&store, 1.0);
        let mut viewer = Participant::join(&store, false);
        viewer.start();
        viewer
            .tracker
            .set_resolve_reply(Some(Err(ResolveError::Expired("ABC123".into()))));
        viewer.tracker.show_marker(DEFAULT_MARKER_ID, TrackingState::Tracked);

        viewer.session.update(ms(32), FRAME);
        assert!(!viewer.object("obj1").visible);

        viewer
            .tracker
            .set_resolve_reply(Some(Ok(ResolvedPose::identity())));
        viewer.session.update(ms(48), FRAME);

        assert!(viewer.object("obj1").visible);
        assert_eq!(viewer.session.resolver_phase(), ResolverPhase::Resolved);
    }

    #[test]
    fn animation_time_reaches_viewer_track() {
        let store = MemoryStore::new();
        let mut admin = Participant::join(&store, true);
        let mut viewer = Participant::join(&store, false);
        admin.start();
        viewer.start();
        admin.session.asset_loaded(&"obj1".into());
        viewer.session.asset_loaded(&"obj1".into());

        admin.session.scene_mut().seek(&"obj1".into(), 2.5);
        admin.session.update(ms(100), Duration::ZERO);

        viewer.session.update(ms(100), Duration::ZERO);
        assert_eq!(viewer.session.scene().track_time(&"obj1".into()), Some(2.5));
    }

    #[test]
    fn viewer_never_writes_animation_state() {
        let store = MemoryStore::new();
        let mut viewer = Participant::join(&store, false);
        viewer.start();
        viewer.session.asset_loaded(&"obj1".into());

        for frame in 1..20 {
            viewer.session.update(ms(frame * 16), FRAME);
        }
        assert_eq!(store.snapshot("animationState/obj1"), None);
    }

    #[test]
    fn viewer_publish_is_not_permitted() {
        let store = MemoryStore::new();
        let mut viewer = Participant::join(&store, false);
        viewer.start();

        assert_eq!(
            viewer.session.publish_arrangement(ms(16)),
            Err(PublishFailure::Write(WriteError::NotPermitted))
        );
        assert!(!viewer.session.is_publishing());
        assert_eq!(store.snapshot(CLOUD_ANCHOR_KEY), None);
    }

    #[test]
    fn publish_requires_running_session() {
        let store = MemoryStore::new();
        let mut admin = Participant::join(&store, true);

        assert_eq!(
            admin.session.publish_arrangement(ms(0)),
            Err(PublishFailure::Host(TrackError::NotRunning))
        );
    }

    #[test]
    fn sign_in_mid_session_enables_publishing() {
        let store = MemoryStore::new();
        let mut p = Participant::join(&store, false);
        p.start();
        assert_eq!(p.session.role(), Role::Viewer);

        p.role.on_auth_state_changed(AuthState::SignedIn { user: "curator".into() });
        p.role.on_auth_state_changed(AuthState::SignedOut);

        assert_eq!(p.session.role(), Role::Admin);
        assert_eq!(p.session.publish_arrangement(ms(16)), Ok(()));
    }

    #[test]
    fn hosting_failure_is_reported() {
        let store = MemoryStore::new();
        let mut admin = Participant::join(&store, true);
        admin.start();
        admin
            .tracker
            .set_host_reply(Some(Err(TrackError::Unreachable("offline".into()))));

        admin.session.publish_arrangement(ms(16)).unwrap();
        admin.session.update(ms(16), FRAME);

        assert_eq!(
            admin.session.drain_notices(),
            vec![SessionNotice::PublishFailed(PublishFailure::Host(
                TrackError::Unreachable("offline".into())
            ))]
        );
        assert_eq!(store.snapshot(CLOUD_ANCHOR_KEY), None);
    }

    #[test]
    fn stalled_hosting_times_out() {
        let store = MemoryStore::new();
        let mut admin = Participant::join(&store, true);
        admin.start();
        admin.tracker.set_host_reply(None);

        admin.session.publish_arrangement(ms(0)).unwrap();
        assert!(admin.session.is_publishing());
        admin.session.update(HOST_ANCHOR_TIMEOUT, FRAME);

        assert!(!admin.session.is_publishing());
        assert_eq!(
            admin.session.drain_notices(),
            vec![SessionNotice::PublishFailed(PublishFailure::Host(TrackError::TimedOut))]
        );
        // The abandoned request's late answer goes nowhere.
        assert!(!admin.tracker.release_host(Ok(HostedAnchor {
            id: "LATE".into(),
            pose: ResolvedPose::identity(),
        })));
        assert_eq!(store.snapshot(CLOUD_ANCHOR_KEY), None);
    }

    #[test]
    fn stalled_placement_write_times_out() {
        let store = Arc::new(StallingStore::new());
        store.stall(CLOUD_ANCHOR_KEY);
        let mut admin = Participant::join_store(store.clone(), true);
        admin.start();
        admin.session.asset_loaded(&"obj2".into());

        admin.session.publish_arrangement(ms(0)).unwrap();
        admin.session.update(ms(0), FRAME);
        assert!(admin.session.is_publishing(), "hosted, waiting on the write");
        admin.session.update(WRITE_TIMEOUT - ms(1), FRAME);
        assert!(admin.session.drain_notices().is_empty());

        admin.session.update(WRITE_TIMEOUT, FRAME);

        assert!(!admin.session.is_publishing());
        assert_eq!(
            admin.session.drain_notices(),
            vec![SessionNotice::PublishFailed(PublishFailure::Write(WriteError::TimedOut))]
        );
        assert_eq!(store.attempts(CLOUD_ANCHOR_KEY), 1);
        // The store applies the write late, but nobody is listening for it any more.
        assert!(!store.release(CLOUD_ANCHOR_KEY));
        assert!(store.snapshot(CLOUD_ANCHOR_KEY).is_some());
        assert!(admin.session.drain_notices().is_empty());
    }

    #[test]
    fn offline_store_surfaces_publish_failure() {
        let store = MemoryStore::new();
        let mut admin = Participant::join(&store, true);
        admin.start();
        store.set_offline(true);

        admin.session.publish_arrangement(ms(16)).unwrap();
        admin.session.update(ms(16), FRAME);

        assert!(matches!(
            admin.session.drain_notices().as_slice(),
            [SessionNotice::PublishFailed(PublishFailure::Write(WriteError::Unreachable(_)))]
        ));
    }

    #[test]
    fn session_start_failure_is_fatal() {
        let store = MemoryStore::new();
        let mut p = Participant::join(&store, false);
        p.tracker
            .set_session_reply(Some(Err(TrackError::Unsupported("image-tracking".into()))));

        assert!(p.session.begin(ms(0)));
        p.session.update(ms(0), FRAME);
        p.tracker.show_marker(DEFAULT_MARKER_ID, TrackingState::Tracked);
        p.session.update(ms(16), FRAME);

        assert_eq!(
            p.session.state(),
            SessionState::Failed(TrackError::Unsupported("image-tracking".into()))
        );
        assert_eq!(p.session.resolver_phase(), ResolverPhase::Idle);
        assert!(!p.session.begin(ms(32)));
    }

    #[test]
    fn session_start_times_out() {
        let store = MemoryStore::new();
        let mut p = Participant::join(&store, false);
        p.tracker.set_session_reply(None);

        p.session.begin(ms(0));
        p.session.update(ms(16), FRAME);
        assert_eq!(p.session.state(), SessionState::Starting);

        p.session.update(SESSION_START_TIMEOUT, FRAME);
        assert_eq!(p.session.state(), SessionState::Failed(TrackError::TimedOut));
        assert!(!p.tracker.release_session(Ok(SessionHandle(9))));
    }

    #[test]
    fn round_trip_reproduces_admin_transforms() {
        let store = MemoryStore::new();
        let anchor_pose = ResolvedPose::new(
            Vector3::new(0.5, 0.0, -1.5),
            UnitQuaternion::from_euler_angles(0.0, 0.8, 0.0),
        );
        let admin_world = WorldTransform {
            translation: Vector3::new(1.0, 0.2, -2.0),
            rotation: UnitQuaternion::from_euler_angles(0.1, -0.3, 0.2),
            scale: Vector3::new(0.5, 0.5, 0.5),
        };

        let mut admin = Participant::join(&store, true);
        admin.start();
        admin.tracker.set_host_reply(Some(Ok(HostedAnchor {
            id: "ABC123".into(),
            pose: anchor_pose,
        })));
        admin.session.asset_loaded(&"obj2".into());
        admin.session.scene_mut().set_transform(&"obj2".into(), admin_world);
        admin.session.publish_arrangement(ms(16)).unwrap();
        admin.session.update(ms(16), FRAME);

        let mut viewer = Participant::join(&store, false);
        viewer.start();
        viewer.tracker.set_resolve_reply(Some(Ok(anchor_pose)));
        viewer.tracker.show_marker(DEFAULT_MARKER_ID, TrackingState::Tracked);
        viewer.session.update(ms(32), FRAME);

        let obj2 = viewer.object("obj2").transform;
        assert!((obj2.translation - admin_world.translation).norm() < 1.0e-5);
        assert!(obj2.rotation.coords.dot(&admin_world.rotation.coords).abs() > 1.0 - 1.0e-5);
        assert_eq!(obj2.scale, admin_world.scale);
        assert!(
            !viewer.object("obj1").visible,
            "obj1 was still loading on the admin side"
        );
    }
}
