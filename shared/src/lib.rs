pub mod animation;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod pending;
pub mod placement;
pub mod pose;
pub mod registry;
pub mod resolver;
pub mod role;
pub mod scene;
pub mod session;
pub mod store;
pub mod tracking;

#[cfg(test)]
mod test_support;

pub use animation::{AnimationPublisher, AnimationSample, AnimationSubscriber};
pub use catalog::{AssetFormat, AssetSource, ObjectCatalog, ObjectSpec};
pub use constants::{
    ANIMATION_PUBLISH_INTERVAL, ANIMATION_STATE_KEY, CLOUD_ANCHOR_KEY, DEFAULT_MARKER_ID,
    ROTATION_NORM_EPS,
};
pub use error::{
    PlacementError, PublishFailure, ReadError, ResolveError, ResolveFailure, TrackError,
    WriteError,
};
pub use pending::{Pending, Poll, Responder};
pub use placement::{
    ObjectId, Placement, PlacementSet, QuatRecord, Vec3Record, resolve_world_transforms,
};
pub use pose::{ResolvedPose, WorldTransform};
pub use registry::AnchorRegistry;
pub use resolver::{AnchorResolver, Resolution, ResolverEvent, ResolverPhase};
pub use role::{AuthState, Role, RoleGate};
pub use scene::{LoadState, PlaybackTrack, SceneObject, SceneRegistry};
pub use session::{SessionNotice, SessionState, SyncConfig, SyncSession};
pub use store::{ChangeHandler, MemoryStore, RemoteStore};
pub use tracking::{
    HostedAnchor, MarkerImage, REQUIRED_FEATURES, SessionHandle, TargetId, TrackingFeature,
    TrackingResult, TrackingState, TrackingSubsystem,
};
