//! Protocol constants shared by the viewer, the admin tooling and the store module.
//!
//! Durations are wall-clock budgets measured against the frame loop's session clock.

use std::time::Duration;

/// Store key holding the authoritative [`PlacementSet`](crate::PlacementSet).
pub const CLOUD_ANCHOR_KEY: &str = "cloudAnchor";

/// Store path under which one `{ "time": f32 }` record per object lives
/// (`animationState/<objectId>`).
pub const ANIMATION_STATE_KEY: &str = "animationState";

/// Separator between path segments of a store key.
pub const KEY_SEPARATOR: char = '/';

/// Cadence of the admin-side animation publisher.
pub const ANIMATION_PUBLISH_INTERVAL: Duration = Duration::from_millis(100);

/// How long a placement fetch may stay in flight before the attempt is failed.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the tracking subsystem may take to resolve a hosted anchor.
pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(15);

/// How long starting the tracking session may take before it is considered failed.
pub const SESSION_START_TIMEOUT: Duration = Duration::from_secs(20);

/// Budget for a single store write (placement publish or animation sample).
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Budget for hosting a new anchor from the admin's session.
pub const HOST_ANCHOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Accepted deviation of a stored rotation's norm from 1.
///
/// Stored quaternions pass through JSON as decimal text, so exact unit norm is not expected.
pub const ROTATION_NORM_EPS: f32 = 1.0e-3;

/// Marker image registered with the tracking session by default.
pub const DEFAULT_MARKER_ID: &str = "quadro";

/// Physical width of the default marker image (meters).
pub const DEFAULT_MARKER_WIDTH_M: f32 = 1.0;

/// Opt-in wait after a failed resolution attempt before a trigger may start another one.
///
/// Without it a marker held in view re-fetches the placement every frame while no anchor exists.
/// Sessions default to no cooldown; the viewer opts in.
pub const RESOLVE_RETRY_COOLDOWN: Duration = Duration::from_secs(1);
