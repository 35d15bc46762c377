//! Anchor Registry: the single remote-held [`PlacementSet`].
//!
//! One publish overwrites the whole set under one key, so readers never observe a partial
//! arrangement. There is no versioning or merge; the last publish wins.

use std::sync::Arc;

use crate::{
    constants::CLOUD_ANCHOR_KEY,
    error::{ReadError, WriteError},
    pending::Pending,
    placement::PlacementSet,
    role::RoleGate,
    store::RemoteStore,
};

#[derive(Clone)]
pub struct AnchorRegistry {
    store: Arc<dyn RemoteStore>,
    role: Arc<RoleGate>,
}

impl AnchorRegistry {
    pub fn new(store: Arc<dyn RemoteStore>, role: Arc<RoleGate>) -> Self {
        Self { store, role }
    }

    /// Replaces the remote set. Requires admin capability; a viewer's attempt never reaches the
    /// store.
    pub fn publish(&self, set: &PlacementSet) -> Pending<Result<(), WriteError>> {
        if let Err(err) = self.role.require_admin() {
            log::warn!("placement publish refused: {err}");
            return Pending::ready(Err(err));
        }
        let value = match set.to_value() {
            Ok(value) => value,
            Err(err) => return Pending::ready(Err(err)),
        };
        log::info!(
            "publishing anchor {} with {} placements",
            set.anchor_id,
            set.objects.len()
        );
        self.store.write(CLOUD_ANCHOR_KEY, value)
    }

    /// The most recently published set, or [`ReadError::NotFound`].
    pub fn fetch(&self) -> Pending<Result<PlacementSet, ReadError>> {
        self.store
            .read(CLOUD_ANCHOR_KEY)
            .map(|result| result.and_then(PlacementSet::from_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pending::Poll,
        placement::Placement,
        role::AuthState,
        store::MemoryStore,
    };
    use nalgebra::{UnitQuaternion, Vector3};

    fn set(anchor: &str, x: f32) -> PlacementSet {
        PlacementSet::new(anchor).with_object(
            "escultura",
            Placement::new(
                Vector3::new(x, 0.0, 0.0),
                UnitQuaternion::identity(),
                Vector3::new(1.0, 1.0, 1.0),
                "exemplo.glb",
            )
            .expect("valid placement"),
        )
    }

    fn admin_registry(store: &MemoryStore) -> AnchorRegistry {
        let role = Arc::new(RoleGate::new());
        role.on_auth_state_changed(AuthState::SignedIn { user: "admin".into() });
        AnchorRegistry::new(Arc::new(store.clone()), role)
    }

    #[test]
    fn fetch_before_any_publish_is_not_found() {
        let registry = AnchorRegistry::new(Arc::new(MemoryStore::new()), Arc::new(RoleGate::new()));
        assert_eq!(registry.fetch().poll(), Poll::Ready(Err(ReadError::NotFound)));
    }

    #[test]
    fn viewer_publish_is_refused_without_writing() {
        let store = MemoryStore::new();
        let registry = AnchorRegistry::new(Arc::new(store.clone()), Arc::new(RoleGate::new()));

        assert_eq!(
            registry.publish(&set("ABC123", 1.0)).poll(),
            Poll::Ready(Err(WriteError::NotPermitted))
        );
        assert_eq!(store.snapshot(CLOUD_ANCHOR_KEY), None);
    }

    #[test]
    fn second_publish_supersedes_first() {
        let store = MemoryStore::new();
        let registry = admin_registry(&store);

        assert_eq!(registry.publish(&set("first", 1.0)).poll(), Poll::Ready(Ok(())));
        assert_eq!(registry.publish(&set("second", 2.0)).poll(), Poll::Ready(Ok(())));

        assert_eq!(registry.fetch().poll(), Poll::Ready(Ok(set("second", 2.0))));
    }

    #[test]
    fn unreachable_store_surfaces_write_error() {
        let store = MemoryStore::new();
        let registry = admin_registry(&store);
        store.set_offline(true);

        assert!(matches!(
            registry.publish(&set("ABC123", 1.0)).poll(),
            Poll::Ready(Err(WriteError::Unreachable(_)))
        ));
    }
}
