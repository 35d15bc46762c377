//! Remote key-value store with change notifications.
//!
//! The store is an external collaborator. [`RemoteStore`] is the contract this crate consumes;
//! [`MemoryStore`] is an in-process implementation used for local sessions and tests.
//!
//! Keys are `/`-separated paths. A subscription on a path observes writes to the path itself and
//! to every path below it, in write order per key. There is no ordering across keys.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::{
    constants::{ANIMATION_STATE_KEY, KEY_SEPARATOR},
    error::{ReadError, WriteError},
    pending::Pending,
    placement::ObjectId,
};

/// Called with the written key and its new value.
pub type ChangeHandler = Box<dyn Fn(&str, &Value) + Send + Sync>;

pub trait RemoteStore: Send + Sync {
    /// Overwrites the value at `key`.
    fn write(&self, key: &str, value: Value) -> Pending<Result<(), WriteError>>;

    /// Reads the value at `key`, or [`ReadError::NotFound`] if it was never written.
    fn read(&self, key: &str) -> Pending<Result<Value, ReadError>>;

    /// Registers `on_change` for every subsequent write at or below `key`.
    fn subscribe(&self, key: &str, on_change: ChangeHandler);
}

/// `animationState/<objectId>`
pub fn animation_state_key(id: &ObjectId) -> String {
    format!("{ANIMATION_STATE_KEY}{KEY_SEPARATOR}{id}")
}

/// Extracts the object id from an `animationState/<objectId>` key.
pub fn object_id_from_animation_key(key: &str) -> Option<ObjectId> {
    let rest = key
        .strip_prefix(ANIMATION_STATE_KEY)?
        .strip_prefix(KEY_SEPARATOR)?;
    if rest.is_empty() || rest.contains(KEY_SEPARATOR) {
        return None;
    }
    Some(ObjectId::new(rest))
}

fn is_under(key: &str, path: &str) -> bool {
    key == path
        || key
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with(KEY_SEPARATOR))
}

#[derive(Default)]
struct MemoryInner {
    values: BTreeMap<String, Value>,
    subscribers: Vec<(String, Arc<dyn Fn(&str, &Value) + Send + Sync>)>,
    offline: bool,
}

/// Thread-safe in-process store. Completions are available immediately.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates losing (or regaining) the connection to the store.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Current value at `key`, bypassing the async contract.
    pub fn snapshot(&self, key: &str) -> Option<Value> {
        self.lock().values.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        // A handler that panicked mid-notification leaves the data itself consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RemoteStore for MemoryStore {
    fn write(&self, key: &str, value: Value) -> Pending<Result<(), WriteError>> {
        let handlers: Vec<Arc<dyn Fn(&str, &Value) + Send + Sync>> = {
            let mut inner = self.lock();
            if inner.offline {
                return Pending::ready(Err(WriteError::Unreachable("store offline".into())));
            }
            inner.values.insert(key.to_owned(), value.clone());
            inner
                .subscribers
                .iter()
                .filter(|(path, _)| is_under(key, path))
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };

        // Handlers run outside the lock so they may call back into the store.
        for handler in handlers {
            (*handler)(key, &value);
        }
        Pending::ready(Ok(()))
    }

    fn read(&self, key: &str) -> Pending<Result<Value, ReadError>> {
        let inner = self.lock();
        if inner.offline {
            return Pending::ready(Err(ReadError::Unreachable("store offline".into())));
        }
        Pending::ready(inner.values.get(key).cloned().ok_or(ReadError::NotFound))
    }

    fn subscribe(&self, key: &str, on_change: ChangeHandler) {
        self.lock()
            .subscribers
            .push((key.to_owned(), Arc::from(on_change)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending::Poll;
    use serde_json::json;

    #[test]
    fn animation_keys_round_trip_object_ids() {
        let id = ObjectId::from("escultura");
        let key = animation_state_key(&id);

        assert_eq!(key, "animationState/escultura");
        assert_eq!(object_id_from_animation_key(&key), Some(id));
        assert_eq!(object_id_from_animation_key("animationState"), None);
        assert_eq!(object_id_from_animation_key("animationState/"), None);
        assert_eq!(object_id_from_animation_key("animationState/a/b"), None);
        assert_eq!(object_id_from_animation_key("animationStateX/a"), None);
    }

    #[test]
    fn read_of_unwritten_key_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.read("cloudAnchor").poll(), Poll::Ready(Err(ReadError::NotFound)));
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.write("cloudAnchor", json!({ "id": "first" }));
        store.write("cloudAnchor", json!({ "id": "second" }));

        assert_eq!(
            store.read("cloudAnchor").poll(),
            Poll::Ready(Ok(json!({ "id": "second" })))
        );
    }

    #[test]
    fn subscribers_see_writes_below_their_path_only() {
        let store = MemoryStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(
            "animationState",
            Box::new(move |key: &str, value: &Value| sink.lock().unwrap().push((key.to_owned(), value.clone()))),
        );

        store.write("animationState/escultura", json!({ "time": 1.0 }));
        store.write("cloudAnchor", json!({ "id": "ABC123" }));
        store.write("animationStateOld/escultura", json!({ "time": 9.0 }));
        store.write("animationState/escultura", json!({ "time": 1.1 }));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("animationState/escultura".to_owned(), json!({ "time": 1.0 })),
                ("animationState/escultura".to_owned(), json!({ "time": 1.1 })),
            ]
        );
    }

    #[test]
    fn offline_store_fails_reads_and_writes() {
        let store = MemoryStore::new();
        store.set_offline(true);

        assert!(matches!(
            store.write("cloudAnchor", json!({})).poll(),
            Poll::Ready(Err(WriteError::Unreachable(_)))
        ));
        assert!(matches!(
            store.read("cloudAnchor").poll(),
            Poll::Ready(Err(ReadError::Unreachable(_)))
        ));
        assert_eq!(store.snapshot("cloudAnchor"), None);
    }
}
