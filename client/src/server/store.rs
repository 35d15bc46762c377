//! [`RemoteStore`] backed by the `anchor_store` module.
//!
//! Writes become reducer calls and are acknowledged when the reducer's outcome comes back.
//! Reads and subscriptions are served from a mirror of the subscribed rows, kept current by the
//! connection's row callbacks. Everything here is thread-safe: the connection thread feeds the
//! mirror while the frame loop reads and writes.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use anchor_sync::{
    AnimationSample, CLOUD_ANCHOR_KEY, ChangeHandler, MemoryStore, ObjectId, Pending,
    PlacementSet, ReadError, RemoteStore, Responder, WriteError,
};
use anchor_sync::store::object_id_from_animation_key;
use bevy::prelude::*;
use serde_json::Value;

/// Outgoing reducer calls. `Err` means the request never left this process.
pub trait ReducerLink: Send + Sync {
    fn publish_placement(&self, set: &PlacementSet) -> Result<(), String>;
    fn publish_animation_sample(&self, sample: &AnimationSample) -> Result<(), String>;
}

type WriteAck = Responder<Result<(), WriteError>>;

#[derive(Default)]
struct Waiting {
    /// Reducer outcomes arrive in call order, so acknowledgements are matched first in first out.
    placement: VecDeque<WriteAck>,
    samples: BTreeMap<ObjectId, VecDeque<WriteAck>>,
    /// Reads issued before the initial subscription was applied.
    reads: Vec<(String, Responder<Result<Value, ReadError>>)>,
    synced: bool,
    lost: Option<String>,
}

/// The half of the store fed by the connection's callbacks.
#[derive(Clone, Default)]
pub struct ServerState {
    mirror: MemoryStore,
    waiting: Arc<Mutex<Waiting>>,
}

impl ServerState {
    fn waiting(&self) -> MutexGuard<'_, Waiting> {
        self.waiting
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A subscribed row was inserted or updated. Subscribers below `key` are notified.
    pub fn row_changed(&self, key: &str, value: Value) {
        // The mirror never goes offline, so its completion carries nothing.
        let _ = self.mirror.write(key, value);
    }

    /// The initial rows are in the mirror; answers every read that was waiting for them.
    pub fn subscription_applied(&self) {
        let reads = {
            let mut waiting = self.waiting();
            waiting.synced = true;
            std::mem::take(&mut waiting.reads)
        };
        debug!("Subscription applied; answering {} waiting reads", reads.len());
        for (key, responder) in reads {
            responder.respond(self.mirror.snapshot(&key).ok_or(ReadError::NotFound));
        }
    }

    pub fn placement_acked(&self, outcome: Result<(), String>) {
        let Some(responder) = self.waiting().placement.pop_front() else {
            debug!("Placement outcome with no write waiting for it");
            return;
        };
        responder.respond(outcome.map_err(WriteError::Rejected));
    }

    pub fn sample_acked(&self, id: &ObjectId, outcome: Result<(), String>) {
        let responder = self
            .waiting()
            .samples
            .get_mut(id)
            .and_then(VecDeque::pop_front);
        if let Some(responder) = responder {
            responder.respond(outcome.map_err(WriteError::Rejected));
        }
    }

    /// The connection is gone. Everything still waiting fails, and so does every later call.
    pub fn connection_lost(&self, reason: &str) {
        let (placement, samples, reads) = {
            let mut waiting = self.waiting();
            waiting.lost = Some(reason.to_owned());
            (
                std::mem::take(&mut waiting.placement),
                std::mem::take(&mut waiting.samples),
                std::mem::take(&mut waiting.reads),
            )
        };
        warn!("Lost the server connection: {reason}");
        let unreachable = || WriteError::Unreachable(reason.to_owned());
        for responder in placement {
            responder.respond(Err(unreachable()));
        }
        for responder in samples.into_values().flatten() {
            responder.respond(Err(unreachable()));
        }
        for (_, responder) in reads {
            responder.respond(Err(ReadError::Unreachable(reason.to_owned())));
        }
    }
}

pub struct ServerStore {
    state: ServerState,
    link: Arc<dyn ReducerLink>,
}

impl ServerStore {
    pub fn new(state: ServerState, link: Arc<dyn ReducerLink>) -> Self {
        Self { state, link }
    }
}

impl RemoteStore for ServerStore {
    fn write(&self, key: &str, value: Value) -> Pending<Result<(), WriteError>> {
        // Held across the call so the acknowledgement cannot overtake its responder.
        let mut waiting = self.state.waiting();
        if let Some(reason) = &waiting.lost {
            return Pending::ready(Err(WriteError::Unreachable(reason.clone())));
        }

        if key == CLOUD_ANCHOR_KEY {
            let set = match PlacementSet::from_value(value) {
                Ok(set) => set,
                Err(err) => return Pending::ready(Err(WriteError::Encode(err.to_string()))),
            };
            if let Err(err) = self.link.publish_placement(&set) {
                return Pending::ready(Err(WriteError::Unreachable(err)));
            }
            let (responder, pending) = Pending::channel();
            waiting.placement.push_back(responder);
            return pending;
        }

        if object_id_from_animation_key(key).is_none() {
            return Pending::ready(Err(WriteError::Rejected(format!(
                "no server table backs {key}"
            ))));
        }
        let sample = match AnimationSample::decode_change(key, &value).map(|mut s| s.pop()) {
            Ok(Some(sample)) => sample,
            Ok(None) => return Pending::ready(Err(WriteError::Encode(format!("empty {key}")))),
            Err(err) => return Pending::ready(Err(WriteError::Encode(err.to_string()))),
        };
        if let Err(err) = self.link.publish_animation_sample(&sample) {
            return Pending::ready(Err(WriteError::Unreachable(err)));
        }
        let (responder, pending) = Pending::channel();
        waiting
            .samples
            .entry(sample.object_id)
            .or_default()
            .push_back(responder);
        pending
    }

    fn read(&self, key: &str) -> Pending<Result<Value, ReadError>> {
        let mut waiting = self.state.waiting();
        if let Some(reason) = &waiting.lost {
            return Pending::ready(Err(ReadError::Unreachable(reason.clone())));
        }
        if waiting.synced {
            return Pending::ready(self.state.mirror.snapshot(key).ok_or(ReadError::NotFound));
        }
        let (responder, pending) = Pending::channel();
        waiting.reads.push((key.to_owned(), responder));
        pending
    }

    fn subscribe(&self, key: &str, on_change: ChangeHandler) {
        self.state.mirror.subscribe(key, on_change);
    }
}
