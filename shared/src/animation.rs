//! Animation Replicator: best-effort, last-write-wins replication of playback time.
//!
//! The admin's [`AnimationPublisher`] samples every active track on a fixed cadence and writes
//! one `animationState/<objectId>` record per object. Every participant's
//! [`AnimationSubscriber`] hard-seeks its local track to whatever value arrives last. There is
//! no clock sync, buffering or smoothing.

use std::collections::BTreeMap;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::{ANIMATION_PUBLISH_INTERVAL, ANIMATION_STATE_KEY, WRITE_TIMEOUT},
    error::{ReadError, WriteError},
    pending::{Pending, Poll},
    placement::ObjectId,
    role::RoleGate,
    scene::SceneRegistry,
    store::{RemoteStore, animation_state_key, object_id_from_animation_key},
};

#[derive(Serialize, Deserialize)]
struct SampleRecord {
    time: f32,
}

/// Latest playback time of one object.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSample {
    pub object_id: ObjectId,
    pub time: f32,
}

impl AnimationSample {
    pub fn new(object_id: impl Into<ObjectId>, time: f32) -> Self {
        Self {
            object_id: object_id.into(),
            time,
        }
    }

    pub fn key(&self) -> String {
        animation_state_key(&self.object_id)
    }

    pub fn to_value(&self) -> Result<Value, WriteError> {
        serde_json::to_value(SampleRecord { time: self.time })
            .map_err(|e| WriteError::Encode(e.to_string()))
    }

    /// Decodes a change notification under `animationState`.
    ///
    /// Accepts both a single `animationState/<id>` record and a write of the whole
    /// `animationState` map (`{ <id>: { "time": t }, .. }`). Bad entries of a map are logged
    /// and skipped; the rest still apply.
    pub fn decode_change(key: &str, value: &Value) -> Result<Vec<AnimationSample>, ReadError> {
        if key == ANIMATION_STATE_KEY {
            let Some(map) = value.as_object() else {
                return Err(ReadError::Malformed(format!("{key} is not a map")));
            };
            let samples = map
                .iter()
                .filter_map(
                    |(id, record)| match Self::decode_record(ObjectId::new(id.as_str()), record) {
                        Ok(sample) => Some(sample),
                        Err(err) => {
                            log::warn!("skipping animation entry: {err}");
                            None
                        }
                    },
                )
                .collect();
            return Ok(samples);
        }
        let id = object_id_from_animation_key(key)
            .ok_or_else(|| ReadError::Malformed(format!("unexpected key {key}")))?;
        Ok(vec![Self::decode_record(id, value)?])
    }

    fn decode_record(object_id: ObjectId, value: &Value) -> Result<AnimationSample, ReadError> {
        let record = SampleRecord::deserialize(value)
            .map_err(|e| ReadError::Malformed(format!("{object_id}: {e}")))?;
        if !record.time.is_finite() || record.time < 0.0 {
            return Err(ReadError::Malformed(format!(
                "{object_id}: invalid time {}",
                record.time
            )));
        }
        Ok(AnimationSample {
            object_id,
            time: record.time,
        })
    }
}

struct InFlight {
    pending: Pending<Result<(), WriteError>>,
    deadline: Duration,
}

/// Admin-side sampler. Runs for every participant; only an admin's ticks write anything.
pub struct AnimationPublisher {
    store: Arc<dyn RemoteStore>,
    role: Arc<RoleGate>,
    interval: Duration,
    write_timeout: Duration,
    next_tick: Option<Duration>,
    in_flight: BTreeMap<ObjectId, InFlight>,
}

impl AnimationPublisher {
    pub fn new(store: Arc<dyn RemoteStore>, role: Arc<RoleGate>) -> Self {
        Self {
            store,
            role,
            interval: ANIMATION_PUBLISH_INTERVAL,
            write_timeout: WRITE_TIMEOUT,
            next_tick: None,
            in_flight: BTreeMap::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Called every frame with the session clock. Returns how many samples were written.
    pub fn tick(&mut self, now: Duration, scene: &SceneRegistry) -> usize {
        self.settle_writes(now);

        if self.next_tick.is_some_and(|next| now < next) {
            return 0;
        }
        // After a stall, resume the cadence from now instead of bursting to catch up.
        self.next_tick = Some(match self.next_tick {
            Some(next) if now < next + self.interval => next + self.interval,
            _ => now + self.interval,
        });

        if !self.role.is_admin() {
            return 0;
        }

        let mut written = 0;
        for (id, time) in scene.active_tracks() {
            // One outstanding write per object; the next tick carries a fresher value anyway.
            if self.in_flight.contains_key(id) {
                continue;
            }
            let sample = AnimationSample::new(id.clone(), time);
            let value = match sample.to_value() {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("could not encode animation sample for {id}: {err}");
                    continue;
                }
            };
            let pending = self.store.write(&sample.key(), value);
            self.in_flight.insert(
                id.clone(),
                InFlight {
                    pending,
                    deadline: now + self.write_timeout,
                },
            );
            written += 1;
        }
        self.settle_writes(now);
        written
    }

    /// Objects whose last sample write has not completed yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn settle_writes(&mut self, now: Duration) {
        self.in_flight.retain(|id, write| match write.pending.poll() {
            Poll::Ready(Ok(())) => false,
            Poll::Ready(Err(err)) => {
                log::warn!("animation sample for {id} not written: {err}");
                false
            }
            Poll::Abandoned => {
                log::warn!("animation sample write for {id} was dropped by the store");
                false
            }
            Poll::Waiting if now >= write.deadline => {
                log::warn!("animation sample write for {id} timed out");
                false
            }
            Poll::Waiting => true,
        });
    }
}

/// Receives store notifications on any thread and queues them for the frame loop.
pub struct AnimationSubscriber {
    rx: mpsc::Receiver<AnimationSample>,
}

impl AnimationSubscriber {
    /// Subscribes to every `animationState/*` change for the rest of the session.
    pub fn attach(store: &dyn RemoteStore) -> Self {
        let (tx, rx) = mpsc::channel();
        store.subscribe(
            ANIMATION_STATE_KEY,
            Box::new(move |key: &str, value: &Value| {
                match AnimationSample::decode_change(key, value) {
                    Ok(samples) => {
                        for sample in samples {
                            // The receiver only goes away with the session.
                            let _ = tx.send(sample);
                        }
                    }
                    Err(err) => log::warn!("dropping animation update: {err}"),
                }
            }),
        );
        Self { rx }
    }

    /// Applies every queued sample as a hard seek. Samples for objects without a local track
    /// (asset still loading, or not animated) are dropped, not kept for later.
    ///
    /// Returns how many samples were applied.
    pub fn apply_pending(&mut self, scene: &mut SceneRegistry) -> usize {
        let mut applied = 0;
        while let Ok(sample) = self.rx.try_recv() {
            if scene.seek(&sample.object_id, sample.time) {
                applied += 1;
            } else {
                log::debug!(
                    "no playback track for {}; dropping sample at {}s",
                    sample.object_id,
                    sample.time
                );
            }
        }
        applied
    }
}
