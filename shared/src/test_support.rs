//! Scriptable tracking subsystem and store for unit tests.

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::{
    error::{ReadError, ResolveError, TrackError, WriteError},
    pending::{Pending, Responder},
    pose::ResolvedPose,
    store::{ChangeHandler, MemoryStore, RemoteStore},
    tracking::{
        HostedAnchor, MarkerImage, SessionHandle, TargetId, TrackingFeature, TrackingResult,
        TrackingState, TrackingSubsystem,
    },
};

type ResolveReply = Result<ResolvedPose, ResolveError>;

struct Script {
    results: Vec<TrackingResult>,
    /// `None` holds the request until released by the test.
    session_reply: Option<Result<SessionHandle, TrackError>>,
    held_sessions: Vec<Responder<Result<SessionHandle, TrackError>>>,
    resolve_reply: Option<ResolveReply>,
    held_resolves: Vec<Responder<ResolveReply>>,
    resolve_calls: Vec<String>,
    host_reply: Option<Result<HostedAnchor, TrackError>>,
    held_hosts: Vec<Responder<Result<HostedAnchor, TrackError>>>,
}

pub(crate) struct FakeTracker {
    script: Mutex<Script>,
}

impl FakeTracker {
    /// Sessions start immediately and every anchor resolves to the identity pose.
    pub(crate) fn new() -> Self {
        Self {
            script: Mutex::new(Script {
                results: Vec::new(),
                session_reply: Some(Ok(SessionHandle(1))),
                held_sessions: Vec::new(),
                resolve_reply: Some(Ok(ResolvedPose::identity())),
                held_resolves: Vec::new(),
                resolve_calls: Vec::new(),
                host_reply: Some(Ok(HostedAnchor {
                    id: "ABC123".into(),
                    pose: ResolvedPose::identity(),
                })),
                held_hosts: Vec::new(),
            }),
        }
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    pub(crate) fn show_marker(&self, id: &str, state: TrackingState) {
        self.script().results = vec![TrackingResult {
            target: TargetId::from(id),
            state,
        }];
    }

    pub(crate) fn hide_markers(&self) {
        self.script().results.clear();
    }

    pub(crate) fn set_session_reply(&self, reply: Option<Result<SessionHandle, TrackError>>) {
        self.script().session_reply = reply;
    }

    pub(crate) fn set_resolve_reply(&self, reply: Option<ResolveReply>) {
        self.script().resolve_reply = reply;
    }

    pub(crate) fn set_host_reply(&self, reply: Option<Result<HostedAnchor, TrackError>>) {
        self.script().host_reply = reply;
    }

    /// Answers the oldest held resolve request.
    pub(crate) fn release_resolve(&self, reply: ResolveReply) -> bool {
        let mut script = self.script();
        if script.held_resolves.is_empty() {
            return false;
        }
        script.held_resolves.remove(0).respond(reply)
    }

    pub(crate) fn release_session(&self, reply: Result<SessionHandle, TrackError>) -> bool {
        let mut script = self.script();
        if script.held_sessions.is_empty() {
            return false;
        }
        script.held_sessions.remove(0).respond(reply)
    }

    pub(crate) fn release_host(&self, reply: Result<HostedAnchor, TrackError>) -> bool {
        let mut script = self.script();
        if script.held_hosts.is_empty() {
            return false;
        }
        script.held_hosts.remove(0).respond(reply)
    }

    pub(crate) fn resolve_calls(&self) -> Vec<String> {
        self.script().resolve_calls.clone()
    }
}

impl TrackingSubsystem for FakeTracker {
    fn begin_session(
        &self,
        _required: &[TrackingFeature],
        _markers: &[MarkerImage],
    ) -> Pending<Result<SessionHandle, TrackError>> {
        let mut script = self.script();
        match script.session_reply.clone() {
            Some(reply) => Pending::ready(reply),
            None => {
                let (responder, pending) = Pending::channel();
                script.held_sessions.push(responder);
                pending
            }
        }
    }

    fn tracking_results(&self) -> Vec<TrackingResult> {
        self.script().results.clone()
    }

    fn resolve_anchor(&self, anchor_id: &str) -> Pending<ResolveReply> {
        let mut script = self.script();
        script.resolve_calls.push(anchor_id.to_owned());
        match script.resolve_reply.clone() {
            Some(reply) => Pending::ready(reply),
            None => {
                let (responder, pending) = Pending::channel();
                script.held_resolves.push(responder);
                pending
            }
        }
    }

    fn create_anchor(&self, _session: &SessionHandle) -> Pending<Result<HostedAnchor, TrackError>> {
        let mut script = self.script();
        match script.host_reply.clone() {
            Some(reply) => Pending::ready(reply),
            None => {
                let (responder, pending) = Pending::channel();
                script.held_hosts.push(responder);
                pending
            }
        }
    }
}

/// Store whose writes to chosen keys stay unanswered until the test releases them.
///
/// Everything else behaves like [`MemoryStore`].
pub(crate) struct StallingStore {
    inner: MemoryStore,
    stalls: Mutex<Stalls>,
}

#[derive(Default)]
struct Stalls {
    keys: Vec<String>,
    held: Vec<(String, Value, Responder<Result<(), WriteError>>)>,
    attempts: Vec<String>,
}

impl StallingStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            stalls: Mutex::new(Stalls::default()),
        }
    }

    fn stalls(&self) -> MutexGuard<'_, Stalls> {
        self.stalls.lock().unwrap()
    }

    /// Holds every later write to `key`.
    pub(crate) fn stall(&self, key: &str) {
        self.stalls().keys.push(key.to_owned());
    }

    /// Applies the oldest held write to `key`. Returns whether its writer was still waiting.
    pub(crate) fn release(&self, key: &str) -> bool {
        let held = {
            let mut stalls = self.stalls();
            match stalls.held.iter().position(|(k, _, _)| k == key) {
                Some(index) => stalls.held.remove(index),
                None => return false,
            }
        };
        let (key, value, responder) = held;
        self.inner.write(&key, value);
        responder.respond(Ok(()))
    }

    /// Number of writes issued for `key`, held or not.
    pub(crate) fn attempts(&self, key: &str) -> usize {
        self.stalls().attempts.iter().filter(|k| *k == key).count()
    }

    pub(crate) fn snapshot(&self, key: &str) -> Option<Value> {
        self.inner.snapshot(key)
    }
}

impl RemoteStore for StallingStore {
    fn write(&self, key: &str, value: Value) -> Pending<Result<(), WriteError>> {
        let mut stalls = self.stalls();
        stalls.attempts.push(key.to_owned());
        if !stalls.keys.iter().any(|k| k == key) {
            drop(stalls);
            return self.inner.write(key, value);
        }
        let (responder, pending) = Pending::channel();
        stalls.held.push((key.to_owned(), value, responder));
        pending
    }

    fn read(&self, key: &str) -> Pending<Result<Value, ReadError>> {
        self.inner.read(key)
    }

    fn subscribe(&self, key: &str, on_change: ChangeHandler) {
        self.inner.subscribe(key, on_change);
    }
}
