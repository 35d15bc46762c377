//! One-shot completions polled from the frame loop.
//!
//! Store and tracking calls complete on whatever thread the collaborator uses. The frame loop
//! never blocks on them: it keeps the [`Pending`] handle and polls it once per frame. Dropping the
//! handle abandons the request, and a reply arriving afterwards is discarded.

use futures::channel::oneshot;

/// Result of polling a [`Pending`] completion.
#[derive(Debug, PartialEq)]
pub enum Poll<T> {
    Ready(T),
    Waiting,
    /// The responder was dropped without replying, or the value was already taken.
    Abandoned,
}

/// Sending half handed to the collaborator that fulfils a request.
#[derive(Debug)]
pub struct Responder<T>(oneshot::Sender<T>);

impl<T> Responder<T> {
    /// Delivers the outcome. Returns `false` if the requester already gave up.
    pub fn respond(self, value: T) -> bool {
        self.0.send(value).is_ok()
    }

    pub fn is_abandoned(&self) -> bool {
        self.0.is_canceled()
    }
}

/// Receiving half of a single asynchronous outcome.
pub struct Pending<T> {
    poll_fn: Box<dyn FnMut() -> Poll<T> + Send>,
}

impl<T: Send + 'static> Pending<T> {
    /// Creates a connected responder/pending pair.
    pub fn channel() -> (Responder<T>, Self) {
        let (tx, mut rx) = oneshot::channel();
        let pending = Self {
            poll_fn: Box::new(move || match rx.try_recv() {
                Ok(Some(value)) => Poll::Ready(value),
                Ok(None) => Poll::Waiting,
                Err(oneshot::Canceled) => Poll::Abandoned,
            }),
        };
        (Responder(tx), pending)
    }

    /// A completion that is already available on the first poll.
    pub fn ready(value: T) -> Self {
        let mut slot = Some(value);
        Self {
            poll_fn: Box::new(move || slot.take().map_or(Poll::Abandoned, Poll::Ready)),
        }
    }

    /// Transforms the eventual value without waiting for it.
    pub fn map<U, F>(self, f: F) -> Pending<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let mut inner = self.poll_fn;
        let mut f = Some(f);
        Pending {
            poll_fn: Box::new(move || match inner() {
                Poll::Ready(value) => match f.take() {
                    Some(f) => Poll::Ready(f(value)),
                    None => Poll::Abandoned,
                },
                Poll::Waiting => Poll::Waiting,
                Poll::Abandoned => Poll::Abandoned,
            }),
        }
    }

    pub fn poll(&mut self) -> Poll<T> {
        (self.poll_fn)()
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pending { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_until_responder_replies() {
        let (responder, mut pending) = Pending::<u32>::channel();
        assert_eq!(pending.poll(), Poll::Waiting);

        assert!(responder.respond(7));
        assert_eq!(pending.poll(), Poll::Ready(7));
    }

    #[test]
    fn dropped_responder_is_abandoned() {
        let (responder, mut pending) = Pending::<u32>::channel();
        drop(responder);
        assert_eq!(pending.poll(), Poll::Abandoned);
    }

    #[test]
    fn reply_after_requester_gave_up_is_discarded() {
        let (responder, pending) = Pending::<u32>::channel();
        drop(pending);
        assert!(responder.is_abandoned());
        assert!(!responder.respond(1));
    }

    #[test]
    fn map_applies_once_value_arrives() {
        let (responder, pending) = Pending::<u32>::channel();
        let mut doubled = pending.map(|v| v * 2);
        assert_eq!(doubled.poll(), Poll::Waiting);

        responder.respond(21);
        assert_eq!(doubled.poll(), Poll::Ready(42));
    }

    #[test]
    fn ready_yields_value_once() {
        let mut pending = Pending::ready("done");
        assert_eq!(pending.poll(), Poll::Ready("done"));
        assert_eq!(pending.poll(), Poll::Abandoned);
    }
}
