//! Host environment signals (resize, touch, outside pointer) fanned out to
//! subscribers.
//!
//! Registration is scoped: [`ViewportBus::subscribe`] hands back a
//! [`Subscription`] guard and dropping it removes the listener.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, Weak},
};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::Viewport;

const SUBSCRIBER_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ViewportSignal {
    Resized(Viewport),
    TouchEnd { at_ms: u64 },
    PointerOutside,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    senders: HashMap<u64, Sender<ViewportSignal>>,
}

type SharedListeners = Arc<Mutex<Listeners>>;

#[derive(Clone, Default)]
pub struct ViewportBus {
    listeners: SharedListeners,
}

impl ViewportBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = crossbeam_channel::bounded(SUBSCRIBER_QUEUE_CAPACITY);
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.senders.insert(id, tx);
        debug!(subscription = id, "viewport listener registered");
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
            receiver: rx,
        }
    }

    /// Delivers `signal` to every live subscriber and returns how many got it.
    /// A subscriber whose queue is full misses this signal.
    pub fn publish(&self, signal: ViewportSignal) -> usize {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let mut delivered = 0;
        for (id, tx) in &listeners.senders {
            match tx.try_send(signal) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(
                        subscription = id,
                        "viewport listener queue full; dropping signal"
                    );
                }
                Err(TrySendError::Disconnected(_)) => {}
            }
        }
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .senders
            .len()
    }
}

/// Live listener registration. Unregisters on drop.
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
    receiver: Receiver<ViewportSignal>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn try_recv(&self) -> Option<ViewportSignal> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<ViewportSignal> {
        self.receiver.try_iter().collect()
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .senders
                .remove(&self.id);
            debug!(subscription = self.id, "viewport listener released");
        }
    }
}

#[cfg(test)]
#[path = "tests/signals_tests.rs"]
mod tests;
