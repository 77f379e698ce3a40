//! Per-domain event listeners.
//!
//! Each domain client owns one [`EventHub`]. The transport's message listener
//! feeds it through [`route_message`], which keeps only notifications for the
//! hub's own domain.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cdp_schema::QualifiedName;
use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::{IncomingMessage, Value};

/// Callback receiving an event's raw params.
pub type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle returned by every subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    once: bool,
    listener: Listener,
}

/// Listeners keyed by short event name (`loadEventFired`, not `Page.loadEventFired`).
#[derive(Default)]
pub struct EventHub {
    listeners: Mutex<HashMap<String, Vec<Entry>>>,
    next_id: AtomicU64,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `listener` for every emission of `event`.
    pub fn on(&self, event: &str, listener: Listener) -> ListenerId {
        self.add(event, listener, false)
    }

    /// Call `listener` for the next emission of `event` only.
    pub fn once(&self, event: &str, listener: Listener) -> ListenerId {
        self.add(event, listener, true)
    }

    fn add(&self, event: &str, listener: Listener, once: bool) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .entry(event.to_string())
            .or_default()
            .push(Entry { id, once, listener });
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let mut removed = false;
        listeners.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            removed |= entries.len() != before;
            !entries.is_empty()
        });
        removed
    }

    /// Deliver `params` to every listener of `event`, in subscription order.
    ///
    /// One-shot listeners are removed before any listener runs, so a listener
    /// may subscribe or unsubscribe without deadlocking. Returns the number of
    /// listeners called.
    pub fn emit(&self, event: &str, params: &Value) -> usize {
        let fired: Vec<Listener> = {
            let mut listeners = self.listeners.lock();
            let Some(entries) = listeners.get_mut(event) else {
                return 0;
            };
            let fired = entries.iter().map(|e| Arc::clone(&e.listener)).collect();
            entries.retain(|e| !e.once);
            if entries.is_empty() {
                listeners.remove(event);
            }
            fired
        };

        for listener in &fired {
            listener(params);
        }
        fired.len()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.lock().get(event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.lock();
        let mut counts: Vec<(&str, usize)> = listeners
            .iter()
            .map(|(event, entries)| (event.as_str(), entries.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventHub").field("listeners", &counts).finish()
    }
}

/// Emit `message` on `hub` if it belongs to `domain`.
///
/// Names without exactly one `.` or with an empty half are dropped with a
/// warning. Returns the number of listeners called.
pub fn route_message(domain: &str, hub: &EventHub, message: &IncomingMessage) -> usize {
    let name = match QualifiedName::parse(&message.method) {
        Ok(name) => name,
        Err(e) => {
            warn!(domain, error = %e, "dropping malformed event name");
            return 0;
        }
    };
    if name.domain != domain {
        return 0;
    }
    trace!(domain, event = name.member, "dispatching event");
    hub.emit(name.member, &message.params)
}
