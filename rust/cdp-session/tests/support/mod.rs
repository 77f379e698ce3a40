#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use cdp_session::{
    IncomingMessage, MessageListener, Reply, ReplyError, SubscriptionId, Transport,
    TransportError, Value,
};
use parking_lot::Mutex;

/// In-memory transport: records every command, answers from a queue of
/// canned replies (an empty reply when none is queued), and lets tests push
/// notifications.
#[derive(Default)]
pub struct MockTransport {
    attached: AtomicBool,
    attach_calls: AtomicUsize,
    refuse_attach: AtomicBool,
    sent: Mutex<Vec<(String, String)>>,
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    listeners: Mutex<Vec<(SubscriptionId, MessageListener)>>,
    next_subscription: AtomicU64,
}

impl MockTransport {
    pub fn attached() -> Arc<Self> {
        let transport = Self::default();
        transport.attached.store(true, Ordering::SeqCst);
        Arc::new(transport)
    }

    pub fn detached() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn refusing_attach() -> Arc<Self> {
        let transport = Self::default();
        transport.refuse_attach.store(true, Ordering::SeqCst);
        Arc::new(transport)
    }

    pub fn is_attached_now(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls.load(Ordering::SeqCst)
    }

    /// Queue a reply with the given JSON result for `method`.
    pub fn reply_ok(&self, method: &str, result_json: &str) {
        self.push_reply(method, Reply::ok(value(result_json)));
    }

    pub fn reply_err(&self, method: &str, error: ReplyError) {
        self.push_reply(method, Reply::err(error));
    }

    pub fn push_reply(&self, method: &str, reply: Reply) {
        self.replies
            .lock()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Commands sent so far, as `(method, params as JSON)`.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }

    pub fn subscriptions(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Deliver a notification to every registered listener.
    pub fn emit(&self, method: &str, params_json: &str) {
        let listeners: Vec<MessageListener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        let message = IncomingMessage {
            method: method.to_string(),
            params: value(params_json),
        };
        for listener in listeners {
            listener(&message);
        }
    }
}

impl Transport for MockTransport {
    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    fn attach(&self) -> Result<(), TransportError> {
        self.attach_calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse_attach.load(Ordering::SeqCst) {
            return Err(TransportError::AttachFailed("target closed".into()));
        }
        self.attached.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn send_command(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Reply, TransportError>> + Send {
        let params = facet_json::to_string(&params);
        self.sent.lock().push((method.to_string(), params));
        let reply = self
            .replies
            .lock()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default();
        std::future::ready(Ok(reply))
    }

    fn on_message(&self, listener: MessageListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push((id, listener));
        id
    }

    fn remove_listener(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(existing, _)| *existing != id);
    }
}

pub fn value(json: &str) -> Value {
    facet_json::from_str(json).unwrap()
}

pub fn json(value: &Value) -> String {
    facet_json::to_string(value)
}
