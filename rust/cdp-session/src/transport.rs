//! Debugger transport abstraction.
//!
//! A [`Transport`] is the handle generated clients drive: it reports and
//! establishes attachment, sends `Domain.command` requests, and delivers every
//! incoming `Domain.event` notification to registered listeners.
//!
//! Implementations:
//! - an embedder's debugger handle (for example a browser's remote debugging pipe)
//! - test doubles that record commands and replay canned replies

use std::future::Future;
use std::sync::Arc;

use facet::Facet;

use crate::{TransportError, Value};

/// Trait for debugger handles that generated domain clients talk through.
///
/// A transport is shared by every domain client of a session, so all methods
/// take `&self`.
pub trait Transport: Send + Sync + 'static {
    /// Whether the debugger is currently attached to its target.
    fn is_attached(&self) -> bool;

    /// Attach to the target. Only called when [`Transport::is_attached`] is false.
    fn attach(&self) -> Result<(), TransportError>;

    /// Send `method` (`Domain.command`) with its params object and wait for the reply.
    fn send_command(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Reply, TransportError>> + Send;

    /// Register a listener for every incoming notification.
    ///
    /// Each domain client with events registers exactly one, and removes it
    /// with [`Transport::remove_listener`] when dropped.
    fn on_message(&self, listener: MessageListener) -> SubscriptionId;

    /// Remove a listener added by [`Transport::on_message`]. Unknown ids are
    /// ignored.
    fn remove_listener(&self, id: SubscriptionId);
}

/// Identifies a listener registered with a transport. Assigned by the
/// transport, unique among its live listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback receiving every notification delivered by a transport.
pub type MessageListener = Arc<dyn Fn(&IncomingMessage) + Send + Sync>;

/// A notification from the remote end.
#[derive(Debug)]
pub struct IncomingMessage {
    /// Qualified event name, `Domain.event`.
    pub method: String,
    pub params: Value,
}

/// The remote end's answer to a command: an error, a result, or neither.
#[derive(Debug, Default)]
pub struct Reply {
    pub error: Option<ReplyError>,
    pub result: Option<Value>,
}

impl Reply {
    pub fn ok(result: Value) -> Self {
        Self {
            error: None,
            result: Some(result),
        }
    }

    pub fn err(error: ReplyError) -> Self {
        Self {
            error: Some(error),
            result: None,
        }
    }
}

/// Error object of a reply. Fields are optional on the wire; only an error
/// with both a message and a code fails the command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct ReplyError {
    #[facet(default)]
    pub message: Option<String>,
    #[facet(default)]
    pub code: Option<i64>,
    #[facet(default)]
    pub data: Option<String>,
}

impl ReplyError {
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: Some(message.into()),
            code: Some(code),
            data: None,
        }
    }
}
