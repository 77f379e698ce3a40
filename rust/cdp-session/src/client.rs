use std::sync::Arc;

use facet::Facet;
use tracing::{debug, warn};

use crate::events::{EventHub, Listener, ListenerId, route_message};
use crate::payload;
use crate::{
    CallError, IncomingMessage, ProtocolError, SessionError, SubscriptionId, Transport, Value,
};

/// The runtime half of a generated domain client.
///
/// Generated code wraps one `DomainClient` per domain and forwards each
/// command and event subscription to it with short (unqualified) names.
pub struct DomainClient<T: Transport> {
    transport: Arc<T>,
    domain: &'static str,
    events: Arc<EventHub>,
    subscription: Option<SubscriptionId>,
}

impl<T: Transport> DomainClient<T> {
    /// Create the client for `domain`.
    ///
    /// Fails with [`SessionError::NotAttached`] unless the transport is
    /// attached. When `has_events` is set, one message listener is registered
    /// on the transport. It is removed again when the client is dropped.
    pub fn new(
        transport: Arc<T>,
        domain: &'static str,
        has_events: bool,
    ) -> Result<Self, SessionError> {
        if !transport.is_attached() {
            return Err(SessionError::NotAttached { domain });
        }

        let events = Arc::new(EventHub::new());
        let subscription = has_events.then(|| {
            let hub = Arc::downgrade(&events);
            transport.on_message(Arc::new(move |message: &IncomingMessage| {
                if let Some(hub) = hub.upgrade() {
                    route_message(domain, &hub, message);
                }
            }))
        });

        debug!(domain, has_events, "domain client created");
        Ok(Self {
            transport,
            domain,
            events,
            subscription,
        })
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Send `Domain.command` with raw params (`{}` when `None`) and return the
    /// raw result.
    ///
    /// A reply error fails the call only when it carries both a message and a
    /// code; any other reply resolves with its result, possibly `None`.
    pub async fn call(
        &self,
        command: &str,
        params: Option<Value>,
    ) -> Result<Option<Value>, CallError> {
        let method = format!("{}.{command}", self.domain);
        let params = match params {
            Some(params) => params,
            None => payload::empty_object()?,
        };

        debug!(%method, "sending command");
        let reply = self.transport.send_command(&method, params).await?;

        if let Some(error) = reply.error {
            if let (Some(message), Some(code)) = (error.message, error.code) {
                debug!(%method, code, "command failed");
                return Err(ProtocolError {
                    message,
                    code,
                    method,
                }
                .into());
            }
        }
        Ok(reply.result)
    }

    /// Like [`DomainClient::call`], with typed params.
    pub async fn send<P>(
        &self,
        command: &str,
        params: Option<&P>,
    ) -> Result<Option<Value>, CallError>
    where
        P: for<'a> Facet<'a>,
    {
        let params = params.map(payload::encode).transpose()?;
        self.call(command, params).await
    }

    /// Send typed params and decode the result. A reply without a result
    /// decodes from `{}`, which succeeds when every result field is optional.
    pub async fn invoke<P, R>(&self, command: &str, params: Option<&P>) -> Result<R, CallError>
    where
        P: for<'a> Facet<'a>,
        R: for<'a> Facet<'a>,
    {
        let result = self.send(command, params).await?;
        decode_result(result)
    }

    /// Call a command that takes no params and decode its result.
    pub async fn fetch<R>(&self, command: &str) -> Result<R, CallError>
    where
        R: for<'a> Facet<'a>,
    {
        let result = self.call(command, None).await?;
        decode_result(result)
    }

    /// Subscribe to every emission of `event`, receiving raw params.
    pub fn on(
        &self,
        event: &str,
        listener: impl Fn(&Value) + Send + Sync + 'static,
    ) -> ListenerId {
        self.events.on(event, Arc::new(listener))
    }

    /// Subscribe to the next emission of `event` only.
    pub fn once(
        &self,
        event: &str,
        listener: impl Fn(&Value) + Send + Sync + 'static,
    ) -> ListenerId {
        self.events.once(event, Arc::new(listener))
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Subscribe with params decoded into `E`. Payloads that fail to decode
    /// are logged and skipped.
    pub fn on_typed<E>(
        &self,
        event: &str,
        listener: impl Fn(E) + Send + Sync + 'static,
    ) -> ListenerId
    where
        E: for<'a> Facet<'a>,
    {
        self.events.on(event, typed(self.domain, event, listener))
    }

    pub fn once_typed<E>(
        &self,
        event: &str,
        listener: impl Fn(E) + Send + Sync + 'static,
    ) -> ListenerId
    where
        E: for<'a> Facet<'a>,
    {
        self.events.once(event, typed(self.domain, event, listener))
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.events.listener_count(event)
    }
}

fn decode_result<R>(result: Option<Value>) -> Result<R, CallError>
where
    R: for<'a> Facet<'a>,
{
    let result = match result {
        Some(result) => result,
        None => payload::empty_object()?,
    };
    Ok(payload::decode(&result)?)
}

fn typed<E, F>(domain: &'static str, event: &str, listener: F) -> Listener
where
    E: for<'a> Facet<'a>,
    F: Fn(E) + Send + Sync + 'static,
{
    let event = event.to_string();
    Arc::new(move |params: &Value| match payload::decode::<E>(params) {
        Ok(params) => listener(params),
        Err(e) => warn!(domain, event = %event, error = %e, "dropping undecodable event payload"),
    })
}

impl<T: Transport> Drop for DomainClient<T> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.transport.remove_listener(id);
            debug!(domain = self.domain, "message listener removed");
        }
    }
}

impl<T: Transport> std::fmt::Debug for DomainClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainClient")
            .field("domain", &self.domain)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
