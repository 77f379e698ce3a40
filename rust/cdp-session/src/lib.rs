#![deny(unsafe_code)]

//! Runtime for generated DevTools protocol clients.
//!
//! Generated code (see `cdp-codegen`, Rust target) is thin: each domain
//! struct wraps a [`DomainClient`] and each façade holds one [`DomainSlot`]
//! per domain. Everything with behaviour lives here:
//!
//! - [`Transport`]: the debugger handle contract (attach, send, notifications)
//! - [`DomainClient`]: command calls with reply-error detection, plus a
//!   per-domain [`EventHub`] fed by the transport's notifications
//! - [`payload`]: conversion between generated structs and [`Value`]
//! - [`DomainSlot`] / [`attach_transport`]: lazy, memoized façade accessors
//!
//! # Event routing
//!
//! ```text
//! transport notification "Page.loadEventFired"
//!   → every registered message listener (one per domain client with events)
//!   → route_message("Page", ...)  splits on the single '.', keeps its own domain
//!   → EventHub::emit("loadEventFired", params)
//! ```

mod client;
mod domain;
mod errors;
pub mod events;
pub mod payload;
mod transport;

pub use client::DomainClient;
pub use domain::{Domain, DomainSlot, attach_transport};
pub use errors::{CallError, PayloadError, ProtocolError, SessionError, TransportError};
pub use events::{EventHub, ListenerId};
pub use transport::{
    IncomingMessage, MessageListener, Reply, ReplyError, SubscriptionId, Transport,
};

/// Dynamic JSON-shaped value used for raw params, results and event payloads.
pub use facet_value::Value;
