use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{SessionError, Transport, TransportError};

/// A generated domain client.
pub trait Domain<T: Transport>: Sized {
    /// Domain name as it appears on the wire (`Page`, `DOMDebugger`).
    const NAME: &'static str;

    /// Create the client. Fails if the transport is not attached.
    fn new(transport: Arc<T>) -> Result<Self, SessionError>;
}

/// A façade's lazily constructed domain client.
///
/// The client is built on first access and the same instance is returned
/// afterwards. A failed construction leaves the slot empty.
pub struct DomainSlot<D> {
    cell: OnceCell<D>,
}

impl<D> DomainSlot<D> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_init<T>(&self, transport: &Arc<T>) -> Result<&D, SessionError>
    where
        T: Transport,
        D: Domain<T>,
    {
        self.cell.get_or_try_init(|| {
            debug!(domain = D::NAME, "constructing domain client");
            D::new(Arc::clone(transport))
        })
    }

    /// The client, if it has been constructed.
    pub fn get(&self) -> Option<&D> {
        self.cell.get()
    }
}

impl<D> Default for DomainSlot<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for DomainSlot<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainSlot")
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}

/// Attach `transport` unless it already is. Façades call this on construction.
pub fn attach_transport<T: Transport>(transport: &T) -> Result<(), SessionError> {
    if transport.is_attached() {
        return Ok(());
    }
    transport.attach().map_err(SessionError::Attach)?;
    if !transport.is_attached() {
        return Err(SessionError::Attach(TransportError::AttachFailed(
            "transport still detached after attach".to_string(),
        )));
    }
    debug!("transport attached");
    Ok(())
}
