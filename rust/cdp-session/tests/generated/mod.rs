// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! Typed clients for every protocol domain.

pub mod error;
pub mod runtime;
pub mod debugger;
pub mod page;
pub mod schema;

/// Entry point exposing every protocol domain over one transport.
pub struct Protocol<T>
where T: cdp_session::Transport,
{
    transport: ::std::sync::Arc<T>,
    runtime: cdp_session::DomainSlot<runtime::Runtime<T>>,
    debugger: cdp_session::DomainSlot<debugger::Debugger<T>>,
    page: cdp_session::DomainSlot<page::Page<T>>,
    schema: cdp_session::DomainSlot<schema::Schema<T>>,
}

impl<T> Protocol<T>
where T: cdp_session::Transport,
{
    /// Wrap `transport`, attaching it first if it is not attached yet.
    pub fn new(transport: ::std::sync::Arc<T>) -> Result<Self, cdp_session::SessionError> {
        cdp_session::attach_transport(&*transport)?;
        Ok(Self {
            transport,
            runtime: cdp_session::DomainSlot::new(),
            debugger: cdp_session::DomainSlot::new(),
            page: cdp_session::DomainSlot::new(),
            schema: cdp_session::DomainSlot::new(),
        })
    }

    pub fn transport(&self) -> &::std::sync::Arc<T> {
        &self.transport
    }

    /// The `Runtime` domain, constructed on first access.
    pub fn runtime(&self) -> Result<&runtime::Runtime<T>, cdp_session::SessionError> {
        self.runtime.get_or_init(&self.transport)
    }

    /// The `Debugger` domain, constructed on first access.
    pub fn debugger(&self) -> Result<&debugger::Debugger<T>, cdp_session::SessionError> {
        self.debugger.get_or_init(&self.transport)
    }

    /// The `Page` domain, constructed on first access.
    pub fn page(&self) -> Result<&page::Page<T>, cdp_session::SessionError> {
        self.page.get_or_init(&self.transport)
    }

    /// The `Schema` domain, constructed on first access.
    pub fn schema(&self) -> Result<&schema::Schema<T>, cdp_session::SessionError> {
        self.schema.get_or_init(&self.transport)
    }
}
