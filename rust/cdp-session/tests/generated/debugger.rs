// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! Debugger domain exposes JavaScript debugging capabilities.

#![allow(clippy::all, unused_imports)]

/// Types defined by the `Debugger` domain.
pub mod types {
    use super::*;
    use facet::Facet;

    /// Breakpoint identifier.
    pub type BreakpointId = String;
}

/// Command parameters.
pub mod params {
    use super::*;
    use facet::Facet;

    /// Parameters of `Debugger.removeBreakpoint`.
    #[derive(Debug, Facet)]
    pub struct RemoveBreakpoint {
        #[facet(rename = "breakpointId")]
        pub breakpoint_id: types::BreakpointId,
    }
}

/// Debugger domain exposes JavaScript debugging capabilities.
pub struct Debugger<T>
where T: cdp_session::Transport,
{
    client: cdp_session::DomainClient<T>,
}

impl<T: cdp_session::Transport> cdp_session::Domain<T> for Debugger<T> {
    const NAME: &'static str = "Debugger";

    fn new(transport: ::std::sync::Arc<T>) -> Result<Self, cdp_session::SessionError> {
        Ok(Self {
            client: cdp_session::DomainClient::new(transport, Self::NAME, true)?,
        })
    }
}

impl<T> Debugger<T>
where T: cdp_session::Transport,
{
    /// Resumes JavaScript execution.
    pub async fn resume(&self) -> Result<(), cdp_session::CallError> {
        self.client.call("resume", None).await.map(|_| ())
    }

    pub async fn remove_breakpoint(&self, params: &params::RemoveBreakpoint) -> Result<(), cdp_session::CallError> {
        self.client.send("removeBreakpoint", Some(params)).await.map(|_| ())
    }

    /// Fired when the virtual machine resumed execution.
    pub fn on_resumed(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.on("resumed", move |_| listener())
    }

    /// Fired when the virtual machine resumed execution.
    pub fn once_resumed(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.once("resumed", move |_| listener())
    }

    /// Remove a listener added by one of the `on_*` / `once_*` methods.
    pub fn off(&self, id: cdp_session::ListenerId) -> bool {
        self.client.off(id)
    }
}
