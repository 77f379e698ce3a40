// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! Actions and events related to the inspected page belong to the page domain.

#![allow(clippy::all, unused_imports)]

use super::{debugger, runtime};

/// Types defined by the `Page` domain.
pub mod types {
    use super::*;
    use facet::Facet;

    /// Unique frame identifier.
    pub type FrameId = String;

    /// Information about the Frame on the page.
    #[derive(Debug, Facet)]
    pub struct Frame {
        /// Frame unique identifier.
        pub id: types::FrameId,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "parentId")]
        pub parent_id: Option<types::FrameId>,
        pub url: String,
    }

    #[derive(Debug, Facet)]
    pub struct FrameTree {
        pub frame: Box<types::Frame>,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "childFrames")]
        #[facet(recursive_type)]
        pub child_frames: Option<Vec<types::FrameTree>>,
    }

    /// *[experimental]*
    /// Allowed values: `none`, `child`, `root`.
    pub type AdFrameType = String;
}

/// Command parameters.
pub mod params {
    use super::*;
    use facet::Facet;

    /// Parameters of `Page.navigate`.
    #[derive(Debug, Facet)]
    pub struct Navigate {
        /// URL to navigate the page to.
        pub url: String,
        #[facet(default, skip_serializing_if = Option::is_none)]
        pub referrer: Option<String>,
    }

    /// Parameters of `Page.reload`.
    #[derive(Debug, Facet)]
    pub struct Reload {
        #[facet(default, skip_serializing_if = Option::is_none, rename = "ignoreCache")]
        pub ignore_cache: Option<bool>,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "scriptToEvaluateOnLoad")]
        pub script_to_evaluate_on_load: Option<String>,
    }

    /// Parameters of `Page.evaluateOnFrame`.
    #[derive(Debug, Facet)]
    pub struct EvaluateOnFrame {
        #[facet(rename = "frameId")]
        pub frame_id: types::FrameId,
        pub object: Box<runtime::types::RemoteObject>,
    }
}

/// Command results.
pub mod results {
    use super::*;
    use facet::Facet;

    /// Result of `Page.getFrameTree`.
    #[derive(Debug, Facet)]
    pub struct GetFrameTree {
        #[facet(rename = "frameTree")]
        pub frame_tree: Box<types::FrameTree>,
    }

    /// Result of `Page.navigate`.
    #[derive(Debug, Facet)]
    pub struct Navigate {
        #[facet(rename = "frameId")]
        pub frame_id: types::FrameId,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "errorText")]
        pub error_text: Option<String>,
    }

    /// Result of `Page.printToPDF`.
    #[derive(Debug, Facet)]
    pub struct PrintToPdf {
        pub data: String,
    }

    /// Result of `Page.evaluateOnFrame`.
    #[derive(Debug, Facet)]
    pub struct EvaluateOnFrame {
        pub results: Vec<runtime::types::RemoteObject>,
    }
}

/// Event payloads.
pub mod events {
    use super::*;
    use facet::Facet;

    /// Payload of `Page.loadEventFired`.
    #[derive(Debug, Facet)]
    pub struct LoadEventFired {
        pub timestamp: f64,
    }

    /// Payload of `Page.frameNavigated`.
    #[derive(Debug, Facet)]
    pub struct FrameNavigated {
        pub frame: Box<types::Frame>,
    }
}

/// Actions and events related to the inspected page belong to the page domain.
pub struct Page<T>
where T: cdp_session::Transport,
{
    client: cdp_session::DomainClient<T>,
}

impl<T: cdp_session::Transport> cdp_session::Domain<T> for Page<T> {
    const NAME: &'static str = "Page";

    fn new(transport: ::std::sync::Arc<T>) -> Result<Self, cdp_session::SessionError> {
        Ok(Self {
            client: cdp_session::DomainClient::new(transport, Self::NAME, true)?,
        })
    }
}

impl<T> Page<T>
where T: cdp_session::Transport,
{
    /// Enables page domain notifications.
    pub async fn enable(&self) -> Result<(), cdp_session::CallError> {
        self.client.call("enable", None).await.map(|_| ())
    }

    pub async fn get_frame_tree(&self) -> Result<results::GetFrameTree, cdp_session::CallError> {
        self.client.fetch("getFrameTree").await
    }

    /// Navigates current page to the given URL.
    pub async fn navigate(&self, params: &params::Navigate) -> Result<results::Navigate, cdp_session::CallError> {
        self.client.invoke("navigate", Some(params)).await
    }

    pub async fn reload(&self, params: Option<&params::Reload>) -> Result<(), cdp_session::CallError> {
        self.client.send("reload", params).await.map(|_| ())
    }

    /// *[experimental]*
    pub async fn print_to_pdf(&self) -> Result<results::PrintToPdf, cdp_session::CallError> {
        self.client.fetch("printToPDF").await
    }

    /// *[deprecated]*
    pub async fn clear_device_orientation_override(&self) -> Result<(), cdp_session::CallError> {
        self.client.call("clearDeviceOrientationOverride", None).await.map(|_| ())
    }

    /// *[experimental]*
    pub async fn evaluate_on_frame(&self, params: &params::EvaluateOnFrame) -> Result<results::EvaluateOnFrame, cdp_session::CallError> {
        self.client.invoke("evaluateOnFrame", Some(params)).await
    }

    pub fn on_load_event_fired(&self, listener: impl Fn(events::LoadEventFired) + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.on_typed("loadEventFired", listener)
    }

    pub fn once_load_event_fired(&self, listener: impl Fn(events::LoadEventFired) + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.once_typed("loadEventFired", listener)
    }

    pub fn on_interstitial_shown(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.on("interstitialShown", move |_| listener())
    }

    pub fn once_interstitial_shown(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.once("interstitialShown", move |_| listener())
    }

    /// Fired once navigation of the frame has completed.
    pub fn on_frame_navigated(&self, listener: impl Fn(events::FrameNavigated) + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.on_typed("frameNavigated", listener)
    }

    /// Fired once navigation of the frame has completed.
    pub fn once_frame_navigated(&self, listener: impl Fn(events::FrameNavigated) + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.once_typed("frameNavigated", listener)
    }

    /// Remove a listener added by one of the `on_*` / `once_*` methods.
    pub fn off(&self, id: cdp_session::ListenerId) -> bool {
        self.client.off(id)
    }
}
