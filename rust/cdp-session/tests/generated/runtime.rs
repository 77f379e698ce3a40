// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! Runtime domain exposes JavaScript runtime by means of remote evaluation and mirror objects.

#![allow(clippy::all, unused_imports)]

/// Types defined by the `Runtime` domain.
pub mod types {
    use super::*;
    use facet::Facet;

    /// Unique object identifier.
    pub type RemoteObjectId = String;

    /// Mirror object referencing original JavaScript object.
    #[derive(Debug, Facet)]
    pub struct RemoteObject {
        /// Object type.
        /// Allowed values: `object`, `function`, `undefined`, `string`, `number`, `boolean`.
        #[facet(rename = "type")]
        pub r#type: String,
        /// Remote object value.
        #[facet(default, skip_serializing_if = Option::is_none)]
        pub value: Option<cdp_session::Value>,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "objectId")]
        pub object_id: Option<types::RemoteObjectId>,
    }
}

/// Command parameters.
pub mod params {
    use super::*;
    use facet::Facet;

    /// Parameters of `Runtime.evaluate`.
    #[derive(Debug, Facet)]
    pub struct Evaluate {
        /// Expression to evaluate.
        pub expression: String,
        #[facet(default, skip_serializing_if = Option::is_none, rename = "returnByValue")]
        pub return_by_value: Option<bool>,
    }
}

/// Command results.
pub mod results {
    use super::*;
    use facet::Facet;

    /// Result of `Runtime.evaluate`.
    #[derive(Debug, Facet)]
    pub struct Evaluate {
        /// Evaluation result.
        pub result: Box<types::RemoteObject>,
    }
}

/// Runtime domain exposes JavaScript runtime by means of remote evaluation and mirror objects.
pub struct Runtime<T>
where T: cdp_session::Transport,
{
    client: cdp_session::DomainClient<T>,
}

impl<T: cdp_session::Transport> cdp_session::Domain<T> for Runtime<T> {
    const NAME: &'static str = "Runtime";

    fn new(transport: ::std::sync::Arc<T>) -> Result<Self, cdp_session::SessionError> {
        Ok(Self {
            client: cdp_session::DomainClient::new(transport, Self::NAME, true)?,
        })
    }
}

impl<T> Runtime<T>
where T: cdp_session::Transport,
{
    /// Evaluates expression on global object.
    pub async fn evaluate(&self, params: &params::Evaluate) -> Result<results::Evaluate, cdp_session::CallError> {
        self.client.invoke("evaluate", Some(params)).await
    }

    pub async fn enable(&self) -> Result<(), cdp_session::CallError> {
        self.client.call("enable", None).await.map(|_| ())
    }

    /// Issued when all executionContexts were cleared in browser
    pub fn on_execution_contexts_cleared(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.on("executionContextsCleared", move |_| listener())
    }

    /// Issued when all executionContexts were cleared in browser
    pub fn once_execution_contexts_cleared(&self, listener: impl Fn() + Send + Sync + 'static) -> cdp_session::ListenerId {
        self.client.once("executionContextsCleared", move |_| listener())
    }

    /// Remove a listener added by one of the `on_*` / `once_*` methods.
    pub fn off(&self, id: cdp_session::ListenerId) -> bool {
        self.client.off(id)
    }
}
