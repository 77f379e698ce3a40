// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! This domain is deprecated.
//! *[deprecated]*

#![allow(clippy::all, unused_imports)]

/// Types defined by the `Schema` domain.
pub mod types {
    use super::*;
    use facet::Facet;
}

/// Command results.
pub mod results {
    use super::*;
    use facet::Facet;

    /// Result of `Schema.getDomains`.
    #[derive(Debug, Facet)]
    pub struct GetDomains {
        pub domains: Vec<String>,
    }
}

/// This domain is deprecated.
/// *[deprecated]*
pub struct Schema<T>
where T: cdp_session::Transport,
{
    client: cdp_session::DomainClient<T>,
}

impl<T: cdp_session::Transport> cdp_session::Domain<T> for Schema<T> {
    const NAME: &'static str = "Schema";

    fn new(transport: ::std::sync::Arc<T>) -> Result<Self, cdp_session::SessionError> {
        Ok(Self {
            client: cdp_session::DomainClient::new(transport, Self::NAME, false)?,
        })
    }
}

impl<T> Schema<T>
where T: cdp_session::Transport,
{
    pub async fn get_domains(&self) -> Result<results::GetDomains, cdp_session::CallError> {
        self.client.fetch("getDomains").await
    }
}
