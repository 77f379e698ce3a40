#![deny(unsafe_code)]

//! Schema types for DevTools protocol definitions.
//!
//! The protocol is described by a JSON document (`browser_protocol.json`,
//! `js_protocol.json`) listing domains, each with commands, events and types.
//! This crate deserializes that document with `facet-json` and offers the
//! small amount of analysis code generation needs:
//!
//! - [`classify`] decides how a property or type definition should be rendered
//! - [`Domain::dependencies`] derives the set of other domains a domain refers to
//! - [`QualifiedName`] parses and prints `Domain.member` identifiers
//!
//! Nothing here validates schema content. A malformed definition classifies as
//! [`ShapeKind::Unknown`] and it is up to the renderer to decide what to emit.

use std::collections::BTreeSet;

use facet::Facet;

mod error;
mod load;
mod name;
mod shape;

pub use error::SchemaError;
pub use load::{load_file, load_files, parse_str};
pub use name::{QualifiedName, QualifiedNameError, TypeRef};
pub use shape::{Primitive, ShapeKind, TypeLike, classify};

/// A complete protocol document.
#[derive(Debug, Clone, Default, Facet)]
pub struct ProtocolDocument {
    /// Protocol version, absent when the document was a bare domain array.
    #[facet(default)]
    pub version: Option<Version>,

    /// Domains in document order.
    pub domains: Vec<Domain>,
}

#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Version {
    pub major: String,
    pub minor: String,
}

impl ProtocolDocument {
    /// Look up a domain by name.
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.domain == name)
    }

    /// Append the domains of another document. The first version seen wins.
    pub fn merge(&mut self, other: ProtocolDocument) {
        if self.version.is_none() {
            self.version = other.version;
        }
        self.domains.extend(other.domains);
    }
}

/// A named grouping of commands, events and types (e.g. `Page`, `Runtime`).
#[derive(Debug, Clone, Facet)]
pub struct Domain {
    /// Domain name (e.g. "Page").
    pub domain: String,

    #[facet(default)]
    pub description: Option<String>,

    #[facet(default)]
    pub experimental: Option<bool>,

    #[facet(default)]
    pub deprecated: Option<bool>,

    /// Domains this one declares it depends on.
    #[facet(default)]
    pub dependencies: Option<Vec<String>>,

    /// Named types defined by this domain.
    #[facet(default)]
    pub types: Option<Vec<TypeDef>>,

    #[facet(default)]
    pub commands: Vec<Command>,

    #[facet(default)]
    pub events: Option<Vec<Event>>,
}

/// Request/reply operation defined under a domain.
#[derive(Debug, Clone, Facet)]
pub struct Command {
    pub name: String,

    #[facet(default)]
    pub description: Option<String>,

    #[facet(default)]
    pub parameters: Option<Vec<Property>>,

    #[facet(default)]
    pub returns: Option<Vec<Property>>,

    #[facet(default)]
    pub experimental: Option<bool>,

    #[facet(default)]
    pub deprecated: Option<bool>,

    /// Domain this command was moved to, if any.
    #[facet(default)]
    pub redirect: Option<String>,
}

/// Notification defined under a domain.
#[derive(Debug, Clone, Facet)]
pub struct Event {
    pub name: String,

    #[facet(default)]
    pub description: Option<String>,

    #[facet(default)]
    pub parameters: Option<Vec<Property>>,

    #[facet(default)]
    pub experimental: Option<bool>,

    #[facet(default)]
    pub deprecated: Option<bool>,
}

/// A named type (`types[]` entry of a domain).
#[derive(Debug, Clone, Facet)]
pub struct TypeDef {
    pub id: String,

    #[facet(default)]
    pub description: Option<String>,

    #[facet(default, rename = "type")]
    pub kind: Option<String>,

    #[facet(default, rename = "enum")]
    pub values: Option<Vec<String>>,

    #[facet(default)]
    pub properties: Option<Vec<Property>>,

    #[facet(default)]
    pub items: Option<Items>,

    #[facet(default)]
    pub experimental: Option<bool>,

    #[facet(default)]
    pub deprecated: Option<bool>,
}

/// A parameter, return value, or record field.
#[derive(Debug, Clone, Facet)]
pub struct Property {
    pub name: String,

    #[facet(default)]
    pub description: Option<String>,

    #[facet(default, rename = "type")]
    pub kind: Option<String>,

    #[facet(default, rename = "$ref")]
    pub reference: Option<String>,

    #[facet(default, rename = "enum")]
    pub values: Option<Vec<String>>,

    #[facet(default)]
    pub items: Option<Items>,

    #[facet(default)]
    pub optional: Option<bool>,

    #[facet(default)]
    pub experimental: Option<bool>,

    #[facet(default)]
    pub deprecated: Option<bool>,
}

/// Array item descriptor: either a primitive kind or a type reference.
#[derive(Debug, Clone, Facet)]
pub struct Items {
    #[facet(default, rename = "type")]
    pub kind: Option<String>,

    #[facet(default, rename = "$ref")]
    pub reference: Option<String>,
}

/// Which optional parts of a domain to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    pub skip_experimental: bool,
    pub skip_deprecated: bool,
}

impl Filter {
    fn keeps(&self, experimental: Option<bool>, deprecated: Option<bool>) -> bool {
        !(self.skip_experimental && experimental == Some(true)
            || self.skip_deprecated && deprecated == Some(true))
    }
}

impl Domain {
    pub fn types(&self) -> &[TypeDef] {
        self.types.as_deref().unwrap_or_default()
    }

    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn has_events(&self) -> bool {
        !self.events().is_empty()
    }

    pub fn is_experimental(&self) -> bool {
        self.experimental == Some(true)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated == Some(true)
    }

    /// Look up a type defined in this domain.
    pub fn type_def(&self, id: &str) -> Option<&TypeDef> {
        self.types().iter().find(|t| t.id == id)
    }

    /// Copy of this domain without the commands and events `filter` rejects.
    ///
    /// Types are always kept so that references from surviving members resolve.
    pub fn filtered(&self, filter: &Filter) -> Domain {
        let mut domain = self.clone();
        domain
            .commands
            .retain(|c| filter.keeps(c.experimental, c.deprecated));
        if let Some(events) = domain.events.as_mut() {
            events.retain(|e| filter.keeps(e.experimental, e.deprecated));
        }
        domain
    }

    /// Every property reachable from this domain's types, commands and events.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        let type_props = self
            .types()
            .iter()
            .flat_map(|t| t.properties.as_deref().unwrap_or_default());
        let command_props = self
            .commands
            .iter()
            .flat_map(|c| c.params().iter().chain(c.returns()));
        let event_props = self.events().iter().flat_map(|e| e.params());
        type_props.chain(command_props).chain(event_props)
    }

    /// Other domains this domain refers to.
    ///
    /// Derived from qualified `$ref`s (`Other.Type`) on every reachable
    /// property and on the type definitions themselves, unioned with the
    /// explicit `dependencies` list. The domain itself is never included.
    pub fn dependencies(&self) -> BTreeSet<String> {
        let mut deps: BTreeSet<String> = self
            .dependencies
            .iter()
            .flatten()
            .filter(|d| **d != self.domain)
            .cloned()
            .collect();

        let mut visit = |def: &dyn TypeLike| {
            let refs = def.reference().into_iter().chain(def.item_reference());
            for raw in refs {
                let type_ref = TypeRef::parse(raw, &self.domain);
                if type_ref.domain != self.domain {
                    deps.insert(type_ref.domain.to_string());
                }
            }
        };

        for ty in self.types() {
            visit(ty);
        }
        for prop in self.properties() {
            visit(prop);
        }

        deps
    }
}

impl Command {
    pub fn params(&self) -> &[Property] {
        self.parameters.as_deref().unwrap_or_default()
    }

    pub fn returns(&self) -> &[Property] {
        self.returns.as_deref().unwrap_or_default()
    }

    pub fn has_params(&self) -> bool {
        !self.params().is_empty()
    }

    pub fn has_returns(&self) -> bool {
        !self.returns().is_empty()
    }

    /// True when at least one declared parameter is not marked optional.
    pub fn has_mandatory_params(&self) -> bool {
        self.params().iter().any(|p| !p.is_optional())
    }
}

impl Event {
    pub fn params(&self) -> &[Property] {
        self.parameters.as_deref().unwrap_or_default()
    }

    /// Payload-bearing events carry parameters; signal-only events do not.
    pub fn is_signal_only(&self) -> bool {
        self.params().is_empty()
    }
}

impl Property {
    pub fn is_optional(&self) -> bool {
        self.optional == Some(true)
    }
}
