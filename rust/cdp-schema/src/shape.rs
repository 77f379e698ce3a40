//! Shape classification for codegen.
//!
//! Property definitions, type definitions and array item descriptors all
//! describe a value with the same handful of keys (`type`, `$ref`, `enum`,
//! `items`). [`classify`] turns whichever combination is present into a
//! single [`ShapeKind`] using a fixed precedence, so every target renders the
//! same definition the same way.

use crate::{Items, Property, TypeDef};

/// Primitive value kinds.
///
/// The schema's `integer` is folded into [`Primitive::Number`]; that is the
/// only normalisation performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Any,
}

impl Primitive {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "object" => Some(Primitive::Object),
            "array" => Some(Primitive::Array),
            "string" => Some(Primitive::String),
            "integer" | "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            "any" => Some(Primitive::Any),
            _ => None,
        }
    }
}

/// Classification of a definition for codegen purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind<'a> {
    /// `$ref` to a named type, raw as written (`"FrameId"` or `"Runtime.RemoteObject"`).
    Reference(&'a str),
    /// Array whose items are a primitive kind.
    ArrayOf(Primitive),
    /// Array whose items reference a named type.
    ArrayOfReference(&'a str),
    /// Closed set of string literals.
    Enum(&'a [String]),
    /// Bare primitive.
    Primitive(Primitive),
    /// Nothing recognisable. Renderers fall back to their "unknown" type.
    Unknown,
}

/// Anything that carries the `type` / `$ref` / `enum` / `items` keys.
pub trait TypeLike {
    fn kind(&self) -> Option<&str>;
    fn reference(&self) -> Option<&str>;
    fn values(&self) -> Option<&[String]>;
    fn items(&self) -> Option<&Items>;

    fn item_reference(&self) -> Option<&str> {
        self.items().and_then(|i| i.reference.as_deref())
    }
}

impl TypeLike for Property {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }
}

impl TypeLike for TypeDef {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn reference(&self) -> Option<&str> {
        None
    }

    fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }
}

impl TypeLike for Items {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn values(&self) -> Option<&[String]> {
        None
    }

    fn items(&self) -> Option<&Items> {
        None
    }
}

/// Classify a definition.
///
/// Precedence: explicit reference, array of primitive, array of reference,
/// enum, bare primitive. Anything else is [`ShapeKind::Unknown`].
pub fn classify<T: TypeLike + ?Sized>(def: &T) -> ShapeKind<'_> {
    if let Some(reference) = def.reference() {
        return ShapeKind::Reference(reference);
    }

    if let Some(items) = def.items() {
        if let Some(primitive) = items.kind.as_deref().and_then(Primitive::from_kind) {
            return ShapeKind::ArrayOf(primitive);
        }
        if let Some(reference) = items.reference.as_deref() {
            return ShapeKind::ArrayOfReference(reference);
        }
    }

    if let Some(values) = def.values() {
        return ShapeKind::Enum(values);
    }

    match def.kind().and_then(Primitive::from_kind) {
        Some(primitive) => ShapeKind::Primitive(primitive),
        None => ShapeKind::Unknown,
    }
}
