//! Code generation targets.

pub mod rust;
pub mod typescript;
