// @generated by cdp-codegen
// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`

//! Errors raised by generated clients.

pub use cdp_session::{CallError, PayloadError, ProtocolError, SessionError, TransportError};
