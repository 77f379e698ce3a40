/// Error raised by a transport itself, before any reply is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Attaching to the target failed.
    AttachFailed(String),
    /// The debugger detached or the target went away.
    Closed,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::AttachFailed(reason) => write!(f, "attach failed: {reason}"),
            TransportError::Closed => write!(f, "transport closed"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Error constructing a domain client or a façade.
#[derive(Debug)]
pub enum SessionError {
    /// A domain client was created over a transport that is not attached.
    NotAttached { domain: &'static str },
    /// The façade could not attach its transport.
    Attach(TransportError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotAttached { domain } => {
                write!(f, "Cannot create {domain} domain: debugger is not attached")
            }
            SessionError::Attach(e) => write!(f, "failed to attach debugger: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NotAttached { .. } => None,
            SessionError::Attach(e) => Some(e),
        }
    }
}

/// Error the remote end reported for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    pub message: String,
    pub code: i64,
    /// Qualified command name, `Domain.command`.
    pub method: String,
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) while calling {}", self.message, self.code, self.method)
    }
}

impl std::error::Error for ProtocolError {}

/// Converting between typed payloads and dynamic values failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::Encode(msg) => write!(f, "encode error: {msg}"),
            PayloadError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// Error from calling a command.
#[derive(Debug)]
pub enum CallError {
    /// The remote end answered with an error.
    Protocol(ProtocolError),
    /// The transport failed before a reply arrived.
    Transport(TransportError),
    /// Params could not be encoded or the result could not be decoded.
    Payload(PayloadError),
}

impl From<ProtocolError> for CallError {
    fn from(e: ProtocolError) -> Self {
        CallError::Protocol(e)
    }
}

impl From<TransportError> for CallError {
    fn from(e: TransportError) -> Self {
        CallError::Transport(e)
    }
}

impl From<PayloadError> for CallError {
    fn from(e: PayloadError) -> Self {
        CallError::Payload(e)
    }
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Protocol(e) => write!(f, "protocol error: {e}"),
            CallError::Transport(e) => write!(f, "transport error: {e}"),
            CallError::Payload(e) => write!(f, "payload error: {e}"),
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Protocol(e) => Some(e),
            CallError::Transport(e) => Some(e),
            CallError::Payload(e) => Some(e),
        }
    }
}
