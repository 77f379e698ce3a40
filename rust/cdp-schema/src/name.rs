use std::fmt;

/// A `Domain.member` identifier naming a command or event across domains.
///
/// Qualified names are split on a single `.`; a missing separator, a second
/// separator, or an empty side is an error rather than a best-effort guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName<'a> {
    pub domain: &'a str,
    pub member: &'a str,
}

/// Why a string is not a valid qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifiedNameError {
    /// No `.` separator (e.g. `"enable"`).
    MissingSeparator(String),
    /// More than one `.` separator (e.g. `"Page.frame.navigated"`).
    TooManySeparators(String),
    /// One side of the separator is empty (e.g. `"Page."`).
    EmptySegment(String),
}

impl<'a> QualifiedName<'a> {
    pub fn new(domain: &'a str, member: &'a str) -> Self {
        Self { domain, member }
    }

    pub fn parse(raw: &'a str) -> Result<Self, QualifiedNameError> {
        let Some((domain, member)) = raw.split_once('.') else {
            return Err(QualifiedNameError::MissingSeparator(raw.to_string()));
        };
        if member.contains('.') {
            return Err(QualifiedNameError::TooManySeparators(raw.to_string()));
        }
        if domain.is_empty() || member.is_empty() {
            return Err(QualifiedNameError::EmptySegment(raw.to_string()));
        }
        Ok(Self { domain, member })
    }
}

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.member)
    }
}

impl fmt::Display for QualifiedNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifiedNameError::MissingSeparator(raw) => {
                write!(f, "qualified name {raw:?} has no '.' separator")
            }
            QualifiedNameError::TooManySeparators(raw) => {
                write!(f, "qualified name {raw:?} has more than one '.' separator")
            }
            QualifiedNameError::EmptySegment(raw) => {
                write!(f, "qualified name {raw:?} has an empty domain or member")
            }
        }
    }
}

impl std::error::Error for QualifiedNameError {}

/// A `$ref` resolved against the domain it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a> {
    pub domain: &'a str,
    pub name: &'a str,
}

impl<'a> TypeRef<'a> {
    /// `"Network.LoaderId"` refers to another domain; a bare `"FrameId"`
    /// belongs to `current_domain`.
    pub fn parse(raw: &'a str, current_domain: &'a str) -> Self {
        match raw.split_once('.') {
            Some((domain, name)) => Self { domain, name },
            None => Self {
                domain: current_domain,
                name: raw,
            },
        }
    }

    pub fn is_local(&self, current_domain: &str) -> bool {
        self.domain == current_domain
    }
}
