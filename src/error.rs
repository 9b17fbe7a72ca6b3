// Error handling for cloudasset

use std::fmt;

/// Failure raised by the path-template engine.
///
/// `Empty` through `DuplicatePlaceholder` are compile-time failures: the
/// template literal itself is malformed and must be fixed by the caller.
/// `MissingBinding` and `NoMatch` are render/match-time failures against a
/// well-formed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template string was empty.
    Empty,
    /// A `{` without a matching `}` in the segment at this index.
    UnterminatedPlaceholder(usize),
    /// A stray `{` or `}` inside a literal segment at this index.
    UnexpectedBrace(usize),
    /// A `{}` placeholder with no name in the segment at this index.
    EmptyPlaceholder(usize),
    /// The named placeholder was declared more than once.
    DuplicatePlaceholder(String),
    /// A render call had no non-empty binding for the named placeholder.
    MissingBinding(String),
    /// A match candidate did not conform to the template.
    NoMatch(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "template string is empty"),
            TemplateError::UnterminatedPlaceholder(idx) => {
                write!(f, "unterminated placeholder in segment {}", idx)
            }
            TemplateError::UnexpectedBrace(idx) => {
                write!(f, "unexpected brace in segment {}", idx)
            }
            TemplateError::EmptyPlaceholder(idx) => {
                write!(f, "empty placeholder name in segment {}", idx)
            }
            TemplateError::DuplicatePlaceholder(name) => {
                write!(f, "duplicate placeholder name: {}", name)
            }
            TemplateError::MissingBinding(name) => {
                write!(f, "missing binding for placeholder: {}", name)
            }
            TemplateError::NoMatch(reason) => write!(f, "no match: {}", reason),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Failure reported by the transport collaborator.
///
/// Carries an RPC status code and message verbatim; this crate never
/// inspects, translates or retries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc failed with status {}: {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// Top-level error type returned by the service client.
#[derive(Debug)]
pub enum ClientError {
    /// A request failed local preflight validation.
    InvalidRequest(String),
    /// A resource-name helper failed.
    Template(TemplateError),
    /// The underlying transport reported a failure, propagated unchanged.
    Rpc(RpcError),
    /// A request record could not be serialized for the wire.
    Encode(String),
    /// A response payload could not be deserialized into its typed record.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
            ClientError::Template(err) => write!(f, "resource name error: {}", err),
            ClientError::Rpc(err) => write!(f, "{}", err),
            ClientError::Encode(msg) => write!(f, "request encoding error: {}", msg),
            ClientError::Decode(msg) => write!(f, "response decoding error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Template(err) => Some(err),
            ClientError::Rpc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TemplateError> for ClientError {
    fn from(err: TemplateError) -> Self {
        ClientError::Template(err)
    }
}

impl From<RpcError> for ClientError {
    fn from(err: RpcError) -> Self {
        ClientError::Rpc(err)
    }
}
