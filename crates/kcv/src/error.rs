use lexer::LexError;
use thiserror::Error;

/// Why a document or cursor operation was refused.
///
/// Errors never cross the public surface: callers observe them only as
/// the validity flag of the document or cursor they concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ErrorKind {
    #[error("malformed utf-8")]
    MalformedUtf8,
    #[error("grammar violation: {0}")]
    Grammar(&'static str),
    #[error("duplicate key")]
    DuplicateKey,
    #[error("item capacity exceeded")]
    CapacityExceeded,
    #[error("token does not match the requested type")]
    TypeMismatch,
    #[error("value out of range")]
    Range,
    #[error("invalid value")]
    InvalidValue,
}

impl From<LexError> for ErrorKind {
    fn from(error: LexError) -> Self {
        match error {
            LexError::MalformedUtf8 { .. } => ErrorKind::MalformedUtf8,
            LexError::Grammar { message, .. } => ErrorKind::Grammar(message),
        }
    }
}
