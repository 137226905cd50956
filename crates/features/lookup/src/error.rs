use mdc_content::ContentError;
use mdc_search::SearchError;
use std::borrow::Cow;

/// A specialized [`LookupError`] enum of this crate.
#[mdc_derive::mdc_error]
pub enum LookupError {
    /// The requested identifier cannot address content.
    #[error("Invalid identifier{}: {message}", format_context(.context))]
    InvalidIdentifier { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Content repository error{}: {source}", format_context(.context))]
    Content { source: ContentError, context: Option<Cow<'static, str>> },

    #[error("Search error{}: {source}", format_context(.context))]
    Search { source: SearchError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Coarse classification of a [`LookupError`], used for logging at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// An identifier did not resolve to usable content.
    IdentifierResolution,
    /// The content repository or the search index failed.
    CollaboratorUnavailable,
    Internal,
}

impl LookupError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidIdentifier { .. } => FailureKind::IdentifierResolution,
            Self::Content { source, .. } if source.is_unavailable() => {
                FailureKind::CollaboratorUnavailable
            }
            Self::Content { .. } => FailureKind::IdentifierResolution,
            Self::Search { source: SearchError::MalformedDocument { .. }, .. } => {
                FailureKind::IdentifierResolution
            }
            Self::Search { .. } => FailureKind::CollaboratorUnavailable,
            Self::Internal { .. } => FailureKind::Internal,
        }
    }
}
