use std::borrow::Cow;

#[mdc_derive::mdc_error]
pub enum ContentError {
    #[error("Content request failed{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Content API responded with an error{}: {message}", format_context(.context))]
    Status { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Content not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing content field{}: {message}", format_context(.context))]
    MissingField { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Undecodable content{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ContentError {
    /// `true` when the content API could not be reached or answered with a failure status.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}
