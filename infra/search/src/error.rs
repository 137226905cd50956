use std::borrow::Cow;

#[mdc_derive::mdc_error]
pub enum SearchError {
    #[error("Search request failed{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Search index responded with an error{}: {message}", format_context(.context))]
    Status { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed search document{}: {message}", format_context(.context))]
    MalformedDocument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid search configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SearchError {
    /// `true` when the index could not be reached or answered with a failure status.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}
