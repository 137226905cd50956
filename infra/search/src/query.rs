use mdc_domain::content::ContentId;
use std::fmt;

/// Security parent field of the public policy index.
const SECURITY_PARENT_FIELD: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// A search request: main query, filters, projection, sort order and page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    q: String,
    filters: Vec<String>,
    fields: Vec<String>,
    sort: Vec<(String, SortOrder)>,
    params: Vec<(String, String)>,
    start: u64,
    rows: u64,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            filters: Vec::new(),
            fields: Vec::new(),
            sort: Vec::new(),
            params: Vec::new(),
            start: 0,
            rows: 10,
        }
    }

    /// Adds a filter query (`fq`).
    #[must_use]
    pub fn filter(mut self, fq: impl Into<String>) -> Self {
        self.filters.push(fq.into());
        self
    }

    /// Adds a projected field (`fl`).
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort.push((field.into(), order));
        self
    }

    /// Adds a request parameter passed through verbatim (e.g. `variant=list`).
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the page window: `rows` documents starting at offset `start`.
    #[must_use]
    pub const fn window(mut self, start: u64, rows: u64) -> Self {
        self.start = start;
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn decorate(self, decorator: &dyn QueryDecorator) -> Self {
        decorator.decorate(self)
    }

    #[must_use]
    pub fn q(&self) -> &str {
        &self.q
    }

    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Flattens the query into request parameters, in a stable order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("q".to_owned(), self.q.clone())];
        params.extend(self.filters.iter().map(|fq| ("fq".to_owned(), fq.clone())));
        if !self.fields.is_empty() {
            params.push(("fl".to_owned(), self.fields.join(",")));
        }
        if !self.sort.is_empty() {
            let sort = self.sort.iter().map(|(f, o)| format!("{f} {o}")).collect::<Vec<_>>();
            params.push(("sort".to_owned(), sort.join(",")));
        }
        params.push(("start".to_owned(), self.start.to_string()));
        params.push(("rows".to_owned(), self.rows.to_string()));
        params.extend(self.params.iter().cloned());
        params
    }
}

/// Narrows a query before execution.
pub trait QueryDecorator: Send + Sync {
    fn decorate(&self, query: SearchQuery) -> SearchQuery;
}

/// Restricts hits to content whose security parent is the given content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithSecurityParent {
    parent: ContentId,
}

impl WithSecurityParent {
    #[must_use]
    pub const fn new(parent: ContentId) -> Self {
        Self { parent }
    }
}

impl QueryDecorator for WithSecurityParent {
    fn decorate(&self, query: SearchQuery) -> SearchQuery {
        query.filter(format!("{SECURITY_PARENT_FIELD}:\"{}\"", self.parent))
    }
}
