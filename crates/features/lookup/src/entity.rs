use mdc_derive::api_model;

/// One selectable value of a metadata field.
///
/// Folder lookups use the folder's content id as `code`. Dimension lookups put the
/// resolved display name in both `code` and `label`, so consumers storing `code` store
/// the name rather than an identifier.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Entity {
    pub code: String,
    pub label: String,
}

impl Entity {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self { code: code.into(), label: label.into() }
    }
}
