use mdc_domain::constants::{DESK_FOLDERS_LOOKUP, DIMENSION_LOOKUP};

/// The lookup strategies selectable by the `type` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    DeskFolders,
    Dimension,
}

impl LookupKind {
    /// Maps a lookup type to its strategy; `None` for types with no strategy.
    #[must_use]
    pub fn from_type(lookup_type: &str) -> Option<Self> {
        match lookup_type {
            DESK_FOLDERS_LOOKUP => Some(Self::DeskFolders),
            DIMENSION_LOOKUP => Some(Self::Dimension),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeskFolders => DESK_FOLDERS_LOOKUP,
            Self::Dimension => DIMENSION_LOOKUP,
        }
    }
}
