use serde::{Deserialize, Serialize};

use crate::shared::constants::ANY_PUBLICATION_TYPE;

/// Result ordering driven by the sorting radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    /// Anything other than the literal "oldest" sorts newest-first.
    pub fn from_wire(value: &str) -> Self {
        if value == "oldest" {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        }
    }
}

/// Request body POSTed to the explore endpoint.
///
/// Every field travels as a plain string. `publication_type` carries either a
/// wire token from [`super::PublicationType`] or "any" to disable the category
/// filter; `csrf_token` is the opaque hidden-field value and is never
/// validated server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub csrf_token: String,
    pub query: String,
    pub publication_type: String,
    pub sorting: String,
}

impl SearchCriteria {
    pub fn new(
        query: impl Into<String>,
        publication_type: impl Into<String>,
        sorting: impl Into<String>,
    ) -> Self {
        Self {
            csrf_token: String::new(),
            query: query.into(),
            publication_type: publication_type.into(),
            sorting: sorting.into(),
        }
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            csrf_token: String::new(),
            query: String::new(),
            publication_type: ANY_PUBLICATION_TYPE.to_string(),
            sorting: SortOrder::default().as_str().to_string(),
        }
    }
}
