use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dataset author as shown on result cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: None,
            orcid: None,
        }
    }

    /// One-line rendering: name, then parenthesised affiliation and ORCID
    /// when present.
    pub fn display_line(&self) -> String {
        let mut line = self.name.clone();
        if let Some(affiliation) = &self.affiliation {
            line.push_str(&format!(" ({affiliation})"));
        }
        if let Some(orcid) = &self.orcid {
            line.push_str(&format!(" ({orcid})"));
        }
        line
    }
}

/// Projection of a published dataset as the explore endpoint returns it.
///
/// `publication_type` is already the human-readable label ("Journal Article");
/// `url` and `download` are ready-to-use hrefs so cards never rebuild paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub publication_type: String,
    pub authors: Vec<Author>,
    pub tags: Vec<String>,
    pub url: String,
    pub download: String,
    pub created_at: DateTime<Utc>,
    pub movies_count: usize,
    pub total_size_in_bytes: u64,
    pub total_size_in_human_format: String,
}
