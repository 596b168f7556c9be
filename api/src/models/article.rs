//! Articles submitted for summarization by the bot workflows.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Processing,
    Done,
    Failed,
    #[serde(other)]
    Unknown,
}

impl ArticleStatus {
    /// Whether the backend is still working on the article.
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub fetched_at: Option<String>,
    #[serde(default)]
    pub workflow_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ArticleStatus,
}

impl Article {
    /// Title when the backend has fetched one, otherwise the submitted URL.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&self.url)
    }
}
