//! Post summary model
//!
//! The index is a hand-maintained JSON array; this code only reads it.

use serde::{Deserialize, Serialize};

/// One entry of the JSON post index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// URL- and filename-safe identifier, unique across the index
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Pre-formatted display date, shown verbatim
    #[serde(rename = "prettyDate")]
    pub pretty_date: String,
    #[serde(default)]
    pub category: Option<String>,
}
