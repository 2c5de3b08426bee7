//! Frontmatter parsing
//!
//! Posts carry a flat `---`-delimited key/value block. Values are either a
//! plain string or a bracketed list of strings; there is no nesting and no
//! full YAML, and parsing never fails: anything that does not look like
//! frontmatter falls through to the body untouched.

use indexmap::IndexMap;
use serde::Serialize;

/// Frontmatter key/value mapping, in file order
pub type Metadata = IndexMap<String, MetaValue>;

/// A frontmatter value: a string, or a bracketed list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    /// View the value as a list; a plain string becomes a single-item list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            MetaValue::Text(s) => vec![s.clone()],
            MetaValue::List(items) => items.clone(),
        }
    }
}

/// A post split into metadata and markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub metadata: Metadata,
    pub body: String,
}

impl ParsedPost {
    /// Parse raw file text into metadata and body.
    ///
    /// The frontmatter block must start at byte 0 with `---` and be closed
    /// by a second `---`; otherwise the entire text becomes the body and
    /// the metadata stays empty. Lines without a colon are skipped.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("---") {
            let parts: Vec<&str> = raw.splitn(3, "---").collect();
            if parts.len() == 3 {
                return Self {
                    metadata: parse_block(parts[1].trim()),
                    body: parts[2].trim().to_string(),
                };
            }
        }

        Self {
            metadata: Metadata::new(),
            body: raw.to_string(),
        }
    }

    /// Metadata value for `key` as a string, if present and string-valued
    pub fn text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_text)
    }

    /// Metadata value for `key` as a list; missing keys yield an empty list
    pub fn list(&self, key: &str) -> Vec<String> {
        self.metadata
            .get(key)
            .map(MetaValue::to_list)
            .unwrap_or_default()
    }
}

fn parse_block(block: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        let parsed = if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
            MetaValue::List(
                value[1..value.len() - 1]
                    .split(',')
                    .map(|item| strip_quotes(item.trim()).to_string())
                    .collect(),
            )
        } else if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            MetaValue::Text(value[1..value.len() - 1].to_string())
        } else {
            MetaValue::Text(value.to_string())
        };

        metadata.insert(key.to_string(), parsed);
    }

    metadata
}

/// Strip one layer of surrounding single or double quotes
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
