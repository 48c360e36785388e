//! The output document: generated records plus the presentation descriptor.
//!
//! Field order in the structs below is the key order of the encoded JSON:
//! `data` before `config`, and `filename`, `title`, `headers` inside
//! `config`.

use crate::error::{Result, SeedError};
use crate::record::{user_name, Dataset, FIELD_NAMES, MAX_AGE, MIN_AGE};
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Longest filename label or title the export service accepts
pub const MAX_LABEL_LEN: usize = 255;

/// Filename labels the export service accepts
static FILENAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Display configuration shipped alongside the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PresentationDescriptor {
    /// Export file label, not a path
    pub filename: String,
    /// Human readable title
    pub title: String,
    /// Record fields in display order
    pub headers: Vec<String>,
}

impl PresentationDescriptor {
    /// The descriptor every default run writes
    pub fn user_list() -> Self {
        Self {
            filename: "user_list".to_string(),
            title: "User List".to_string(),
            headers: FIELD_NAMES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Check the descriptor against the constraints of the export service
    /// that consumes these files.
    pub fn validate(&self) -> Result<()> {
        let filename_len = self.filename.chars().count();
        if filename_len == 0 || filename_len > MAX_LABEL_LEN {
            return Err(SeedError::InvalidConfig(format!(
                "filename must be 1..={} characters, got {}",
                MAX_LABEL_LEN, filename_len
            )));
        }
        if !FILENAME_RE.is_match(&self.filename) {
            return Err(SeedError::InvalidConfig(format!(
                "filename '{}' may only contain letters, digits, '_' and '-'",
                self.filename
            )));
        }
        let title_len = self.title.chars().count();
        if title_len == 0 || title_len > MAX_LABEL_LEN {
            return Err(SeedError::InvalidConfig(format!(
                "title must be 1..={} characters, got {}",
                MAX_LABEL_LEN, title_len
            )));
        }
        if self.headers.is_empty() {
            return Err(SeedError::InvalidConfig("headers must not be empty".into()));
        }

        let mut seen = BTreeSet::new();
        for header in &self.headers {
            if !FIELD_NAMES.contains(&header.as_str()) {
                return Err(SeedError::InvalidConfig(format!(
                    "unknown header '{}'. Valid headers: {}",
                    header,
                    FIELD_NAMES.join(", ")
                )));
            }
            if !seen.insert(header.as_str()) {
                return Err(SeedError::InvalidConfig(format!(
                    "duplicate header '{}'",
                    header
                )));
            }
        }
        Ok(())
    }
}

impl Default for PresentationDescriptor {
    fn default() -> Self {
        Self::user_list()
    }
}

/// How the document is rendered to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Two-space indented JSON (default)
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Encoding::Pretty),
            "compact" => Ok(Encoding::Compact),
            _ => Err(format!(
                "Unknown encoding: {}. Valid options: pretty, compact",
                s
            )),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Pretty => write!(f, "pretty"),
            Encoding::Compact => write!(f, "compact"),
        }
    }
}

/// Top-level artifact: exactly `data` and `config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub data: Dataset,
    pub config: PresentationDescriptor,
}

impl Document {
    pub fn new(data: Dataset, config: PresentationDescriptor) -> Self {
        Self { data, config }
    }

    pub fn to_json(&self, encoding: Encoding) -> Result<String> {
        let text = match encoding {
            Encoding::Pretty => serde_json::to_string_pretty(self)?,
            Encoding::Compact => serde_json::to_string(self)?,
        };
        Ok(text)
    }

    /// Parse a document, rejecting missing or extra keys at any level.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check the structural invariants of a user list document.
    ///
    /// Names must run `User1..User{n}` in order, every age must lie in
    /// `[MIN_AGE, MAX_AGE]`, and the descriptor must pass
    /// [`PresentationDescriptor::validate`].
    pub fn verify(&self) -> Result<DocumentSummary> {
        for (i, record) in self.data.iter().enumerate() {
            let expected = user_name(i + 1);
            if record.name != expected {
                return Err(SeedError::InvalidDocument(format!(
                    "record {} is named '{}', expected '{}'",
                    i + 1,
                    record.name,
                    expected
                )));
            }
            if !record.age_in_bounds() {
                return Err(SeedError::InvalidDocument(format!(
                    "{} has age {} outside {}..={}",
                    record.name, record.age, MIN_AGE, MAX_AGE
                )));
            }
        }

        self.config
            .validate()
            .map_err(|e| SeedError::InvalidDocument(format!("config: {}", e)))?;

        Ok(DocumentSummary::of(&self.data))
    }
}

/// Shape of a verified dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DocumentSummary {
    pub records: usize,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub distinct_ages: usize,
}

impl DocumentSummary {
    pub fn of(data: &Dataset) -> Self {
        let ages: BTreeSet<u32> = data.iter().map(|r| r.age).collect();
        Self {
            records: data.len(),
            min_age: ages.first().copied(),
            max_age: ages.last().copied(),
            distinct_ages: ages.len(),
        }
    }
}
