//! The fixed-shape user record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Youngest age a generated user can have
pub const MIN_AGE: u32 = 18;
/// Oldest age a generated user can have
pub const MAX_AGE: u32 = 77;
/// Number of distinct ages in `[MIN_AGE, MAX_AGE]`
pub const AGE_SPAN: u32 = MAX_AGE - MIN_AGE + 1;

/// Prefix of every generated user name
pub const NAME_PREFIX: &str = "User";

/// Record field names, in display order
pub const FIELD_NAMES: [&str; 2] = ["name", "age"];

/// One synthetic user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// `"User"` followed by the 1-based generation index
    pub name: String,
    /// Age in whole years
    #[schemars(range(min = 18, max = 77))]
    pub age: u32,
}

impl Record {
    /// Build the record at 1-based `index` with an age offset in `[0, AGE_SPAN)`.
    ///
    /// Offsets outside the span wrap around so the age stays in bounds.
    pub fn at_index(index: usize, age_offset: u32) -> Self {
        Self {
            name: user_name(index),
            age: MIN_AGE + age_offset % AGE_SPAN,
        }
    }

    pub fn age_in_bounds(&self) -> bool {
        (MIN_AGE..=MAX_AGE).contains(&self.age)
    }
}

/// Ordered sequence of records, index 1 first
pub type Dataset = Vec<Record>;

/// Name for the user at 1-based `index`
pub fn user_name(index: usize) -> String {
    format!("{}{}", NAME_PREFIX, index)
}
