//! Domain types for the comments API.
//!
//! # Design
//! `RawComment` is the wire shape of one list item and is only ever produced
//! by serde, so a missing field or a negative/non-integer id is rejected at
//! decode time. `Comment` is the immutable record handed to callers: fields
//! are private and read through accessors.

use serde::Deserialize;

/// One comment as it appears inside the `data` array of a list response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawComment {
    pub id: u64,
    pub name: String,
    pub text: String,
}

/// A single comment returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    id: u64,
    name: String,
    text: String,
}

impl Comment {
    pub fn new(id: u64, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Comment {
            id: raw.id,
            name: raw.name,
            text: raw.text,
        }
    }
}
