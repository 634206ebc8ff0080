//! Maps decoded list items onto `Comment` records.

use crate::types::{Comment, RawComment};

/// Stateless mapper from wire items to domain records.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFactory;

impl CommentFactory {
    /// One `Comment` per item, in input order.
    pub fn from_list(&self, list: Vec<RawComment>) -> Vec<Comment> {
        list.into_iter().map(Comment::from).collect()
    }
}
