//! Comment Data Structures
//!
//! A comment is a short note a user attaches to a trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_non_empty, SharedError};

/// A comment on a trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// Author of the comment
    pub user_id: Uuid,
    /// Trip the comment is attached to
    pub trip_id: Uuid,
    /// Comment text
    pub content: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// When the comment was last edited
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(user_id: Uuid, trip_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            trip_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of comment create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub content: String,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("content", &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_required() {
        assert!(CommentRequest::default().validate().is_err());
        assert!(CommentRequest { content: "Great view".into() }.validate().is_ok());
    }

    #[test]
    fn test_new_comment_timestamps_match() {
        let comment = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "hi".into());
        assert_eq!(comment.created_at, comment.updated_at);
    }
}
