/**
 * Post Document Model
 *
 * A post carries the author's name and avatar as a snapshot taken at
 * creation time; later profile changes are never synced back. Likes and
 * comments are ordered lists with head insertion.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::store::Account;

/// One entry in a post's likes list. Unique per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
    /// Name/avatar snapshot of the commenter at comment time.
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Authoring account id.
    pub user: String,
    pub text: String,
    /// Name/avatar snapshot of the author at creation time.
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &Account, text: String) -> Self {
        Post {
            id: Uuid::new_v4().to_string(),
            user: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.user == user_id)
    }

    /// Insert the caller's like at the head of the list.
    pub fn push_like(&mut self, user_id: &str) {
        self.likes.insert(
            0,
            Like {
                user: user_id.to_owned(),
            },
        );
    }

    /// Remove the caller's like, located by caller id rather than position.
    /// Returns false if the caller had no like to remove.
    pub fn pull_like(&mut self, user_id: &str) -> bool {
        match self.likes.iter().position(|like| like.user == user_id) {
            Some(index) => {
                self.likes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Insert a comment at the head of the list, snapshotting the commenter.
    pub fn push_comment(&mut self, author: &Account, text: String) {
        self.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4().to_string(),
                user: author.id.clone(),
                text,
                name: author.name.clone(),
                avatar: author.avatar.clone(),
                date: Utc::now(),
            },
        );
    }

    pub fn find_comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == comment_id)
    }

    /// Remove the first comment authored by `author_id`, regardless of which
    /// comment id the caller asked for. This keys removal on the author, not
    /// the comment, and is part of the API contract as shipped.
    pub fn pull_first_comment_by(&mut self, author_id: &str) -> bool {
        match self
            .comments
            .iter()
            .position(|comment| comment.user == author_id)
        {
            Some(index) => {
                self.comments.remove(index);
                true
            }
            None => false,
        }
    }
}
