use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategory {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct NewForumCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl ForumCategory {
    pub fn new(id: EntityId, new: NewForumCategory) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            icon: new.icon,
        }
    }
}

/// Forum post. Vote counters start at zero and only ever grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub user_id: EntityId,
    pub category_id: EntityId,
    pub upvotes: u32,
    pub downvotes: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewForumPost {
    pub title: String,
    pub content: String,
    pub user_id: EntityId,
    pub category_id: EntityId,
}

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl From<bool> for Vote {
    fn from(is_upvote: bool) -> Self {
        if is_upvote { Vote::Up } else { Vote::Down }
    }
}

impl ForumPost {
    pub fn new(id: EntityId, new: NewForumPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            user_id: new.user_id,
            category_id: new.category_id,
            upvotes: 0,
            downvotes: 0,
            created_at: Utc::now(),
        }
    }

    /// Upvotes minus downvotes. Derived on every read, never stored.
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    pub fn apply_vote(&mut self, vote: Vote) {
        match vote {
            Vote::Up => self.upvotes = self.upvotes.saturating_add(1),
            Vote::Down => self.downvotes = self.downvotes.saturating_add(1),
        }
    }

    /// Highest score first. The sort is stable, so ties keep their input order.
    pub fn sort_by_popularity(posts: &mut [ForumPost]) {
        posts.sort_by_key(|p| std::cmp::Reverse(p.score()));
    }

    /// Newest first, falling back to the higher id for posts created in the
    /// same instant.
    pub fn sort_by_recency(posts: &mut [ForumPost]) {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumComment {
    pub id: EntityId,
    pub content: String,
    pub user_id: EntityId,
    pub post_id: EntityId,
    pub upvotes: u32,
    pub downvotes: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewForumComment {
    pub content: String,
    pub user_id: EntityId,
    pub post_id: EntityId,
}

impl ForumComment {
    pub fn new(id: EntityId, new: NewForumComment) -> Self {
        Self {
            id,
            content: new.content,
            user_id: new.user_id,
            post_id: new.post_id,
            upvotes: 0,
            downvotes: 0,
            created_at: Utc::now(),
        }
    }

    /// Oldest first, ids breaking ties.
    pub fn sort_by_thread_order(comments: &mut [ForumComment]) {
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: EntityId) -> ForumPost {
        ForumPost::new(
            id,
            NewForumPost {
                title: format!("Post {id}"),
                content: "...".to_string(),
                user_id: 1,
                category_id: 1,
            },
        )
    }

    #[test]
    fn test_new_post_has_no_votes() {
        let p = post(1);
        assert_eq!(p.upvotes, 0);
        assert_eq!(p.downvotes, 0);
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn test_score_after_votes() {
        let mut p = post(1);
        for _ in 0..3 {
            p.apply_vote(Vote::Up);
        }
        p.apply_vote(Vote::from(false));

        assert_eq!(p.upvotes, 3);
        assert_eq!(p.downvotes, 1);
        assert_eq!(p.score(), 2);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut p = post(1);
        p.apply_vote(Vote::Down);
        p.apply_vote(Vote::Down);
        assert_eq!(p.score(), -2);
    }

    #[test]
    fn test_popularity_order() {
        let mut low = post(1);
        low.upvotes = 2;
        let mut high = post(2);
        high.upvotes = 6;
        high.downvotes = 1;

        let mut posts = vec![low, high];
        ForumPost::sort_by_popularity(&mut posts);

        assert_eq!(posts[0].id, 2);
        assert_eq!(posts[0].score(), 5);
        assert_eq!(posts[1].score(), 2);
    }

    #[test]
    fn test_recency_breaks_ties_by_id() {
        let a = post(1);
        let mut b = post(2);
        b.created_at = a.created_at;

        let mut posts = vec![a, b];
        ForumPost::sort_by_recency(&mut posts);
        assert_eq!(posts[0].id, 2);
    }
}
