use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// State of a directed edge between two users.
///
/// `Liked` may be promoted to `Matched` when the reverse edge is also
/// `Liked`. `Rejected` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Liked,
    Matched,
    Rejected,
}

impl ConnectionStatus {
    /// Whether a new edge with this status, facing an existing reverse edge
    /// with `reverse`, turns both into a match.
    pub fn promotes_with(self, reverse: ConnectionStatus) -> bool {
        self == ConnectionStatus::Liked && reverse == ConnectionStatus::Liked
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Liked => "liked",
            ConnectionStatus::Matched => "matched",
            ConnectionStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection entity - a directed like/reject edge `user_id -> target_user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: EntityId,
    pub user_id: EntityId,
    pub target_user_id: EntityId,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewConnection {
    pub user_id: EntityId,
    pub target_user_id: EntityId,
    pub status: ConnectionStatus,
}

impl Connection {
    pub fn new(id: EntityId, new: NewConnection) -> Self {
        Self {
            id,
            user_id: new.user_id,
            target_user_id: new.target_user_id,
            status: new.status,
            created_at: Utc::now(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.status == ConnectionStatus::Matched
    }
}
