//! Board model for corkboard.

/// Board entity: a titled content record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board content.
    pub content: String,
    /// Creation timestamp (UTC, RFC3339).
    pub created_at: String,
    /// Last update timestamp (UTC, RFC3339).
    pub updated_at: String,
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board title.
    pub title: String,
    /// Board content.
    pub content: String,
}

impl NewBoard {
    /// Create a new board with the given title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update for a board. Unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    /// New title, if changing.
    pub title: Option<String>,
    /// New content, if changing.
    pub content: Option<String>,
}

impl BoardUpdate {
    /// Check if the update contains no fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
