//! Response DTOs for the Web API.

use serde::Serialize;

use crate::board::Board;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            content: board.content,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

/// Delete confirmation response.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// ID of the removed board.
    pub id: i64,
    /// Always true; present for explicit confirmation bodies.
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_response_from_board() {
        let board = Board {
            id: 7,
            title: "Title".to_string(),
            content: "Content".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-02T00:00:00.000Z".to_string(),
        };
        let response = BoardResponse::from(board);
        assert_eq!(response.id, 7);
        assert_eq!(response.title, "Title");
        assert_eq!(response.updated_at, "2026-01-02T00:00:00.000Z");
    }

    #[test]
    fn test_api_response_serializes_under_data() {
        let response = ApiResponse::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_deleted_response_shape() {
        let response = DeletedResponse {
            id: 4,
            deleted: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["deleted"], true);
    }
}
