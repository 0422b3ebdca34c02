//! Board handlers for the Web API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::board::{BoardRepository, BoardUpdate, NewBoard};
use crate::web::dto::{
    ApiResponse, BoardResponse, CreateBoardRequest, DeletedResponse, UpdateBoardRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /boards - List all boards.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BoardResponse>>>, ApiError> {
    let repo = BoardRepository::new(&state.pool);
    let boards = repo.list().await.map_err(|e| {
        tracing::error!("Failed to list boards: {}", e);
        ApiError::internal("Failed to list boards")
    })?;

    let responses: Vec<BoardResponse> = boards.into_iter().map(BoardResponse::from).collect();

    Ok(Json(ApiResponse::new(responses)))
}

/// GET /boards/:id - Get a single board.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    let repo = BoardRepository::new(&state.pool);
    let board = repo
        .get_by_id(board_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get board: {}", e);
            ApiError::internal("Failed to get board")
        })?
        .ok_or_else(|| ApiError::not_found("Board not found"))?;

    Ok(Json(ApiResponse::new(BoardResponse::from(board))))
}

/// POST /boards - Create a board.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BoardResponse>>), ApiError> {
    payload
        .validate()
        .map_err(ApiError::from_validation_errors)?;

    let repo = BoardRepository::new(&state.pool);
    let board = repo
        .create(&NewBoard::new(payload.title, payload.content))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create board: {}", e);
            ApiError::internal("Failed to create board")
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(BoardResponse::from(board))),
    ))
}

/// PUT/PATCH /boards/:id - Update a board.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
    Json(payload): Json<UpdateBoardRequest>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    payload
        .validate()
        .map_err(ApiError::from_validation_errors)?;

    if payload.is_empty() {
        return Err(ApiError::unprocessable("No fields to update"));
    }

    let update = BoardUpdate {
        title: payload.title,
        content: payload.content,
    };

    let repo = BoardRepository::new(&state.pool);
    let board = repo
        .update(board_id, &update)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update board: {}", e);
            ApiError::internal("Failed to update board")
        })?
        .ok_or_else(|| ApiError::not_found("Board not found"))?;

    Ok(Json(ApiResponse::new(BoardResponse::from(board))))
}

/// DELETE /boards/:id - Delete a board.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let repo = BoardRepository::new(&state.pool);
    let deleted = repo.delete(board_id).await.map_err(|e| {
        tracing::error!("Failed to delete board: {}", e);
        ApiError::internal("Failed to delete board")
    })?;

    if !deleted {
        return Err(ApiError::not_found("Board not found"));
    }

    Ok(Json(ApiResponse::new(DeletedResponse {
        id: board_id,
        deleted: true,
    })))
}

/// OPTIONS /boards - Allowed methods for the collection.
pub async fn boards_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET, POST, OPTIONS")])
}

/// OPTIONS /boards/:id - Allowed methods for a single board.
pub async fn board_options() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::ALLOW, "GET, PUT, PATCH, DELETE, OPTIONS")],
    )
}
