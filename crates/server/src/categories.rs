//! Categories API endpoints.

use api_types::{
    Message,
    category::{CategoryCreate, CategoryUpdate, CategoryView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, map_kind, server::ServerState, unmap_kind};

fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        id: category.id.to_string(),
        name: category.name,
        kind: map_kind(category.kind),
        budget_limit: category.budget_limit,
        color: category.color,
        created_at: category.created_at,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CategoryView>>, ServerError> {
    let categories = state
        .engine
        .list_categories()
        .await?
        .into_iter()
        .map(map_category)
        .collect();

    Ok(Json(categories))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .engine
        .create_category(engine::CreateCategoryCmd {
            name: payload.name,
            kind: unmap_kind(payload.kind),
            budget_limit: payload.budget_limit,
            color: payload.color,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<CategoryView>, ServerError> {
    let category = state
        .engine
        .update_category(
            &category_id,
            engine::UpdateCategoryCmd {
                name: payload.name,
                budget_limit: payload.budget_limit,
                color: payload.color,
            },
        )
        .await?;

    Ok(Json(map_category(category)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_category(&category_id).await?;

    Ok(Json(Message {
        message: "Category deleted".to_string(),
    }))
}
