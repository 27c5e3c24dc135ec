use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use minijinja::context;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use utoipa::ToSchema;

use super::error::ApiError;
use crate::auth::CurrentAdmin;
use crate::domain::{CreateBookstoreInput, UpdateBookstoreInput};
use crate::infrastructure::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateBookstoreRequest {
    name: Option<String>,
    order: Option<i32>,
    category: Option<String>,
    /// A string, or a JSON object stored as its serialized text
    #[schema(value_type = Option<Object>)]
    color: Option<Value>,
    is_visible: Option<bool>,
    gem: Option<i32>,
    level_name: Option<String>,
    level_id: Option<i32>,
    book_id: Option<i32>,
    category_ids: Option<Vec<i32>>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateBookstoreRequest {
    name: Option<String>,
    order: Option<i32>,
    category: Option<String>,
    /// Absent keeps the color, `null` clears it
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Object>)]
    color: Option<Value>,
    is_visible: Option<bool>,
    gem: Option<i32>,
    level_name: Option<String>,
    level_id: Option<i32>,
    book_id: Option<i32>,
    category_ids: Option<Vec<i32>>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it differs from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Colors arrive either as plain strings or as theme objects from the page script.
pub fn normalize_color(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub async fn list_page(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Response, ApiError> {
    let bookstores = state.bookstore_repo.find_all().await?;
    let levels = state.bookstore_repo.levels().await?;
    let categories = state.bookstore_repo.categories().await?;

    Ok(state
        .views
        .render(
            "bookstore_list.html",
            context! { bookstores, levels, categories },
        )?
        .into_response())
}

#[utoipa::path(
    get,
    path = "/bookstore/api/bookstore",
    responses(
        (status = 200, description = "All listings newest first, with levels and categories")
    )
)]
pub async fn list_bookstores(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Value>, ApiError> {
    let bookstores = state.bookstore_repo.find_all().await?;
    let levels = state.bookstore_repo.levels().await?;
    let categories = state.bookstore_repo.categories().await?;

    Ok(Json(json!({
        "success": true,
        "bookstores": bookstores,
        "levels": levels,
        "categories": categories,
    })))
}

#[utoipa::path(
    post,
    path = "/bookstore/api/bookstore",
    request_body = CreateBookstoreRequest,
    responses(
        (status = 201, description = "Listing created"),
        (status = 400, description = "Missing field or unknown level/book")
    )
)]
pub async fn create_bookstore(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(payload): Json<CreateBookstoreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = payload
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    let (Some(name), Some(level_id), Some(book_id)) = (name, payload.level_id, payload.book_id)
    else {
        return Err(ApiError::BadRequest(
            "name, level_id and book_id are required".to_string(),
        ));
    };

    let input = CreateBookstoreInput {
        name,
        order: payload.order.unwrap_or(0),
        category: payload.category.unwrap_or_default(),
        color: payload.color.map(normalize_color).unwrap_or_default(),
        is_visible: payload.is_visible.unwrap_or(true),
        gem: payload.gem.unwrap_or(0),
        level_name: payload.level_name,
        level_id,
        book_id,
        category_ids: payload.category_ids,
    };

    let created = state.bookstore_repo.create(input).await?;
    tracing::info!(
        "Admin {} created bookstore {} for book {}",
        admin.user_id,
        created.id,
        created.book_id
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": created.id })),
    ))
}

#[utoipa::path(
    patch,
    path = "/bookstore/api/bookstore/{id}",
    params(
        ("id" = i32, Path, description = "Bookstore ID")
    ),
    request_body = UpdateBookstoreRequest,
    responses(
        (status = 200, description = "Listing updated"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn update_bookstore(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookstoreRequest>,
) -> Result<Json<Value>, ApiError> {
    let input = UpdateBookstoreInput {
        name: payload.name,
        order: payload.order,
        category: payload.category,
        color: payload.color.map(|color| match color {
            Value::Null => None,
            other => Some(normalize_color(other)),
        }),
        is_visible: payload.is_visible,
        gem: payload.gem,
        level_name: payload.level_name,
        level_id: payload.level_id,
        book_id: payload.book_id,
        category_ids: payload.category_ids,
    };

    let updated = state.bookstore_repo.update(id, input).await?;
    tracing::info!("Admin {} updated bookstore {}", admin.user_id, id);

    Ok(Json(json!({ "success": true, "bookstore": updated })))
}

#[utoipa::path(
    delete,
    path = "/bookstore/api/bookstore/{id}",
    params(
        ("id" = i32, Path, description = "Bookstore ID")
    ),
    responses(
        (status = 200, description = "Listing deleted"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn delete_bookstore(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.bookstore_repo.delete(id).await?;
    tracing::info!("Admin {} deleted bookstore {}", admin.user_id, id);

    Ok(Json(json!({ "success": true })))
}
