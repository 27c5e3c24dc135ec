use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use minijinja::context;
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::{IntoParams, ToSchema};

use super::error::ApiError;
use crate::auth::CurrentAdmin;
use crate::domain::{PageRequest, UpdateWordInput};
use crate::infrastructure::AppState;

pub const PER_PAGE: u64 = 50;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WordQuery {
    page: Option<String>,
    /// Case-insensitive substring of the word
    q: Option<String>,
}

impl WordQuery {
    fn search(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
    }

    fn page(&self) -> PageRequest {
        PageRequest::from_param(self.page.as_deref(), PER_PAGE)
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateWordRequest {
    word: Option<String>,
    /// Empty string clears the field
    pronunciation: Option<String>,
    /// Empty string clears the field
    verb_forms: Option<String>,
}

pub async fn list_page(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Query(query): Query<WordQuery>,
) -> Result<Response, ApiError> {
    let search = query.search();
    let page = state
        .voca_repo
        .find_page(search.clone(), query.page())
        .await?;

    Ok(state
        .views
        .render(
            "voca_list.html",
            context! { page, search => search.unwrap_or_default() },
        )?
        .into_response())
}

#[utoipa::path(
    get,
    path = "/voca/api/voca",
    params(WordQuery),
    responses(
        (status = 200, description = "One page of words ordered alphabetically")
    )
)]
pub async fn list_words(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Query(query): Query<WordQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = state.voca_repo.find_page(query.search(), query.page()).await?;
    Ok(Json(json!({ "success": true, "page": page })))
}

#[utoipa::path(
    get,
    path = "/voca/api/voca/{id}",
    params(
        ("id" = i32, Path, description = "Word ID")
    ),
    responses(
        (status = 200, description = "Word with meanings, examples and books"),
        (status = 404, description = "Word not found")
    )
)]
pub async fn get_word(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let detail = state
        .voca_repo
        .find_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(Json(json!({ "success": true, "voca": detail })))
}

#[utoipa::path(
    patch,
    path = "/voca/api/voca/{id}",
    params(
        ("id" = i32, Path, description = "Word ID")
    ),
    request_body = UpdateWordRequest,
    responses(
        (status = 200, description = "Word updated"),
        (status = 404, description = "Word not found")
    )
)]
pub async fn update_word(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWordRequest>,
) -> Result<Json<Value>, ApiError> {
    let word = state
        .voca_repo
        .update(
            id,
            UpdateWordInput {
                word: payload.word,
                pronunciation: payload.pronunciation,
                verb_forms: payload.verb_forms,
            },
        )
        .await?;
    tracing::debug!("Admin {} edited voca {}", admin.user_id, id);

    Ok(Json(json!({ "success": true, "voca": word })))
}

#[utoipa::path(
    delete,
    path = "/voca/api/voca/{id}",
    params(
        ("id" = i32, Path, description = "Word ID")
    ),
    responses(
        (status = 200, description = "Word and its mappings deleted"),
        (status = 404, description = "Word not found")
    )
)]
pub async fn delete_word(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.voca_repo.delete(id).await?;
    tracing::info!("Admin {} deleted voca {}", admin.user_id, id);

    Ok(Json(json!({ "success": true })))
}
