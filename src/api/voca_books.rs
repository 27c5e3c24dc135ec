use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use minijinja::context;
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::{IntoParams, ToSchema};

use super::error::ApiError;
use crate::auth::CurrentAdmin;
use crate::domain::{PageRequest, RegistrationStatus, VocaBookFilter};
use crate::import::parse_voca_sheet;
use crate::infrastructure::AppState;
use crate::services::{import_voca_book, NewVocaBook};

pub const PER_PAGE: u64 = 12;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PickerQuery {
    page: Option<String>,
    search: Option<String>,
    category: Option<String>,
    /// "", "all", "registered" or "unregistered"
    status: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl PickerQuery {
    fn filter(&self) -> VocaBookFilter {
        VocaBookFilter {
            search: non_empty(&self.search),
            category: non_empty(&self.category),
            status: RegistrationStatus::parse(self.status.as_deref().unwrap_or_default()),
            page: PageRequest::from_param(self.page.as_deref(), PER_PAGE),
        }
    }
}

pub async fn picker_page(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Query(query): Query<PickerQuery>,
) -> Result<Response, ApiError> {
    let page = state.voca_book_repo.find_page(query.filter()).await?;
    let book_categories = state.voca_book_repo.categories().await?;
    let levels = state.bookstore_repo.levels().await?;

    Ok(state
        .views
        .render(
            "voca_books_list.html",
            context! {
                page,
                book_categories,
                levels,
                search => non_empty(&query.search).unwrap_or_default(),
                category => non_empty(&query.category).unwrap_or_default(),
                status => non_empty(&query.status).unwrap_or_default(),
            },
        )?
        .into_response())
}

#[utoipa::path(
    get,
    path = "/bookstore/api/voca_books",
    params(PickerQuery),
    responses(
        (status = 200, description = "One page of vocabulary books with registration status")
    )
)]
pub async fn list_voca_books(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Query(query): Query<PickerQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = state.voca_book_repo.find_page(query.filter()).await?;
    Ok(Json(json!({ "success": true, "page": page })))
}

/// Multipart layout of the import form, for the API docs
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct VocaBookUpload {
    book_nm: String,
    language: String,
    source: String,
    category: Option<String>,
    username: Option<String>,
    /// Headerless `.xlsx`, `.xls`, `.ods` or `.csv`
    #[schema(value_type = String, format = Binary)]
    excel_file: Vec<u8>,
}

#[derive(Default)]
struct ImportForm {
    book_nm: String,
    language: String,
    source: String,
    category: String,
    username: String,
    file: Option<(String, Vec<u8>)>,
}

async fn read_import_form(mut multipart: Multipart) -> Result<ImportForm, ApiError> {
    let mut form = ImportForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "excel_file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
            form.file = Some((file_name, data.to_vec()));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid form field {}: {}", name, e)))?;
        match name.as_str() {
            "book_nm" => form.book_nm = value,
            "language" => form.language = value,
            "source" => form.source = value,
            "category" => form.category = value,
            "username" => form.username = value,
            _ => {}
        }
    }

    Ok(form)
}

#[utoipa::path(
    post,
    path = "/bookstore/api/voca_book",
    request_body(content = VocaBookUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Book imported"),
        (status = 400, description = "Missing field, missing file or unreadable sheet")
    )
)]
pub async fn create_voca_book(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_import_form(multipart).await?;

    let book = NewVocaBook::new(
        &form.book_nm,
        &form.language,
        &form.source,
        &form.category,
        &form.username,
    )?;
    let (file_name, data) = form
        .file
        .ok_or_else(|| ApiError::BadRequest("excel_file is required".to_string()))?;
    if file_name.trim().is_empty() {
        return Err(ApiError::BadRequest("No file selected".to_string()));
    }

    let rows = parse_voca_sheet(&file_name, &data).map_err(ApiError::BadRequest)?;
    tracing::info!(
        "Admin {} importing {} ({} rows from {})",
        admin.user_id,
        book.book_nm,
        rows.len(),
        file_name
    );

    let book_nm = book.book_nm.clone();
    let summary = import_voca_book(state.db(), book, rows).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": summary.book_id,
            "word_count": summary.word_count,
            "message": format!("'{}' created with {} words", book_nm, summary.word_count),
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/bookstore/api/voca_book/{id}",
    params(
        ("id" = i32, Path, description = "Vocabulary book ID")
    ),
    responses(
        (status = 200, description = "Book deleted; its words stay"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is still listed in the store")
    )
)]
pub async fn delete_voca_book(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.voca_book_repo.delete(id).await?;
    tracing::info!("Admin {} deleted voca book {}", admin.user_id, id);

    Ok(Json(json!({ "success": true })))
}
