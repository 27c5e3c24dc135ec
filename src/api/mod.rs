pub mod auth;
pub mod bookstore;
pub mod error;
pub mod health;
pub mod voca;
pub mod voca_books;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::infrastructure::AppState;

pub use error::ApiError;

/// Spreadsheet uploads go well past axum's 2 MB default
const UPLOAD_LIMIT: usize = 32 * 1024 * 1024;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::index))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", get(auth::logout))
        // Bookstore pages
        .route("/bookstore", get(bookstore::list_page))
        .route("/bookstore/", get(bookstore::list_page))
        .route("/bookstore/voca_books", get(voca_books::picker_page))
        // Bookstore API
        .route(
            "/bookstore/api/bookstore",
            get(bookstore::list_bookstores).post(bookstore::create_bookstore),
        )
        .route(
            "/bookstore/api/bookstore/:id",
            patch(bookstore::update_bookstore).delete(bookstore::delete_bookstore),
        )
        .route(
            "/bookstore/api/voca_books",
            get(voca_books::list_voca_books),
        )
        .route(
            "/bookstore/api/voca_book",
            post(voca_books::create_voca_book).layer(DefaultBodyLimit::max(UPLOAD_LIMIT)),
        )
        .route(
            "/bookstore/api/voca_book/:id",
            axum::routing::delete(voca_books::delete_voca_book),
        )
        // Words
        .route("/voca", get(voca::list_page))
        .route("/voca/", get(voca::list_page))
        .route("/voca/api/voca", get(voca::list_words))
        .route(
            "/voca/api/voca/:id",
            get(voca::get_word)
                .patch(voca::update_word)
                .delete(voca::delete_word),
        )
        .route("/api/health", get(health::health_check))
        .with_state(state)
}
