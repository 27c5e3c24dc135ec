//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookstoreRepository, DomainError, VocaBookRepository, VocaRepository};
use crate::infrastructure::session::SessionStore;
use crate::infrastructure::{
    SeaOrmBookstoreRepository, SeaOrmVocaBookRepository, SeaOrmVocaRepository,
};
use crate::views::Views;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub bookstore_repo: Arc<dyn BookstoreRepository>,
    pub voca_book_repo: Arc<dyn VocaBookRepository>,
    pub voca_repo: Arc<dyn VocaRepository>,
    pub sessions: SessionStore,
    pub views: Views,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, sessions: SessionStore) -> Result<Self, DomainError> {
        let views = Views::new().map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(Self {
            bookstore_repo: Arc::new(SeaOrmBookstoreRepository::new(db.clone())),
            voca_book_repo: Arc::new(SeaOrmVocaBookRepository::new(db.clone())),
            voca_repo: Arc::new(SeaOrmVocaRepository::new(db.clone())),
            db,
            sessions,
            views,
        })
    }

    /// Raw connection, for services that run their own transactions
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
