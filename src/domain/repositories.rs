//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::{DomainError, Page, PageRequest};

/// Bookstore listing as shown in the console, with its tags resolved.
#[derive(Debug, Clone, Serialize)]
pub struct BookstoreListing {
    pub id: i32,
    pub name: String,
    /// Stored in the `downloads` column
    pub order: i32,
    pub category: String,
    pub color: Option<String>,
    pub gem: i32,
    pub hide: String,
    pub is_visible: bool,
    pub level: Option<String>,
    pub level_id: i32,
    pub level_name: Option<String>,
    pub book_id: i32,
    pub book_nm: Option<String>,
    pub category_ids: Vec<i32>,
    /// Category names joined with ", ", or "-" when untagged
    pub category_list: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Input for creating a listing. Required references are already checked for presence.
#[derive(Debug, Clone)]
pub struct CreateBookstoreInput {
    pub name: String,
    pub order: i32,
    pub category: String,
    pub color: String,
    pub is_visible: bool,
    pub gem: i32,
    pub level_name: Option<String>,
    pub level_id: i32,
    pub book_id: i32,
    pub category_ids: Option<Vec<i32>>,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookstoreInput {
    pub name: Option<String>,
    pub order: Option<i32>,
    pub category: Option<String>,
    /// `Some(None)` clears the stored color
    pub color: Option<Option<String>>,
    pub is_visible: Option<bool>,
    pub gem: Option<i32>,
    pub level_name: Option<String>,
    pub level_id: Option<i32>,
    pub book_id: Option<i32>,
    /// `Some` replaces the whole tag set, `Some(vec![])` clears it
    pub category_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelOption {
    pub id: i32,
    pub level: i32,
    pub level_name: String,
    pub level_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub id: i32,
    pub category: String,
}

/// Repository trait for bookstore listings and their lookup tables
#[async_trait]
pub trait BookstoreRepository: Send + Sync {
    /// All listings, newest first
    async fn find_all(&self) -> Result<Vec<BookstoreListing>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<BookstoreListing>, DomainError>;

    async fn create(&self, input: CreateBookstoreInput) -> Result<BookstoreListing, DomainError>;

    async fn update(
        &self,
        id: i32,
        input: UpdateBookstoreInput,
    ) -> Result<BookstoreListing, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Levels ordered by their numeric level
    async fn levels(&self) -> Result<Vec<LevelOption>, DomainError>;

    /// Categories ordered by name
    async fn categories(&self) -> Result<Vec<CategoryOption>, DomainError>;
}

/// Registration filter of the book picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStatus {
    #[default]
    All,
    Registered,
    Unregistered,
}

impl RegistrationStatus {
    /// Unknown values behave like "all".
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "registered" => RegistrationStatus::Registered,
            "unregistered" => RegistrationStatus::Unregistered,
            _ => RegistrationStatus::All,
        }
    }
}

/// Filter criteria for the vocabulary book picker
#[derive(Debug, Clone)]
pub struct VocaBookFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: RegistrationStatus,
    pub page: PageRequest,
}

/// Vocabulary book with its store registration
#[derive(Debug, Clone, Serialize)]
pub struct VocaBookSummary {
    pub id: i32,
    pub book_nm: String,
    pub language: String,
    pub source: String,
    pub category: Option<String>,
    pub username: Option<String>,
    pub word_count: Option<i32>,
    pub updated_at: Option<String>,
    pub is_registered: bool,
    pub bookstore_name: Option<String>,
    pub bookstore_id: Option<i32>,
}

/// Repository trait for vocabulary books
#[async_trait]
pub trait VocaBookRepository: Send + Sync {
    async fn find_page(&self, filter: VocaBookFilter)
    -> Result<Page<VocaBookSummary>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<VocaBookSummary>, DomainError>;

    /// Distinct non-empty categories, for the picker's filter
    async fn categories(&self) -> Result<Vec<String>, DomainError>;

    /// Delete a book and its word memberships. Words themselves stay.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub id: i32,
    pub word: String,
    pub pronunciation: Option<String>,
    pub verb_forms: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub id: i32,
    pub exam_en: Option<String>,
    pub exam_ko: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordDetail {
    #[serde(flatten)]
    pub word: Word,
    pub meanings: Vec<String>,
    pub examples: Vec<Example>,
    pub book_ids: Vec<i32>,
}

/// Overwrite input for a word. Empty pronunciation/verb forms clear the field.
#[derive(Debug, Clone, Default)]
pub struct UpdateWordInput {
    pub word: Option<String>,
    pub pronunciation: Option<String>,
    pub verb_forms: Option<String>,
}

/// Repository trait for individual words
#[async_trait]
pub trait VocaRepository: Send + Sync {
    /// Words ordered alphabetically, optionally filtered by substring
    async fn find_page(
        &self,
        query: Option<String>,
        page: PageRequest,
    ) -> Result<Page<Word>, DomainError>;

    async fn find_detail(&self, id: i32) -> Result<Option<WordDetail>, DomainError>;

    async fn update(&self, id: i32, input: UpdateWordInput) -> Result<Word, DomainError>;

    /// Delete a word; its book, meaning and example mappings cascade
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
