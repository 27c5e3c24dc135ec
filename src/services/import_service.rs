//! Vocabulary book import - Pure business logic without HTTP layer
//!
//! A book and all of its words, meanings and examples are written inside one
//! transaction. Any failure drops the transaction, which rolls everything
//! back: the import either lands completely or not at all.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, Set,
    TransactionTrait,
};
use serde::Serialize;

use crate::domain::DomainError;
use crate::models::{
    voca, voca_book, voca_book_map, voca_example, voca_example_map, voca_meaning,
    voca_meaning_map,
};
use crate::modules::import::ImportRow;

/// Book metadata from the upload form, already trimmed.
#[derive(Debug, Clone)]
pub struct NewVocaBook {
    pub book_nm: String,
    pub language: String,
    pub source: String,
    pub category: Option<String>,
    pub username: Option<String>,
}

impl NewVocaBook {
    /// Empty optional fields are stored as NULL; the three required ones must be present.
    pub fn new(
        book_nm: &str,
        language: &str,
        source: &str,
        category: &str,
        username: &str,
    ) -> Result<Self, DomainError> {
        let (book_nm, language, source) = (book_nm.trim(), language.trim(), source.trim());
        if book_nm.is_empty() || language.is_empty() || source.is_empty() {
            return Err(DomainError::Validation(
                "book_nm, language and source are required".to_string(),
            ));
        }

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(Self {
            book_nm: book_nm.to_string(),
            language: language.to_string(),
            source: source.to_string(),
            category: optional(category),
            username: optional(username),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub book_id: i32,
    pub word_count: i32,
    pub meaning_count: usize,
    pub example_count: usize,
}

/// Create a vocabulary book and fan its rows out into words, meanings and examples.
pub async fn import_voca_book(
    db: &DatabaseConnection,
    book: NewVocaBook,
    rows: Vec<ImportRow>,
) -> Result<ImportSummary, DomainError> {
    let txn = db.begin().await?;

    match write_book(&txn, book, rows).await {
        Ok(summary) => {
            txn.commit().await?;
            tracing::info!(
                "Imported voca book {} ({} words, {} meanings, {} examples)",
                summary.book_id,
                summary.word_count,
                summary.meaning_count,
                summary.example_count
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!("Voca book import failed, rolling back: {}", e);
            txn.rollback().await?;
            Err(e)
        }
    }
}

async fn write_book(
    txn: &DatabaseTransaction,
    book: NewVocaBook,
    rows: Vec<ImportRow>,
) -> Result<ImportSummary, DomainError> {
    // 1. Book first, so words can reference its id
    let created = voca_book::ActiveModel {
        book_nm: Set(book.book_nm),
        language: Set(book.language),
        source: Set(book.source),
        category: Set(book.category),
        username: Set(book.username),
        word_count: Set(Some(0)),
        updated_at: Set(Some(chrono::Utc::now().to_rfc3339())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let mut summary = ImportSummary {
        book_id: created.id,
        word_count: 0,
        meaning_count: 0,
        example_count: 0,
    };

    // 2. Words with their meanings and examples
    for row in rows {
        write_word(txn, created.id, row, &mut summary).await?;
        summary.word_count += 1;
    }

    // 3. Cached word count
    let mut active: voca_book::ActiveModel = created.into();
    active.word_count = Set(Some(summary.word_count));
    active.update(txn).await?;

    Ok(summary)
}

async fn write_word<C: ConnectionTrait>(
    conn: &C,
    book_id: i32,
    row: ImportRow,
    summary: &mut ImportSummary,
) -> Result<(), DomainError> {
    let word = voca::ActiveModel {
        word: Set(row.word),
        pronunciation: Set(None),
        verb_forms: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    voca_book_map::ActiveModel {
        voca_id: Set(word.id),
        book_id: Set(book_id),
    }
    .insert(conn)
    .await?;

    for meaning in row.meanings {
        let meaning = voca_meaning::ActiveModel {
            meaning: Set(meaning),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        voca_meaning_map::ActiveModel {
            voca_id: Set(word.id),
            meaning_id: Set(meaning.id),
        }
        .insert(conn)
        .await?;
        summary.meaning_count += 1;
    }

    for pair in row.examples {
        let example = voca_example::ActiveModel {
            exam_en: Set(Some(pair.en)),
            exam_ko: Set(Some(pair.ko)),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        voca_example_map::ActiveModel {
            voca_id: Set(word.id),
            example_id: Set(example.id),
        }
        .insert(conn)
        .await?;
        summary.example_count += 1;
    }

    Ok(())
}
