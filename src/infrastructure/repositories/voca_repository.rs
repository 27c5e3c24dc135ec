//! SeaORM implementation of VocaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    DomainError, Example, Page, PageRequest, UpdateWordInput, VocaRepository, Word, WordDetail,
};
use crate::models::voca::{self, ActiveModel, Column, Entity as VocaEntity};
use crate::models::{voca_book_map, voca_example, voca_meaning};

impl From<voca::Model> for Word {
    fn from(model: voca::Model) -> Self {
        Word {
            id: model.id,
            word: model.word,
            pronunciation: model.pronunciation,
            verb_forms: model.verb_forms,
        }
    }
}

/// Empty text clears an optional column.
fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// SeaORM-based implementation of VocaRepository
pub struct SeaOrmVocaRepository {
    db: DatabaseConnection,
}

impl SeaOrmVocaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VocaRepository for SeaOrmVocaRepository {
    async fn find_page(
        &self,
        query: Option<String>,
        page: PageRequest,
    ) -> Result<Page<Word>, DomainError> {
        let mut select = VocaEntity::find();

        if let Some(q) = &query
            && !q.is_empty()
        {
            select = select.filter(Column::Word.contains(q));
        }

        let paginator = select
            .order_by_asc(Column::Word)
            .order_by_asc(Column::Id)
            .paginate(&self.db, page.per_page);
        let total = paginator.num_items().await?;
        let words = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            words.into_iter().map(Word::from).collect(),
            page,
            total,
        ))
    }

    async fn find_detail(&self, id: i32) -> Result<Option<WordDetail>, DomainError> {
        let Some(model) = VocaEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let meanings = model
            .find_related(voca_meaning::Entity)
            .order_by_asc(voca_meaning::Column::Id)
            .all(&self.db)
            .await?;
        let examples = model
            .find_related(voca_example::Entity)
            .order_by_asc(voca_example::Column::Id)
            .all(&self.db)
            .await?;
        let book_ids = voca_book_map::Entity::find()
            .filter(voca_book_map::Column::VocaId.eq(id))
            .order_by_asc(voca_book_map::Column::BookId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| m.book_id)
            .collect();

        Ok(Some(WordDetail {
            word: Word::from(model),
            meanings: meanings.into_iter().map(|m| m.meaning).collect(),
            examples: examples
                .into_iter()
                .map(|e| Example {
                    id: e.id,
                    exam_en: e.exam_en,
                    exam_ko: e.exam_ko,
                })
                .collect(),
            book_ids,
        }))
    }

    async fn update(&self, id: i32, input: UpdateWordInput) -> Result<Word, DomainError> {
        let existing = VocaEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(word) = input.word {
            let word = word.trim();
            if word.is_empty() {
                return Err(DomainError::Validation("word must not be empty".to_string()));
            }
            active.word = Set(word.to_string());
        }
        if let Some(pronunciation) = input.pronunciation {
            active.pronunciation = Set(optional_text(pronunciation));
        }
        if let Some(verb_forms) = input.verb_forms {
            active.verb_forms = Set(optional_text(verb_forms));
        }

        let updated = active.update(&self.db).await?;
        tracing::info!("Updated voca {} ({})", updated.id, updated.word);
        Ok(Word::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = VocaEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::info!("Deleted voca {}", id);
        Ok(())
    }
}
