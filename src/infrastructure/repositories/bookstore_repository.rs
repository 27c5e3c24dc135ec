//! SeaORM implementation of BookstoreRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{
    BookstoreListing, BookstoreRepository, CategoryOption, CreateBookstoreInput, DomainError,
    LevelOption, UpdateBookstoreInput,
};
use crate::models::bookstore::{self, ActiveModel, Column, Entity as BookstoreEntity};
use crate::models::{bookstore_category, bookstore_has_category, level, voca_book};

/// SeaORM-based implementation of BookstoreRepository
pub struct SeaOrmBookstoreRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookstoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_level(&self, level_id: i32) -> Result<(), DomainError> {
        if level::Entity::find_by_id(level_id).one(&self.db).await?.is_none() {
            return Err(DomainError::Validation(format!(
                "Unknown level_id {}",
                level_id
            )));
        }
        Ok(())
    }

    async fn ensure_book(&self, book_id: i32) -> Result<(), DomainError> {
        if voca_book::Entity::find_by_id(book_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "Unknown book_id {}",
                book_id
            )));
        }
        Ok(())
    }

    /// Deduplicated category ids, all of which must exist.
    async fn checked_categories(&self, ids: &[i32]) -> Result<Vec<i32>, DomainError> {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(ids);
        }

        let found = bookstore_category::Entity::find()
            .filter(bookstore_category::Column::Id.is_in(ids.clone()))
            .count(&self.db)
            .await?;
        if found != ids.len() as u64 {
            return Err(DomainError::Validation(
                "Unknown category id in category_ids".to_string(),
            ));
        }
        Ok(ids)
    }
}

async fn replace_categories<C: ConnectionTrait>(
    conn: &C,
    bookstore_id: i32,
    category_ids: &[i32],
) -> Result<(), DomainError> {
    // 1. Remove existing associations
    bookstore_has_category::Entity::delete_many()
        .filter(bookstore_has_category::Column::BookstoreId.eq(bookstore_id))
        .exec(conn)
        .await?;

    // 2. Add new associations
    let now = chrono::Utc::now().to_rfc3339();
    for category_id in category_ids {
        bookstore_has_category::ActiveModel {
            bookstore_id: Set(bookstore_id),
            category_id: Set(*category_id),
            created_at: Set(now.clone()),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn to_listing<C: ConnectionTrait>(
    conn: &C,
    model: bookstore::Model,
) -> Result<BookstoreListing, DomainError> {
    let categories = model
        .find_related(bookstore_category::Entity)
        .order_by_asc(bookstore_category::Column::Id)
        .all(conn)
        .await?;
    let level = model.find_related(level::Entity).one(conn).await?;
    let book = model.find_related(voca_book::Entity).one(conn).await?;

    let category_list = if categories.is_empty() {
        "-".to_string()
    } else {
        categories
            .iter()
            .map(|c| c.category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(BookstoreListing {
        id: model.id,
        is_visible: model.is_visible(),
        name: model.name,
        order: model.downloads,
        category: model.category,
        color: model.color,
        gem: model.gem,
        hide: model.hide,
        level: model.level,
        level_id: model.level_id,
        level_name: level.map(|l| l.level_name),
        book_id: model.book_id,
        book_nm: book.map(|b| b.book_nm),
        category_ids: categories.iter().map(|c| c.id).collect(),
        category_list,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[async_trait]
impl BookstoreRepository for SeaOrmBookstoreRepository {
    async fn find_all(&self) -> Result<Vec<BookstoreListing>, DomainError> {
        let bookstores = BookstoreEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        // N+1 over a small admin table
        let mut result = Vec::with_capacity(bookstores.len());
        for model in bookstores {
            result.push(to_listing(&self.db, model).await?);
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BookstoreListing>, DomainError> {
        match BookstoreEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(to_listing(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, input: CreateBookstoreInput) -> Result<BookstoreListing, DomainError> {
        self.ensure_level(input.level_id).await?;
        self.ensure_book(input.book_id).await?;
        let category_ids = match &input.category_ids {
            Some(ids) => Some(self.checked_categories(ids).await?),
            None => None,
        };

        let txn = self.db.begin().await?;

        let created = ActiveModel {
            name: Set(input.name),
            downloads: Set(input.order),
            category: Set(input.category),
            color: Set(Some(input.color)),
            gem: Set(input.gem),
            hide: Set(bookstore::hide_flag(input.is_visible)),
            level: Set(input.level_name),
            level_id: Set(input.level_id),
            book_id: Set(input.book_id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(ids) = category_ids {
            replace_categories(&txn, created.id, &ids).await?;
        }

        txn.commit().await?;

        tracing::info!("Created bookstore {} ({})", created.id, created.name);
        to_listing(&self.db, created).await
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateBookstoreInput,
    ) -> Result<BookstoreListing, DomainError> {
        let existing = BookstoreEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = &input.name
            && name.trim().is_empty()
        {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }
        if let Some(level_id) = input.level_id {
            self.ensure_level(level_id).await?;
        }
        if let Some(book_id) = input.book_id {
            self.ensure_book(book_id).await?;
        }
        let category_ids = match &input.category_ids {
            Some(ids) => Some(self.checked_categories(ids).await?),
            None => None,
        };

        let txn = self.db.begin().await?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(order) = input.order {
            active.downloads = Set(order);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(color) = input.color {
            active.color = Set(color);
        }
        if let Some(is_visible) = input.is_visible {
            active.hide = Set(bookstore::hide_flag(is_visible));
        }
        if let Some(gem) = input.gem {
            active.gem = Set(gem);
        }
        if let Some(level_name) = input.level_name {
            active.level = Set(Some(level_name));
        }
        if let Some(level_id) = input.level_id {
            active.level_id = Set(level_id);
        }
        if let Some(book_id) = input.book_id {
            active.book_id = Set(book_id);
        }
        active.updated_at = Set(Some(chrono::Utc::now().to_rfc3339()));

        let updated = active.update(&txn).await?;

        if let Some(ids) = category_ids {
            replace_categories(&txn, id, &ids).await?;
        }

        txn.commit().await?;

        tracing::info!("Updated bookstore {}", id);
        to_listing(&self.db, updated).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        bookstore_has_category::Entity::delete_many()
            .filter(bookstore_has_category::Column::BookstoreId.eq(id))
            .exec(&txn)
            .await?;
        let result = BookstoreEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        tracing::info!("Deleted bookstore {}", id);
        Ok(())
    }

    async fn levels(&self) -> Result<Vec<LevelOption>, DomainError> {
        let levels = level::Entity::find()
            .order_by_asc(level::Column::Level)
            .all(&self.db)
            .await?;

        Ok(levels
            .into_iter()
            .map(|l| LevelOption {
                id: l.id,
                level: l.level,
                level_name: l.level_name,
                level_description: l.level_description,
            })
            .collect())
    }

    async fn categories(&self) -> Result<Vec<CategoryOption>, DomainError> {
        let categories = bookstore_category::Entity::find()
            .order_by_asc(bookstore_category::Column::Category)
            .all(&self.db)
            .await?;

        Ok(categories
            .into_iter()
            .map(|c| CategoryOption {
                id: c.id,
                category: c.category,
            })
            .collect())
    }
}
