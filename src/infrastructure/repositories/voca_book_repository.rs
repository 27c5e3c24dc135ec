//! SeaORM implementation of VocaBookRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::Query, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::domain::{
    DomainError, Page, RegistrationStatus, VocaBookFilter, VocaBookRepository, VocaBookSummary,
};
use crate::models::bookstore;
use crate::models::voca_book::{self, Column, Entity as VocaBookEntity};

/// SeaORM-based implementation of VocaBookRepository
pub struct SeaOrmVocaBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmVocaBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn summarize(&self, book: voca_book::Model) -> Result<VocaBookSummary, DomainError> {
        // First listing wins when a book is listed more than once
        let listing = bookstore::Entity::find()
            .filter(bookstore::Column::BookId.eq(book.id))
            .order_by_asc(bookstore::Column::Id)
            .one(&self.db)
            .await?;

        Ok(VocaBookSummary {
            id: book.id,
            book_nm: book.book_nm,
            language: book.language,
            source: book.source,
            category: book.category,
            username: book.username,
            word_count: book.word_count,
            updated_at: book.updated_at,
            is_registered: listing.is_some(),
            bookstore_name: listing.as_ref().map(|l| l.name.clone()),
            bookstore_id: listing.map(|l| l.id),
        })
    }
}

#[async_trait]
impl VocaBookRepository for SeaOrmVocaBookRepository {
    async fn find_page(
        &self,
        filter: VocaBookFilter,
    ) -> Result<Page<VocaBookSummary>, DomainError> {
        let mut query = VocaBookEntity::find();

        if let Some(search) = &filter.search
            && !search.is_empty()
        {
            query = query.filter(Column::BookNm.contains(search));
        }

        if let Some(category) = &filter.category
            && !category.is_empty()
        {
            query = query.filter(Column::Category.eq(category));
        }

        // Applied before paging so every page of a filtered view is full
        let listed_books = Query::select()
            .column(bookstore::Column::BookId)
            .from(bookstore::Entity)
            .to_owned();
        match filter.status {
            RegistrationStatus::All => {}
            RegistrationStatus::Registered => {
                query = query.filter(Column::Id.in_subquery(listed_books));
            }
            RegistrationStatus::Unregistered => {
                query = query.filter(Column::Id.not_in_subquery(listed_books));
            }
        }

        let paginator = query
            .order_by_asc(Column::Id)
            .paginate(&self.db, filter.page.per_page);
        let total = paginator.num_items().await?;
        let books = paginator.fetch_page(filter.page.index()).await?;

        let mut items = Vec::with_capacity(books.len());
        for book in books {
            items.push(self.summarize(book).await?);
        }

        Ok(Page::new(items, filter.page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<VocaBookSummary>, DomainError> {
        match VocaBookEntity::find_by_id(id).one(&self.db).await? {
            Some(book) => Ok(Some(self.summarize(book).await?)),
            None => Ok(None),
        }
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        let categories = VocaBookEntity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::Category.is_not_null())
            .filter(Column::Category.ne(""))
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(categories)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let listings = bookstore::Entity::find()
            .filter(bookstore::Column::BookId.eq(id))
            .count(&self.db)
            .await?;
        if listings > 0 {
            return Err(DomainError::Conflict(format!(
                "Book {} is still listed in the bookstore",
                id
            )));
        }

        let result = VocaBookEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::info!("Deleted voca book {}", id);
        Ok(())
    }
}
