use crate::auth::hash_password;
use crate::models::{admin, bookstore_category, level};
use sea_orm::*;

/// Create the admin account unless one with this login already exists.
/// Returns whether a row was inserted. Existing passwords are never overwritten.
pub async fn ensure_admin(
    db: &DatabaseConnection,
    user_id: &str,
    password: &str,
) -> Result<bool, DbErr> {
    let existing = admin::Entity::find()
        .filter(admin::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(password).map_err(DbErr::Custom)?;
    let account = admin::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        user_id: Set(user_id.to_owned()),
        password: Set(password_hash),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
    };

    let inserted = admin::Entity::insert(account)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(admin::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(inserted > 0)
}

/// Default levels and store categories for a fresh database. Safe to run twice.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Levels
    if level::Entity::find().count(db).await? == 0 {
        let levels = [
            (1, "Beginner", "Everyday words for first steps"),
            (2, "Elementary", "Common words for simple conversations"),
            (3, "Intermediate", "Vocabulary for reading and daily news"),
            (4, "Upper-intermediate", "Academic and business vocabulary"),
            (5, "Advanced", "Idioms, nuance and exam vocabulary"),
        ];

        for (rank, name, description) in levels {
            level::ActiveModel {
                level: Set(rank),
                level_name: Set(name.to_owned()),
                level_description: Set(description.to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    // 2. Store categories
    if bookstore_category::Entity::find().count(db).await? == 0 {
        let categories = ["TOEIC", "TOEFL", "수능", "Business", "Travel"];

        for name in categories {
            bookstore_category::ActiveModel {
                category: Set(name.to_owned()),
                created_at: Set(chrono::Utc::now().to_rfc3339()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}
