mod common;

use axum::http::StatusCode;
use common::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Statement};
use serde_json::json;
use voca_admin::models::{
    voca, voca_book, voca_book_map, voca_example, voca_example_map, voca_meaning,
    voca_meaning_map,
};

const BOOK_FIELDS: &[(&str, &str)] = &[
    ("book_nm", "Animals"),
    ("language", "en"),
    ("source", "workbook"),
    ("category", ""),
    ("username", "tester"),
];

const CAT_SHEET: &str = "cat,\"고양이, 야옹이\",A cat sleeps,고양이가 잔다\n,빈 단어,ignored,무시\n";

async fn count<E>(app: &TestApp) -> u64
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(app.db()).await.unwrap()
}

#[tokio::test]
async fn test_import_fans_out_rows() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .send(import_request(
            &cookie,
            BOOK_FIELDS,
            Some(("animals.csv", CAT_SHEET)),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["word_count"], 1);
    assert!(body["message"].as_str().unwrap().contains("Animals"));

    assert_eq!(count::<voca::Entity>(&app).await, 1);
    assert_eq!(count::<voca_meaning::Entity>(&app).await, 2);
    assert_eq!(count::<voca_example::Entity>(&app).await, 1);
    assert_eq!(count::<voca_book_map::Entity>(&app).await, 1);
    assert_eq!(count::<voca_meaning_map::Entity>(&app).await, 2);
    assert_eq!(count::<voca_example_map::Entity>(&app).await, 1);

    let book_id = body["id"].as_i64().unwrap() as i32;
    let book = voca_book::Entity::find_by_id(book_id)
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.word_count, Some(1));
    assert_eq!(book.category, None);
    assert_eq!(book.username.as_deref(), Some("tester"));
    assert!(book.updated_at.is_some());

    let example = voca_example::Entity::find()
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(example.exam_en.as_deref(), Some("A cat sleeps"));
    assert_eq!(example.exam_ko.as_deref(), Some("고양이가 잔다"));
}

#[tokio::test]
async fn test_failed_import_leaves_database_unchanged() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    // Break the meaning link step so the import fails after the book and word inserts
    app.db()
        .execute(Statement::from_string(
            app.db().get_database_backend(),
            "DROP TABLE voca_meaning_map".to_owned(),
        ))
        .await
        .unwrap();

    let response = app
        .send(import_request(
            &cookie,
            BOOK_FIELDS,
            Some(("animals.csv", CAT_SHEET)),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");

    assert_eq!(count::<voca_book::Entity>(&app).await, 0);
    assert_eq!(count::<voca::Entity>(&app).await, 0);
    assert_eq!(count::<voca_meaning::Entity>(&app).await, 0);
    assert_eq!(count::<voca_book_map::Entity>(&app).await, 0);
}

#[tokio::test]
async fn test_import_validates_form() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    // Blank required field
    let fields = [
        ("book_nm", "   "),
        ("language", "en"),
        ("source", "workbook"),
    ];
    let response = app
        .send(import_request(&cookie, &fields, Some(("a.csv", CAT_SHEET))))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No file part at all
    let response = app.send(import_request(&cookie, BOOK_FIELDS, None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("excel_file"));

    // File part without a name
    let response = app
        .send(import_request(&cookie, BOOK_FIELDS, Some(("", CAT_SHEET))))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Not a workbook
    let response = app
        .send(import_request(
            &cookie,
            BOOK_FIELDS,
            Some(("animals.xlsx", "plain text")),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Spreadsheet parse error")
    );

    assert_eq!(count::<voca_book::Entity>(&app).await, 0);
}

#[tokio::test]
async fn test_delete_voca_book_keeps_shared_words() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let body = body_json(
        app.send(import_request(
            &cookie,
            BOOK_FIELDS,
            Some(("animals.csv", CAT_SHEET)),
        ))
        .await,
    )
    .await;
    let book_id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .json(
            &cookie,
            "DELETE",
            &format!("/bookstore/api/voca_book/{}", book_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    assert_eq!(count::<voca_book::Entity>(&app).await, 0);
    assert_eq!(count::<voca_book_map::Entity>(&app).await, 0);
    assert_eq!(count::<voca::Entity>(&app).await, 1);
    assert_eq!(count::<voca_meaning::Entity>(&app).await, 2);
    assert_eq!(count::<voca_example::Entity>(&app).await, 1);

    let (status, _) = app
        .json(
            &cookie,
            "DELETE",
            &format!("/bookstore/api/voca_book/{}", book_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listed_voca_book_cannot_be_deleted() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Listed", None).await;

    let (status, _) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({ "name": "Listed", "level_id": level_id, "book_id": book_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .json(
            &cookie,
            "DELETE",
            &format!("/bookstore/api/voca_book/{}", book_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(count::<voca_book::Entity>(&app).await, 1);
}
