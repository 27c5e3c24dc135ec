mod common;

use axum::http::StatusCode;
use common::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;
use voca_admin::models::{bookstore, bookstore_category, bookstore_has_category};

async fn create_test_category(app: &TestApp, name: &str) -> i32 {
    bookstore_category::ActiveModel {
        category: Set(name.to_string()),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(app.db())
    .await
    .expect("Failed to create category")
    .id
}

#[tokio::test]
async fn test_create_bookstore_requires_level_and_book() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;

    let (status, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({ "name": "Basic", "book_id": book_id })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({ "name": "Basic", "level_id": level_id })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Present but pointing nowhere
    let (status, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({ "name": "Basic", "level_id": level_id, "book_id": 9999 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("book_id"));

    assert_eq!(bookstore::Entity::find().count(app.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_bookstore_with_defaults() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;

    let (status, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({
                "name": "Basic",
                "level_id": level_id,
                "book_id": book_id,
                "color": { "bg": "#fff" },
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let id = body["id"].as_i64().unwrap() as i32;
    let stored = bookstore::Entity::find_by_id(id)
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.downloads, 0);
    assert_eq!(stored.category, "");
    assert_eq!(stored.gem, 0);
    assert_eq!(stored.hide, "N");
    assert_eq!(stored.color.as_deref(), Some(r##"{"bg":"#fff"}"##));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;

    let (_, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({
                "name": "Basic",
                "order": 4,
                "category": "exam",
                "color": "#123456",
                "gem": 25,
                "level_id": level_id,
                "book_id": book_id,
            })),
        )
        .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "is_visible": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookstore"]["hide"], "Y");

    let stored = bookstore::Entity::find_by_id(id as i32)
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Basic");
    assert_eq!(stored.downloads, 4);
    assert_eq!(stored.category, "exam");
    assert_eq!(stored.color.as_deref(), Some("#123456"));
    assert_eq!(stored.gem, 25);
    assert_eq!(stored.book_id, book_id);
    assert!(stored.updated_at.is_some());

    // Omitting is_visible leaves the flag alone
    let (status, _) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "name": "  Basic Plus  " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let stored = bookstore::Entity::find_by_id(id as i32)
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Basic Plus");
    assert_eq!(stored.hide, "Y");
    assert_eq!(stored.color.as_deref(), Some("#123456"));

    // An explicit null clears the color
    let (status, body) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "color": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookstore"]["color"], serde_json::Value::Null);
    let stored = bookstore::Entity::find_by_id(id as i32)
        .one(app.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.color, None);
    assert_eq!(stored.name, "Basic Plus");
}

#[tokio::test]
async fn test_update_replaces_category_set() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;
    let toeic = create_test_category(&app, "TOEIC").await;
    let travel = create_test_category(&app, "Travel").await;
    let business = create_test_category(&app, "Business").await;

    let (_, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({
                "name": "Basic",
                "level_id": level_id,
                "book_id": book_id,
                "category_ids": [toeic, travel],
            })),
        )
        .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "category_ids": [business] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookstore"]["category_ids"], json!([business]));
    assert_eq!(body["bookstore"]["category_list"], "Business");

    let links = bookstore_has_category::Entity::find()
        .filter(bookstore_has_category::Column::BookstoreId.eq(id as i32))
        .all(app.db())
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].category_id, business);

    // Unknown categories are rejected without touching the set
    let (status, _) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "category_ids": [business, 4242] })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Empty list clears the tags
    let (_, body) = app
        .json(
            &cookie,
            "PATCH",
            &format!("/bookstore/api/bookstore/{}", id),
            Some(json!({ "category_ids": [] })),
        )
        .await;
    assert_eq!(body["bookstore"]["category_list"], "-");
}

#[tokio::test]
async fn test_unknown_bookstore_is_404() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let (status, body) = app
        .json(
            &cookie,
            "PATCH",
            "/bookstore/api/bookstore/777",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = app
        .json(&cookie, "DELETE", "/bookstore/api/bookstore/777", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_bookstore_removes_category_links() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;
    let toeic = create_test_category(&app, "TOEIC").await;

    let (_, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({
                "name": "Basic",
                "level_id": level_id,
                "book_id": book_id,
                "category_ids": [toeic],
            })),
        )
        .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .json(
            &cookie,
            "DELETE",
            &format!("/bookstore/api/bookstore/{}", id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(bookstore::Entity::find().count(app.db()).await.unwrap(), 0);
    assert_eq!(
        bookstore_has_category::Entity::find()
            .count(app.db())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_listing_is_newest_first_with_resolved_names() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 2, "Elementary").await;
    let book_id = create_test_voca_book(app.db(), "Basic 800", None).await;
    let toeic = create_test_category(&app, "TOEIC").await;
    let travel = create_test_category(&app, "Travel").await;

    for (name, categories) in [("First", json!([toeic, travel])), ("Second", json!([]))] {
        let (status, _) = app
            .json(
                &cookie,
                "POST",
                "/bookstore/api/bookstore",
                Some(json!({
                    "name": name,
                    "level_id": level_id,
                    "book_id": book_id,
                    "category_ids": categories,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .json(&cookie, "GET", "/bookstore/api/bookstore", None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let listings = body["bookstores"].as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["name"], "Second");
    assert_eq!(listings[0]["category_list"], "-");
    assert_eq!(listings[1]["name"], "First");
    assert_eq!(listings[1]["category_list"], "TOEIC, Travel");
    assert_eq!(listings[1]["level_name"], "Elementary");
    assert_eq!(listings[1]["book_nm"], "Basic 800");

    assert_eq!(body["levels"][0]["level_name"], "Elementary");
    assert_eq!(body["categories"][0]["category"], "TOEIC");

    let page = body_text(app.send(get("/bookstore/", Some(&cookie))).await).await;
    assert!(page.contains("TOEIC, Travel"));
}

#[tokio::test]
async fn test_picker_paginates_twelve_per_page() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let mut ids = Vec::new();
    for n in 1..=25 {
        ids.push(create_test_voca_book(app.db(), &format!("Book {:02}", n), None).await);
    }

    let (status, body) = app
        .json(&cookie, "GET", "/bookstore/api/voca_books?page=2", None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let page = &body["page"];
    assert_eq!(page["total"], 25);
    assert_eq!(page["pages"], 3);
    assert_eq!(page["has_prev"], true);
    assert_eq!(page["has_next"], true);
    let returned: Vec<i64> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    let expected: Vec<i64> = ids[12..24].iter().map(|id| *id as i64).collect();
    assert_eq!(returned, expected);

    for uri in [
        "/bookstore/api/voca_books?page=4611686018427387904",
        "/bookstore/api/voca_books?page=18446744073709551615",
    ] {
        let (status, body) = app.json(&cookie, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body["page"]["items"].as_array().unwrap().is_empty());
    }
    let response = app
        .send(get("/bookstore/voca_books?page=18446744073709551615", Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Garbage page numbers fall back to the first page
    let (_, body) = app
        .json(&cookie, "GET", "/bookstore/api/voca_books?page=abc", None)
        .await;
    assert_eq!(body["page"]["page"], 1);
}

#[tokio::test]
async fn test_picker_filters() {
    let app = setup_test_app().await;
    let cookie = app.login().await;
    let level_id = create_test_level(app.db(), 1, "Beginner").await;
    let listed = create_test_voca_book(app.db(), "TOEIC Starter", Some("exam")).await;
    create_test_voca_book(app.db(), "Travel Phrases", Some("travel")).await;
    create_test_voca_book(app.db(), "toeic Advanced", Some("exam")).await;

    let (_, body) = app
        .json(
            &cookie,
            "POST",
            "/bookstore/api/bookstore",
            Some(json!({ "name": "Starter", "level_id": level_id, "book_id": listed })),
        )
        .await;
    let bookstore_id = body["id"].clone();

    let (_, body) = app
        .json(&cookie, "GET", "/bookstore/api/voca_books?search=TOEIC", None)
        .await;
    assert_eq!(body["page"]["total"], 2);

    let (_, body) = app
        .json(&cookie, "GET", "/bookstore/api/voca_books?category=travel", None)
        .await;
    assert_eq!(body["page"]["total"], 1);
    assert_eq!(body["page"]["items"][0]["book_nm"], "Travel Phrases");

    let (_, body) = app
        .json(
            &cookie,
            "GET",
            "/bookstore/api/voca_books?status=registered",
            None,
        )
        .await;
    assert_eq!(body["page"]["total"], 1);
    let item = &body["page"]["items"][0];
    assert_eq!(item["is_registered"], true);
    assert_eq!(item["bookstore_name"], "Starter");
    assert_eq!(item["bookstore_id"], bookstore_id);

    let (_, body) = app
        .json(
            &cookie,
            "GET",
            "/bookstore/api/voca_books?status=unregistered&category=exam",
            None,
        )
        .await;
    assert_eq!(body["page"]["total"], 1);
    assert_eq!(body["page"]["items"][0]["book_nm"], "toeic Advanced");
    assert_eq!(body["page"]["items"][0]["is_registered"], false);

    let (_, body) = app
        .json(&cookie, "GET", "/bookstore/api/voca_books?status=all", None)
        .await;
    assert_eq!(body["page"]["total"], 3);

    let page = body_text(
        app.send(get("/bookstore/voca_books?status=registered", Some(&cookie)))
            .await,
    )
    .await;
    assert!(page.contains("TOEIC Starter"));
    assert!(!page.contains("Travel Phrases</h4>"));
}
