#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

use voca_admin::api::app_router;
use voca_admin::infrastructure::session::SessionStore;
use voca_admin::infrastructure::AppState;
use voca_admin::models::{level, voca_book};
use voca_admin::{db, seed};

pub const ADMIN_ID: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn db(&self) -> &DatabaseConnection {
        self.state.db()
    }

    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Log in with the seeded admin and return the `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .send(form_request(
                "/auth/login",
                &format!("username={}&password={}", ADMIN_ID, ADMIN_PASSWORD),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login sets a cookie")
            .to_str()
            .unwrap();
        cookie.split(';').next().unwrap().to_string()
    }

    /// Send an authenticated JSON request and decode the JSON answer.
    pub async fn json(
        &self,
        cookie: &str,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.send(request).await;
        let status = response.status();
        (status, body_json(response).await)
    }
}

pub async fn setup_test_app() -> TestApp {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::ensure_admin(&db, ADMIN_ID, ADMIN_PASSWORD)
        .await
        .expect("Failed to create admin");

    let state = AppState::new(db, SessionStore::new(chrono::Duration::hours(1)))
        .expect("Failed to build state");
    TestApp {
        router: app_router(state.clone()),
        state,
    }
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).unwrap_or(Value::Null)
}

pub fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn create_test_level(db: &DatabaseConnection, rank: i32, name: &str) -> i32 {
    level::ActiveModel {
        level: Set(rank),
        level_name: Set(name.to_string()),
        level_description: Set(format!("{} words", name)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create level")
    .id
}

pub async fn create_test_voca_book(
    db: &DatabaseConnection,
    name: &str,
    category: Option<&str>,
) -> i32 {
    voca_book::ActiveModel {
        book_nm: Set(name.to_string()),
        language: Set("en".to_string()),
        source: Set("test".to_string()),
        category: Set(category.map(str::to_string)),
        username: Set(None),
        word_count: Set(Some(0)),
        updated_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create voca book")
    .id
}

/// Multipart body for the import form, with the sheet sent as `file_name`.
pub fn import_request(
    cookie: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str)>,
) -> Request<Body> {
    const BOUNDARY: &str = "voca-admin-test-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    if let Some((file_name, contents)) = file {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"excel_file\"; filename=\"{}\"\r\nContent-Type: text/csv\r\n\r\n{}\r\n",
            BOUNDARY, file_name, contents
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    Request::builder()
        .method("POST")
        .uri("/bookstore/api/voca_book")
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
