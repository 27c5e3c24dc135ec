use axum::{
    extract::{Form, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;
use sea_orm::*;
use serde::Deserialize;

use super::error::ApiError;
use crate::auth::{verify_password, CurrentAdmin, MaybeAdmin, LOGIN_PATH};
use crate::infrastructure::session::{expired_cookie, session_cookie};
use crate::infrastructure::AppState;
use crate::models::admin;

pub const HOME_PATH: &str = "/bookstore/";

const INVALID_CREDENTIALS: &str = "아이디 또는 비밀번호가 올바르지 않습니다.";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn index(MaybeAdmin(admin): MaybeAdmin) -> Redirect {
    match admin {
        Some(_) => Redirect::to(HOME_PATH),
        None => Redirect::to(LOGIN_PATH),
    }
}

pub async fn login_page(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state
        .views
        .render("login.html", context! { error => None::<&str> })?
        .into_response())
}

pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let username = payload.username.trim();
    tracing::info!("Login attempt for admin: {}", username);

    let account = admin::Entity::find()
        .filter(admin::Column::UserId.eq(username))
        .one(state.db())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let verified = match &account {
        Some(account) => match verify_password(&payload.password, &account.password) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!("Stored hash for {} is unreadable: {}", account.user_id, e);
                false
            }
        },
        None => false,
    };

    match account {
        Some(account) if verified => {
            let token = state.sessions.create(&account.id, &account.user_id);
            tracing::info!("Admin {} logged in", account.user_id);
            Ok((
                [(
                    header::SET_COOKIE,
                    session_cookie(&token, state.sessions.ttl()),
                )],
                Redirect::to(HOME_PATH),
            )
                .into_response())
        }
        _ => {
            tracing::warn!("Login failed for admin: {}", username);
            Ok(state
                .views
                .render("login.html", context! { error => INVALID_CREDENTIALS })?
                .into_response())
        }
    }
}

pub async fn logout(State(state): State<AppState>, admin: CurrentAdmin) -> impl IntoResponse {
    state.sessions.remove(&admin.token);
    tracing::info!("Admin {} logged out", admin.user_id);
    (
        [(header::SET_COOKIE, expired_cookie())],
        Redirect::to(LOGIN_PATH),
    )
}
