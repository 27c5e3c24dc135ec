use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::infrastructure::session::{session_token, SessionStore};
use crate::models::admin;

pub const LOGIN_PATH: &str = "/auth/login";

pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| e.to_string())?
        .to_string();
    Ok(password_hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, String> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| e.to_string())?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// The logged-in admin behind the request's session cookie.
///
/// Any route taking this extractor is protected: requests without a live
/// session, or whose admin row has since disappeared, are redirected to the
/// login page instead of reaching the handler.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: String,
    pub user_id: String,
    pub token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
    DatabaseConnection: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = SessionStore::from_ref(state);
        let token = session_token(&parts.headers).ok_or(Redirect::to(LOGIN_PATH))?;
        let session = sessions.get(&token).ok_or_else(|| {
            tracing::debug!("Unknown or expired session on {}", parts.uri.path());
            Redirect::to(LOGIN_PATH)
        })?;

        let db = DatabaseConnection::from_ref(state);
        match admin::Entity::find_by_id(session.admin_id.clone()).one(&db).await {
            Ok(Some(admin)) => Ok(CurrentAdmin {
                id: admin.id,
                user_id: admin.user_id,
                token,
            }),
            Ok(None) => {
                tracing::warn!("Session for removed admin {}, dropping it", session.user_id);
                sessions.remove(&token);
                Err(Redirect::to(LOGIN_PATH))
            }
            Err(e) => {
                tracing::error!("Failed to load admin for session: {}", e);
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}

/// Like [`CurrentAdmin`] but never rejects; for pages that branch on login state.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub Option<CurrentAdmin>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
    DatabaseConnection: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAdmin(
            CurrentAdmin::from_request_parts(parts, state).await.ok(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let hash = hash_password("super_secret_password").expect("Failed to hash password");

        assert_ne!(hash, "super_secret_password");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("super_secret_password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
