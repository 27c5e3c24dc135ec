//! Server-side login sessions.
//!
//! The browser only ever holds an opaque random token in a cookie; the admin
//! binding lives in this process. Logging out removes the entry, so a copied
//! cookie stops working immediately.

use std::sync::Arc;

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::{distributions::Alphanumeric, Rng};

pub const SESSION_COOKIE: &str = "voca_admin_session";

const TOKEN_LEN: usize = 48;

#[derive(Debug, Clone)]
pub struct Session {
    /// `admin.id`
    pub admin_id: String,
    /// `admin.user_id`, kept for log lines
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Open a session for an authenticated admin and return its token.
    /// Sessions that expired without a logout are swept here.
    pub fn create(&self, admin_id: &str, user_id: &str) -> String {
        let now = Utc::now();
        self.sessions.retain(|_, session| session.expires_at > now);

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        self.sessions.insert(
            token.clone(),
            Session {
                admin_id: admin_id.to_owned(),
                user_id: user_id.to_owned(),
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Live session for `token`. Expired entries are dropped on sight.
    pub fn get(&self, token: &str) -> Option<Session> {
        // Clone out before any removal: holding the shard guard while removing deadlocks
        let session = self.sessions.get(token).map(|s| s.value().clone())?;
        if session.expires_at <= Utc::now() {
            self.sessions.remove(token);
            return None;
        }
        Some(session)
    }

    pub fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.remove(token).map(|(_, session)| session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl.num_seconds()
    )
}

pub fn expired_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}
