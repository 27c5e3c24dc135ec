use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_ttl_hours: i64,
    pub admin_user_id: Option<String>,
    pub admin_password: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://voca_admin.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            session_ttl_hours: parse_ttl_hours(env::var("SESSION_TTL_HOURS").ok().as_deref()),
            admin_user_id: non_empty_var("ADMIN_USER_ID"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            seed_demo: env::var("SEED_DEMO").is_ok_and(|v| parse_flag(&v)),
        }
    }

    /// Bootstrap credentials, only when both halves are configured.
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        match (&self.admin_user_id, &self.admin_password) {
            (Some(user_id), Some(password)) => Some((user_id.as_str(), password.as_str())),
            _ => None,
        }
    }
}

const DEFAULT_TTL_HOURS: i64 = 12;
/// One year
const MAX_TTL_HOURS: i64 = 24 * 365;

fn parse_ttl_hours(raw: Option<&str>) -> i64 {
    raw.and_then(|h| h.trim().parse::<i64>().ok())
        .filter(|h| *h > 0)
        .map(|h| h.min(MAX_TTL_HOURS))
        .unwrap_or(DEFAULT_TTL_HOURS)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
