use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voca_admin::infrastructure::session::SessionStore;
use voca_admin::infrastructure::AppState;
use voca_admin::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voca_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    // Bootstrap admin account
    if let Some((user_id, password)) = config.bootstrap_admin() {
        match seed::ensure_admin(&db, user_id, password).await {
            Ok(true) => tracing::info!("Created admin account {}", user_id),
            Ok(false) => tracing::debug!("Admin account {} already exists", user_id),
            Err(e) => tracing::error!("Failed to create admin account: {}", e),
        }
    } else {
        tracing::warn!("ADMIN_USER_ID/ADMIN_PASSWORD not set, no admin bootstrapped");
    }

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    let sessions = SessionStore::new(chrono::Duration::hours(config.session_ttl_hours));
    let state = AppState::new(db, sessions).expect("Failed to build application state");
    let app = server::build_app(state, &config);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
