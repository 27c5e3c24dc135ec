use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Mapping-table cascades rely on this
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    run_migrations(&db).await?;

    Ok(db)
}

/// Schema statements, in dependency order. Every statement is idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS admin (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS level (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        level INTEGER NOT NULL,
        level_name TEXT NOT NULL,
        level_description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL,
        google_id TEXT NOT NULL,
        name TEXT NOT NULL,
        username TEXT,
        phone TEXT,
        code TEXT NOT NULL,
        book_cnt INTEGER NOT NULL DEFAULT 3,
        gem_cnt INTEGER NOT NULL DEFAULT 0,
        set_goal_cnt INTEGER NOT NULL DEFAULT 3,
        refresh_token TEXT,
        created_at TEXT NOT NULL,
        last_logged_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_has_token (
        user_id TEXT NOT NULL,
        token TEXT NOT NULL,
        is_message_allowed BOOLEAN NOT NULL DEFAULT 1,
        PRIMARY KEY (user_id, token),
        FOREIGN KEY (user_id) REFERENCES "user"(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_book (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_nm TEXT NOT NULL,
        language TEXT NOT NULL,
        source TEXT NOT NULL,
        category TEXT,
        username TEXT,
        word_count INTEGER,
        updated_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL,
        pronunciation TEXT,
        verb_forms TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_meaning (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meaning TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_example (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        exam_en TEXT,
        exam_ko TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookstore (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        downloads INTEGER NOT NULL,
        category TEXT NOT NULL,
        color TEXT,
        gem INTEGER NOT NULL DEFAULT 10,
        hide TEXT NOT NULL,
        level TEXT,
        level_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT,
        FOREIGN KEY (level_id) REFERENCES level(id),
        FOREIGN KEY (book_id) REFERENCES voca_book(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_book_map (
        voca_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        PRIMARY KEY (voca_id, book_id),
        FOREIGN KEY (voca_id) REFERENCES voca(id) ON DELETE CASCADE,
        FOREIGN KEY (book_id) REFERENCES voca_book(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_meaning_map (
        voca_id INTEGER NOT NULL,
        meaning_id INTEGER NOT NULL,
        PRIMARY KEY (voca_id, meaning_id),
        FOREIGN KEY (voca_id) REFERENCES voca(id) ON DELETE CASCADE,
        FOREIGN KEY (meaning_id) REFERENCES voca_meaning(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS voca_example_map (
        voca_id INTEGER NOT NULL,
        example_id INTEGER NOT NULL,
        PRIMARY KEY (voca_id, example_id),
        FOREIGN KEY (voca_id) REFERENCES voca(id) ON DELETE CASCADE,
        FOREIGN KEY (example_id) REFERENCES voca_example(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS daily_sentence (
        date TEXT NOT NULL,
        sentence TEXT NOT NULL,
        meaning TEXT NOT NULL,
        PRIMARY KEY (date, sentence)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_voca_book (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        vocabook_id INTEGER,
        color TEXT NOT NULL,
        name TEXT NOT NULL,
        total_word_cnt INTEGER NOT NULL DEFAULT 0,
        voca_list TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT,
        FOREIGN KEY (user_id) REFERENCES "user"(id) ON DELETE CASCADE,
        FOREIGN KEY (vocabook_id) REFERENCES voca_book(id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS check_in (
        user_id TEXT NOT NULL,
        attendence_check TEXT NOT NULL,
        today_study_complete TEXT NOT NULL,
        PRIMARY KEY (user_id, attendence_check),
        FOREIGN KEY (user_id) REFERENCES "user"(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_recent_study (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        study_data TEXT NOT NULL,
        status TEXT NOT NULL,
        progress_index INTEGER,
        created_at TEXT NOT NULL,
        updated_at TEXT,
        FOREIGN KEY (user_id) REFERENCES "user"(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS goals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        title TEXT NOT NULL,
        reward_value INTEGER NOT NULL,
        reward_type TEXT NOT NULL,
        reward INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_goals (
        user_id TEXT NOT NULL,
        goal_id INTEGER NOT NULL,
        current_value INTEGER NOT NULL,
        status TEXT NOT NULL,
        completed_at TEXT NOT NULL,
        PRIMARY KEY (user_id, goal_id),
        FOREIGN KEY (user_id) REFERENCES "user"(id) ON DELETE CASCADE,
        FOREIGN KEY (goal_id) REFERENCES goals(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookstore_category (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookstore_has_category (
        bookstore_id INTEGER NOT NULL,
        category_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        PRIMARY KEY (bookstore_id, category_id),
        FOREIGN KEY (bookstore_id) REFERENCES bookstore(id) ON DELETE CASCADE,
        FOREIGN KEY (category_id) REFERENCES bookstore_category(id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_bookstore_book_id ON bookstore(book_id)",
    "CREATE INDEX IF NOT EXISTS idx_voca_word ON voca(word)",
    "CREATE INDEX IF NOT EXISTS idx_voca_book_map_book_id ON voca_book_map(book_id)",
];

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }

    tracing::debug!("Schema ready ({} statements)", SCHEMA.len());
    Ok(())
}
