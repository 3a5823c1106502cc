use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// Open (creating if needed) the SQLite database file
pub async fn connect(db_file: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;
    Ok(conn)
}

/// Create every table the application needs.
///
/// Record tables are append-only: rows get inserted by the form handlers
/// and are never updated or deleted afterwards.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS a001_expense (
            id TEXT PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT '',
            amount REAL NOT NULL DEFAULT 0,
            notes TEXT NOT NULL DEFAULT '',
            created_by TEXT NOT NULL DEFAULT 'anon',
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a002_egg_log (
            id TEXT PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            shed TEXT NOT NULL DEFAULT '',
            collected INTEGER NOT NULL DEFAULT 0,
            broken INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a003_feed_log (
            id TEXT PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            shed TEXT NOT NULL DEFAULT '',
            kg REAL NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a004_employee (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a005_attendance (
            id TEXT PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            employee TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a006_mortality_log (
            id TEXT PRIMARY KEY NOT NULL,
            date TEXT NOT NULL,
            shed TEXT NOT NULL DEFAULT '',
            count INTEGER NOT NULL DEFAULT 0,
            reason TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            token_hash TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    tracing::info!("Database schema is up to date");
    Ok(())
}
