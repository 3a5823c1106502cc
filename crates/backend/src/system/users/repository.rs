use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};

fn row_to_user(row: &QueryResult) -> Result<User> {
    Ok(User {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        created_at: row.try_get("", "created_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

pub async fn get_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<User>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, email, created_at, last_login_at FROM sys_users WHERE email = ?",
            [email.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<User>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, email, created_at, last_login_at FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

pub async fn create_with_password(
    db: &DatabaseConnection,
    user: &User,
    password_hash: &str,
) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, email, password_hash, created_at, last_login_at)
         VALUES (?, ?, ?, ?, NULL)",
        [
            user.id.clone().into(),
            user.email.clone().into(),
            password_hash.to_string().into(),
            user.created_at.clone().into(),
        ],
    ))
    .await?;

    Ok(())
}

pub async fn get_password_hash(db: &DatabaseConnection, user_id: &str) -> Result<Option<String>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login(db: &DatabaseConnection, user_id: &str) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
        [Utc::now().to_rfc3339().into(), user_id.into()],
    ))
    .await?;

    Ok(())
}
