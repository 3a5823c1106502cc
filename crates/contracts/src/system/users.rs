use serde::{Deserialize, Serialize};

/// Account row for the single-tenant staff login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}
