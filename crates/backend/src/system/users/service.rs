use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::system::auth::password;

/// Outcome of a credential check
pub enum Credentials {
    Valid(User),
    WrongPassword,
    UnknownEmail,
}

pub async fn check_credentials(
    ctx: &AppContext,
    email: &str,
    pass: &str,
) -> Result<Credentials> {
    let user = match repository::get_by_email(&ctx.db, email).await? {
        Some(u) => u,
        None => return Ok(Credentials::UnknownEmail),
    };

    let hash = repository::get_password_hash(&ctx.db, &user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(pass, &hash)? {
        return Ok(Credentials::WrongPassword);
    }

    let _ = repository::update_last_login(&ctx.db, &user.id).await;

    Ok(Credentials::Valid(user))
}

/// First-login provisioning: an unknown email creates its own account,
/// mirroring the sign-in-then-sign-up fallback of the original client.
pub async fn provision(ctx: &AppContext, email: &str, pass: &str) -> Result<User> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    password::validate_password_strength(pass)?;

    let hash = password::hash_password(pass)?;
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.to_string(),
        created_at: Utc::now().to_rfc3339(),
        last_login_at: None,
    };

    repository::create_with_password(&ctx.db, &user, &hash).await?;
    tracing::info!("Provisioned account for {}", user.email);

    Ok(user)
}

pub async fn get_by_id(ctx: &AppContext, id: &str) -> Result<Option<User>> {
    repository::get_by_id(&ctx.db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;

    #[tokio::test]
    async fn test_provision_then_check_credentials() {
        let ctx = test_context().await;

        let user = provision(&ctx, "worker@farm.example", "secret-pass")
            .await
            .unwrap();

        match check_credentials(&ctx, "worker@farm.example", "secret-pass")
            .await
            .unwrap()
        {
            Credentials::Valid(u) => assert_eq!(u.id, user.id),
            _ => panic!("expected valid credentials"),
        }

        assert!(matches!(
            check_credentials(&ctx, "worker@farm.example", "wrong")
                .await
                .unwrap(),
            Credentials::WrongPassword
        ));

        assert!(matches!(
            check_credentials(&ctx, "nobody@farm.example", "secret-pass")
                .await
                .unwrap(),
            Credentials::UnknownEmail
        ));
    }

    #[tokio::test]
    async fn test_provision_rejects_bad_email_and_weak_password() {
        let ctx = test_context().await;
        assert!(provision(&ctx, "not-an-email", "secret-pass").await.is_err());
        assert!(provision(&ctx, "ok@farm.example", "short").await.is_err());
    }
}
