//! Accounts: registration, credential checks and profile updates.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::store::DynStore;
use crate::utils::password::{hash_password, verify_password};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct UserService {
    store: DynStore,
}

impl UserService {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Creates an account with an Argon2id-hashed password.
    ///
    /// Emails are compared case-insensitively; a taken address is
    /// `AppError::Duplicate`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email);

        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: email,
            });
        }

        let user = self
            .store
            .create_user(NewUser {
                name: name.trim().to_string(),
                email,
                password: hash_password(password)?,
                avatar: None,
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    /// Checks credentials. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .store
            .find_user_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(password, &user.password)? {
            tracing::debug!(user_id = user.id, "Password mismatch");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.store
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", "id", id))
    }

    /// Applies the given profile changes; an empty change set is a read.
    pub async fn update_profile(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return self.get(id).await;
        }
        self.store.update_user(id, changes).await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
