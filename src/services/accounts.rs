// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account lifecycle over the Record Store.
//!
//! Login is a plain lookup by username and email. It selects whose profile
//! (and weight) the dashboard uses; it is not an access-control boundary.

use crate::db::FileStore;
use crate::error::{AppError, Result};
use crate::models::User;

/// Accepted profile height range (cm).
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<u32> = 100..=250;
/// Accepted profile weight range (kg).
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<u32> = 30..=200;

/// Partial profile edit. Blank or out-of-range fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
}

impl ProfileUpdate {
    /// Apply to `user`, returning the names of fields that changed.
    pub fn apply(&self, user: &mut User) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(name) = self.username.as_deref().map(str::trim) {
            if !name.is_empty() {
                user.username = name.to_string();
                changed.push("username");
            }
        }
        if let Some(height) = self.height_cm.filter(|h| HEIGHT_RANGE_CM.contains(h)) {
            user.height_cm = height;
            changed.push("height");
        }
        if let Some(weight) = self.weight_kg.filter(|w| WEIGHT_RANGE_KG.contains(w)) {
            user.weight_kg = weight;
            changed.push("weight");
        }

        changed
    }
}

/// Signup, login, logout and profile edits.
#[derive(Clone)]
pub struct AccountService {
    store: FileStore,
}

impl AccountService {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Register a new user and make them the current user.
    pub async fn signup(&self, user: User) -> Result<User> {
        if !self.store.register_user(&user).await? {
            tracing::warn!(email = %user.email, "Signup rejected: email already registered");
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        tracing::info!(username = %user.username, email = %user.email, "User registered");
        Ok(user)
    }

    /// Log in when both username and email match a stored user.
    pub async fn login(&self, username: &str, email: &str) -> Result<User> {
        let user = self
            .store
            .get_users()
            .await?
            .into_iter()
            .find(|u| u.username == username && u.email == email)
            .ok_or_else(|| {
                tracing::warn!(username, email, "Login failed: no matching user");
                AppError::Unauthorized
            })?;

        self.store.set_current_user(Some(&user.email)).await?;
        tracing::info!(email = %user.email, "Login successful");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.store.set_current_user(None).await?;
        Ok(())
    }

    /// Resolve the current-user pointer to a stored profile.
    ///
    /// A pointer to an email that no longer exists counts as no session.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let Some(email) = self.store.get_current_user().await? else {
            return Ok(None);
        };
        Ok(self.store.find_user_by_email(&email).await?)
    }

    pub async fn update_profile(&self, email: &str, update: &ProfileUpdate) -> Result<User> {
        let mut user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))?;

        let changed = update.apply(&mut user);
        if !changed.is_empty() {
            self.store.update_user(&user).await?;
        }
        tracing::info!(email, changed = ?changed, "Profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User {
            username: username.to_string(),
            email: email.to_string(),
            gender: "male".to_string(),
            height_cm: 180,
            weight_kg: 80,
        }
    }

    #[tokio::test]
    async fn test_signup_sets_current_user() {
        let accounts = AccountService::new(FileStore::in_memory());

        accounts.signup(user("alex", "alex@example.com")).await.unwrap();

        let current = accounts.current_user().await.unwrap().unwrap();
        assert_eq!(current.email, "alex@example.com");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let accounts = AccountService::new(FileStore::in_memory());
        accounts.signup(user("alex", "alex@example.com")).await.unwrap();

        let err = accounts
            .signup(user("other", "alex@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_requires_username_and_email() {
        let accounts = AccountService::new(FileStore::in_memory());
        accounts.signup(user("alex", "alex@example.com")).await.unwrap();
        accounts.logout().await.unwrap();
        assert!(accounts.current_user().await.unwrap().is_none());

        let err = accounts.login("wrong", "alex@example.com").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));

        accounts.login("alex", "alex@example.com").await.unwrap();
        assert!(accounts.current_user().await.unwrap().is_some());
    }

    #[test]
    fn test_profile_update_skips_out_of_range() {
        let mut u = user("alex", "alex@example.com");
        let update = ProfileUpdate {
            username: Some("   ".to_string()),
            height_cm: Some(260),
            weight_kg: Some(75),
        };

        let changed = update.apply(&mut u);

        assert_eq!(changed, vec!["weight"]);
        assert_eq!(u.username, "alex");
        assert_eq!(u.height_cm, 180);
        assert_eq!(u.weight_kg, 75);
    }

    #[tokio::test]
    async fn test_update_profile_persists() {
        let store = FileStore::in_memory();
        let accounts = AccountService::new(store.clone());
        accounts.signup(user("alex", "alex@example.com")).await.unwrap();

        let update = ProfileUpdate {
            username: Some(" lex ".to_string()),
            ..Default::default()
        };
        accounts.update_profile("alex@example.com", &update).await.unwrap();

        let stored = store.find_user_by_email("alex@example.com").await.unwrap().unwrap();
        assert_eq!(stored.username, "lex");
    }
}
