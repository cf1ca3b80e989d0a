// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed Record Store with typed operations.
//!
//! Each collection lives in `<data_dir>/<key>.json` and is always
//! rewritten in full (last-write-wins). Writes go to a temporary file
//! that is renamed over the target, so readers never observe a partial
//! document. The in-memory backend keeps the same semantics for tests.
//!
//! Provides high-level operations for:
//! - Workouts, foods, step imports, goals (entry collections)
//! - Users and the current-user pointer
//! - Export snapshots

use crate::db::{collections, StoreError};
use crate::models::{ExportSnapshot, FoodEntry, Goal, StepImportEntry, User, WorkoutEntry};
use chrono::NaiveDate;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Record Store handle. Cheap to clone.
#[derive(Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Backend,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

enum Backend {
    Disk { dir: PathBuf },
    Memory { documents: DashMap<String, String> },
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StoreError::Io {
                key: dir.display().to_string(),
                source,
            })?;

        tracing::info!(path = %dir.display(), "Opened record store");

        Ok(Self::with_backend(Backend::Disk { dir }))
    }

    /// Create an ephemeral store that lives only as long as this handle.
    pub fn in_memory() -> Self {
        Self::with_backend(Backend::Memory {
            documents: DashMap::new(),
        })
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                write_lock: Mutex::new(()),
            }),
        }
    }

    fn document_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.json", key))
    }

    // ─── Raw Collection Access ───────────────────────────────────

    /// Read a collection. `Ok(None)` means it was never written.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.read_raw(key).await? else {
            tracing::debug!(key, "Collection absent");
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Replace a collection in full.
    pub async fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = Self::serialize(key, value)?;
        let bytes = raw.len();
        self.write_raw(key, raw).await?;

        tracing::debug!(key, bytes, "Collection written");
        Ok(())
    }

    fn serialize<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StoreError> {
        serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })
    }

    fn io_error(key: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }

    async fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match &self.inner.backend {
            Backend::Memory { documents } => Ok(documents.get(key).map(|doc| doc.value().clone())),
            Backend::Disk { dir } => {
                match tokio::fs::read_to_string(Self::document_path(dir, key)).await {
                    Ok(raw) => Ok(Some(raw)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(source) => Err(Self::io_error(key, source)),
                }
            }
        }
    }

    async fn write_raw(&self, key: &str, raw: String) -> Result<(), StoreError> {
        match &self.inner.backend {
            Backend::Memory { documents } => {
                documents.insert(key.to_string(), raw);
                Ok(())
            }
            Backend::Disk { dir } => {
                let staging = Self::staging_path(dir, key);
                tokio::fs::write(&staging, raw.as_bytes())
                    .await
                    .map_err(|source| Self::io_error(key, source))?;
                Self::commit_staged(dir, key).await
            }
        }
    }

    fn staging_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.json.tmp", key))
    }

    /// Rename a staged document over its target, discarding the staging
    /// file on failure.
    async fn commit_staged(dir: &Path, key: &str) -> Result<(), StoreError> {
        let staging = Self::staging_path(dir, key);
        if let Err(source) = tokio::fs::rename(&staging, Self::document_path(dir, key)).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(Self::io_error(key, source));
        }
        Ok(())
    }

    /// Put back a document as it was before a failed multi-document write.
    async fn restore_raw(&self, key: &str, previous: Option<String>) {
        let result = match (&self.inner.backend, previous) {
            (_, Some(raw)) => self.write_raw(key, raw).await,
            (Backend::Memory { documents }, None) => {
                documents.remove(key);
                Ok(())
            }
            (Backend::Disk { dir }, None) => {
                match tokio::fs::remove_file(Self::document_path(dir, key)).await {
                    Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                        Err(Self::io_error(key, e))
                    }
                    _ => Ok(()),
                }
            }
        };

        if let Err(e) = result {
            tracing::error!(key, error = %e, "Failed to roll back collection");
        }
    }

    /// Replace several documents as one unit: either every document is
    /// replaced or every document keeps its previous contents.
    ///
    /// Callers must hold the write lock.
    async fn replace_all(&self, documents: Vec<(&str, String)>) -> Result<(), StoreError> {
        let Backend::Disk { dir } = &self.inner.backend else {
            for (key, raw) in documents {
                self.write_raw(key, raw).await?;
            }
            return Ok(());
        };

        let mut previous = Vec::with_capacity(documents.len());
        for (key, _) in &documents {
            previous.push(self.read_raw(key).await?);
        }

        for (index, (key, raw)) in documents.iter().enumerate() {
            if let Err(source) = tokio::fs::write(Self::staging_path(dir, key), raw.as_bytes()).await {
                for (staged, _) in &documents[..=index] {
                    let _ = tokio::fs::remove_file(Self::staging_path(dir, staged)).await;
                }
                return Err(Self::io_error(key, source));
            }
        }

        for (index, (key, _)) in documents.iter().enumerate() {
            if let Err(e) = Self::commit_staged(dir, key).await {
                for (pending, _) in &documents[index + 1..] {
                    let _ = tokio::fs::remove_file(Self::staging_path(dir, pending)).await;
                }
                for ((committed, _), old) in documents[..index].iter().zip(previous) {
                    self.restore_raw(committed, old).await;
                }
                tracing::warn!(key, error = %e, "Multi-collection write aborted");
                return Err(e);
            }
        }

        Ok(())
    }

    /// Read a record collection, treating absent as empty.
    pub async fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        Ok(self.get::<Vec<T>>(key).await?.unwrap_or_default())
    }

    /// Read-modify-write a record collection under the store's write lock.
    async fn update_collection<T, R, F>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = self.inner.write_lock.lock().await;
        let mut records = self.get_collection::<T>(key).await?;
        let result = f(&mut records);
        self.put(key, &records).await?;
        Ok(result)
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub async fn get_workouts(&self) -> Result<Vec<WorkoutEntry>, StoreError> {
        self.get_collection(collections::WORKOUTS).await
    }

    pub async fn add_workout(&self, workout: &WorkoutEntry) -> Result<(), StoreError> {
        self.update_collection(collections::WORKOUTS, |all: &mut Vec<WorkoutEntry>| {
            all.push(workout.clone())
        })
        .await?;
        tracing::info!(date = %workout.date, name = %workout.name, "Workout logged");
        Ok(())
    }

    /// Remove every workout with this date and name. Returns how many went.
    pub async fn delete_workouts(&self, date: NaiveDate, name: &str) -> Result<usize, StoreError> {
        let removed = self
            .update_collection(collections::WORKOUTS, |all: &mut Vec<WorkoutEntry>| {
                let before = all.len();
                all.retain(|w| !w.matches_key(date, name));
                before - all.len()
            })
            .await?;
        tracing::info!(%date, name, removed, "Workouts deleted");
        Ok(removed)
    }

    // ─── Food Operations ─────────────────────────────────────────

    pub async fn get_foods(&self) -> Result<Vec<FoodEntry>, StoreError> {
        self.get_collection(collections::FOODS).await
    }

    pub async fn add_food(&self, food: &FoodEntry) -> Result<(), StoreError> {
        self.update_collection(collections::FOODS, |all: &mut Vec<FoodEntry>| {
            all.push(food.clone())
        })
        .await?;
        tracing::info!(date = %food.date, name = %food.name, calories = food.calories, "Food logged");
        Ok(())
    }

    /// Remove every food with this date and name. Returns how many went.
    pub async fn delete_foods(&self, date: NaiveDate, name: &str) -> Result<usize, StoreError> {
        let removed = self
            .update_collection(collections::FOODS, |all: &mut Vec<FoodEntry>| {
                let before = all.len();
                all.retain(|f| !f.matches_key(date, name));
                before - all.len()
            })
            .await?;
        tracing::info!(%date, name, removed, "Foods deleted");
        Ok(removed)
    }

    // ─── Step Import Operations ──────────────────────────────────

    pub async fn get_step_imports(&self) -> Result<Vec<StepImportEntry>, StoreError> {
        self.get_collection(collections::STEP_IMPORTS).await
    }

    pub async fn add_step_import(&self, entry: &StepImportEntry) -> Result<(), StoreError> {
        self.update_collection(collections::STEP_IMPORTS, |all: &mut Vec<StepImportEntry>| {
            all.push(entry.clone())
        })
        .await?;
        tracing::info!(
            date = %entry.date,
            steps = entry.steps,
            calories_burned = entry.calories_burned,
            "Step import stored"
        );
        Ok(())
    }

    // ─── Goal Operations ─────────────────────────────────────────

    pub async fn get_goals(&self) -> Result<Vec<Goal>, StoreError> {
        self.get_collection(collections::GOALS).await
    }

    pub async fn add_goal(&self, goal: &Goal) -> Result<(), StoreError> {
        self.update_collection(collections::GOALS, |all: &mut Vec<Goal>| {
            all.push(goal.clone())
        })
        .await?;
        tracing::info!(kind = %goal.kind, value = %goal.value, "Goal added");
        Ok(())
    }

    /// Remove every goal with this type and value (compared as text).
    pub async fn delete_goals(&self, kind: &str, value: &str) -> Result<usize, StoreError> {
        let removed = self
            .update_collection(collections::GOALS, |all: &mut Vec<Goal>| {
                let before = all.len();
                all.retain(|g| !g.matches_key(kind, value));
                before - all.len()
            })
            .await?;
        tracing::info!(kind, value, removed, "Goals deleted");
        Ok(removed)
    }

    // ─── User Operations ─────────────────────────────────────────

    pub async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.get_collection(collections::USERS).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.get_users().await?.into_iter().find(|u| u.email == email))
    }

    /// Append a user and make them the current user in one write.
    /// Returns `false`, writing nothing, when the email is taken.
    pub async fn register_user(&self, user: &User) -> Result<bool, StoreError> {
        let _guard = self.inner.write_lock.lock().await;
        let mut users = self.get_users().await?;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());

        self.replace_all(vec![
            (collections::USERS, Self::serialize(collections::USERS, &users)?),
            (
                collections::CURRENT_USER,
                Self::serialize(collections::CURRENT_USER, &Some(user.email.as_str()))?,
            ),
        ])
        .await?;

        tracing::info!(email = %user.email, "User registered and signed in");
        Ok(true)
    }

    /// Replace the stored user with the same email. Returns `false` if absent.
    pub async fn update_user(&self, user: &User) -> Result<bool, StoreError> {
        self.update_collection(collections::USERS, |all: &mut Vec<User>| {
            match all.iter_mut().find(|u| u.email == user.email) {
                Some(existing) => {
                    *existing = user.clone();
                    true
                }
                None => false,
            }
        })
        .await
    }

    // ─── Session Pointer ─────────────────────────────────────────

    pub async fn get_current_user(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .get::<Option<String>>(collections::CURRENT_USER)
            .await?
            .flatten())
    }

    /// Set (`Some`) or clear (`None`) the active session email.
    pub async fn set_current_user(&self, email: Option<&str>) -> Result<(), StoreError> {
        self.put(collections::CURRENT_USER, &email).await?;
        tracing::info!(email = ?email, "Current user changed");
        Ok(())
    }

    // ─── Snapshots ───────────────────────────────────────────────

    /// Collect the four entry collections for export.
    pub async fn export_snapshot(&self) -> Result<ExportSnapshot, StoreError> {
        Ok(ExportSnapshot {
            workouts: self.get_workouts().await?,
            foods: self.get_foods().await?,
            step_imports: self.get_step_imports().await?,
            goals: self.get_goals().await?,
        })
    }

    /// Replace the four entry collections with a snapshot's contents.
    ///
    /// On failure all four collections keep their previous contents.
    pub async fn restore_snapshot(&self, snapshot: &ExportSnapshot) -> Result<(), StoreError> {
        let documents = vec![
            (
                collections::WORKOUTS,
                Self::serialize(collections::WORKOUTS, &snapshot.workouts)?,
            ),
            (
                collections::FOODS,
                Self::serialize(collections::FOODS, &snapshot.foods)?,
            ),
            (
                collections::STEP_IMPORTS,
                Self::serialize(collections::STEP_IMPORTS, &snapshot.step_imports)?,
            ),
            (
                collections::GOALS,
                Self::serialize(collections::GOALS, &snapshot.goals)?,
            ),
        ];

        let _guard = self.inner.write_lock.lock().await;
        self.replace_all(documents).await?;
        tracing::info!(
            workouts = snapshot.workouts.len(),
            foods = snapshot.foods.len(),
            step_imports = snapshot.step_imports.len(),
            goals = snapshot.goals.len(),
            "Snapshot restored"
        );
        Ok(())
    }
}
