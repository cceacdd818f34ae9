//! Profile session service
//!
//! Profiles live in memory only. Each session holds one profile; updating a
//! session replaces its profile wholesale.

use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use serde::Serialize;
use shared::{validate_profile_input, FarmerProfile, ProfileInput};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Upper bound on concurrent sessions held by a store
pub const DEFAULT_MAX_PROFILES: usize = 10_000;

/// In-memory profile storage shared across requests
///
/// Sessions have no expiry; they end on delete or restart. Creation fails
/// once `max_profiles` sessions are open.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<HashMap<Uuid, FarmerProfile>>>,
    max_profiles: usize,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_PROFILES)
    }
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_profiles: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_profiles,
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// A profile together with its session id
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSession {
    pub id: Uuid,
    pub profile: FarmerProfile,
}

/// Profile service for managing session profiles
#[derive(Clone)]
pub struct ProfileService {
    store: ProfileStore,
}

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Create a profile for a new session
    pub async fn create_profile(
        &self,
        input: ProfileInput,
        today: NaiveDate,
    ) -> AppResult<ProfileSession> {
        let profile = Self::resolve_input(input, today)?;
        let id = Uuid::new_v4();

        let mut profiles = self.store.inner.write().await;
        if profiles.len() >= self.store.max_profiles {
            tracing::warn!(limit = self.store.max_profiles, "Profile store is full");
            return Err(AppError::Unavailable(
                "Too many active profiles, try again later".to_string(),
            ));
        }
        profiles.insert(id, profile.clone());
        drop(profiles);
        tracing::info!(session_id = %id, crop = %profile.crop_type, "Profile created");

        Ok(ProfileSession { id, profile })
    }

    /// Get the profile of a session
    pub async fn get_profile(&self, id: Uuid) -> AppResult<FarmerProfile> {
        self.store
            .inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Profile".to_string()))
    }

    /// Replace the profile of an existing session
    pub async fn replace_profile(
        &self,
        id: Uuid,
        input: ProfileInput,
        today: NaiveDate,
    ) -> AppResult<ProfileSession> {
        let profile = Self::resolve_input(input, today)?;

        let mut profiles = self.store.inner.write().await;
        let slot = profiles
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Profile".to_string()))?;
        *slot = profile.clone();
        tracing::info!(session_id = %id, crop = %profile.crop_type, "Profile replaced");

        Ok(ProfileSession { id, profile })
    }

    /// End a session and drop its profile
    pub async fn delete_profile(&self, id: Uuid) -> AppResult<()> {
        self.store
            .inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Profile".to_string()))
    }

    fn resolve_input(input: ProfileInput, today: NaiveDate) -> AppResult<FarmerProfile> {
        validate_profile_input(&input, today)
            .map_err(|(field, message)| AppError::validation(field, message))?;

        let requested = input.crop_type.clone();
        let (profile, fallback) = input.into_profile();
        if fallback {
            tracing::warn!(
                crop_type = %requested,
                "Unknown crop type, using {} timeline",
                profile.crop_type
            );
        }
        Ok(profile)
    }
}
