// ABOUTME: Sign-in and sign-out writers for the persisted session
// ABOUTME: Stores tokens plus serialized profile after login and clears them on logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use serde::{Deserialize, Serialize};
use tracing::info;

use super::guard::{classify_profile, Classification};
use super::storage::{SessionKeys, SessionStorageMut};
use crate::errors::{AppError, AppResult};
use crate::models::Profile;

/// Successful login response from the accounts backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInPayload {
    /// Access token
    pub access: String,
    /// Refresh token
    pub refresh: String,
    /// Signed-in user
    pub user: Profile,
}

/// Persist a login and return the caller's new classification
///
/// The profile is written last so a reader never sees a profile without the
/// credential it belongs to.
///
/// # Errors
///
/// Returns an error if the access token is blank, the profile fails
/// validation, or the profile cannot be serialized
pub fn sign_in<S>(storage: &S, keys: &SessionKeys, payload: &SignInPayload) -> AppResult<Classification>
where
    S: SessionStorageMut + ?Sized,
{
    if payload.access.trim().is_empty() {
        return Err(AppError::invalid_input("Access token is empty"));
    }
    payload
        .user
        .validate()
        .map_err(|reason| AppError::invalid_input(format!("Invalid profile: {reason}")))?;

    let serialized = serde_json::to_string(&payload.user)?;
    storage.set(&keys.access_token, payload.access.clone());
    storage.set(&keys.refresh_token, payload.refresh.clone());
    storage.set(&keys.profile, serialized);

    let classification = classify_profile(&payload.user);
    info!(user_id = %payload.user.id, %classification, "session stored");
    Ok(classification)
}

/// Clear every session key
pub fn sign_out<S>(storage: &S, keys: &SessionKeys)
where
    S: SessionStorageMut + ?Sized,
{
    // Credential first: once it is gone the guard reports Anonymous
    for key in keys.all() {
        storage.remove(key);
    }
    info!("session cleared");
}
