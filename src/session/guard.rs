// ABOUTME: Session guard classifying callers as Anonymous, User, or Admin from stored values
// ABOUTME: Fails closed on missing or malformed sessions and authorizes against page requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! # Session Guard
//!
//! Every protected view asks the guard for the caller's [`Classification`]
//! before it mounts, then checks it against the view's [`RequiredRole`].
//! Nothing is cached here: each mount re-reads storage, so a sign-out or a
//! role change is visible on the next check.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::storage::{SessionKeys, SessionStorage};
use crate::errors::{AppError, AppResult};
use crate::models::Profile;

/// Who the caller is, derived from the persisted session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No usable session
    Anonymous,
    /// Signed in without the admin role
    User,
    /// Signed in with the admin role
    Admin,
}

impl Classification {
    /// Whether a session exists at all
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Anonymous => write!(f, "anonymous"),
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Access level a view demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredRole {
    /// Any signed-in caller
    AnyAuthenticated,
    /// Admins only
    AdminOnly,
}

/// Why access was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No valid session
    NotSignedIn,
    /// Valid session without the required role
    InsufficientRole,
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the view
    Allow,
    /// Do not render; the caller redirects
    Deny(DenyReason),
}

impl AccessDecision {
    /// Whether the view may render
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert a denial into an error for `?`-style callers
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` for [`DenyReason::NotSignedIn`] and
    /// `InsufficientRole` for [`DenyReason::InsufficientRole`]
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::NotSignedIn) => {
                Err(AppError::unauthenticated("Sign in to continue"))
            }
            Self::Deny(DenyReason::InsufficientRole) => Err(AppError::insufficient_role(
                "Admin role required for this page",
            )),
        }
    }
}

/// Why a stored session could not be used
#[derive(Debug, Error)]
pub enum SessionError {
    /// No credential stored
    #[error("no credential stored")]
    MissingCredential,
    /// No profile stored
    #[error("no profile stored")]
    MissingProfile,
    /// Stored profile is not a JSON object
    #[error("stored profile is not a JSON object")]
    NotAnObject,
    /// Stored profile does not have the profile shape
    #[error("stored profile is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Stored profile parsed but fails validation
    #[error("stored profile is invalid: {0}")]
    Invalid(&'static str),
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        Self::unauthenticated(error.to_string()).with_source(error)
    }
}

/// Parse a stored profile
///
/// # Errors
///
/// Returns [`SessionError`] when the value is not a JSON object, lacks a
/// required field, or carries an unusable email
pub fn parse_profile(raw_profile: &str) -> Result<Profile, SessionError> {
    let value: serde_json::Value = serde_json::from_str(raw_profile)?;
    // serde accepts sequences for structs; a profile must be an object
    if !value.is_object() {
        return Err(SessionError::NotAnObject);
    }
    let profile: Profile = serde_json::from_value(value)?;
    profile.validate().map_err(SessionError::Invalid)?;
    Ok(profile)
}

/// Check that a credential is present and parse the profile stored with it
///
/// # Errors
///
/// Returns [`SessionError`] when either value is absent or the profile is
/// unusable
pub fn load_session(
    raw_credential: Option<&str>,
    raw_profile: Option<&str>,
) -> Result<Profile, SessionError> {
    raw_credential
        .filter(|token| !token.trim().is_empty())
        .ok_or(SessionError::MissingCredential)?;
    let raw_profile = raw_profile.ok_or(SessionError::MissingProfile)?;
    parse_profile(raw_profile)
}

/// Classify the caller from the two stored values
///
/// Never fails: any problem with the session yields
/// [`Classification::Anonymous`].
#[must_use]
pub fn classify(raw_credential: Option<&str>, raw_profile: Option<&str>) -> Classification {
    match load_session(raw_credential, raw_profile) {
        Ok(profile) => classify_profile(&profile),
        Err(error) => {
            debug!(reason = %error, "session rejected, treating caller as anonymous");
            Classification::Anonymous
        }
    }
}

/// Classify an already-parsed profile
#[must_use]
pub fn classify_profile(profile: &Profile) -> Classification {
    if profile.is_admin() {
        Classification::Admin
    } else {
        Classification::User
    }
}

/// Decide whether `classification` satisfies `required`
#[must_use]
pub const fn authorize(classification: Classification, required: RequiredRole) -> AccessDecision {
    match (classification, required) {
        (Classification::Anonymous, _) => AccessDecision::Deny(DenyReason::NotSignedIn),
        (Classification::User, RequiredRole::AdminOnly) => {
            AccessDecision::Deny(DenyReason::InsufficientRole)
        }
        (Classification::User, RequiredRole::AnyAuthenticated) | (Classification::Admin, _) => {
            AccessDecision::Allow
        }
    }
}

/// Guard bound to a storage provider
#[derive(Debug, Clone)]
pub struct SessionGuard<S> {
    storage: S,
    keys: SessionKeys,
}

impl<S: SessionStorage> SessionGuard<S> {
    /// Create a guard reading the default storage keys
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, SessionKeys::default())
    }

    /// Create a guard reading custom storage keys
    #[must_use]
    pub const fn with_keys(storage: S, keys: SessionKeys) -> Self {
        Self { storage, keys }
    }

    /// Storage keys in use
    #[must_use]
    pub const fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    /// Underlying storage
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read storage and classify the caller
    #[must_use]
    pub fn current_classification(&self) -> Classification {
        let credential = self.storage.get(&self.keys.access_token);
        let profile = self.storage.get(&self.keys.profile);
        classify(credential.as_deref(), profile.as_deref())
    }

    /// Read storage and return the signed-in profile
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when there is no usable session
    pub fn current_profile(&self) -> Result<Profile, SessionError> {
        let credential = self.storage.get(&self.keys.access_token);
        let profile = self.storage.get(&self.keys.profile);
        load_session(credential.as_deref(), profile.as_deref())
    }

    /// Classify and authorize in one step
    #[must_use]
    pub fn check(&self, required: RequiredRole) -> AccessDecision {
        authorize(self.current_classification(), required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_PROFILE: &str =
        r#"{"id":1,"email":"user@example.com","firstName":"Sam","lastName":"Lee"}"#;

    #[test]
    fn test_missing_values_are_anonymous() {
        assert_eq!(classify(None, None), Classification::Anonymous);
        assert_eq!(classify(Some("token"), None), Classification::Anonymous);
        assert_eq!(classify(None, Some(USER_PROFILE)), Classification::Anonymous);
    }

    #[test]
    fn test_blank_credential_is_anonymous() {
        assert_eq!(classify(Some("  "), Some(USER_PROFILE)), Classification::Anonymous);
    }

    #[test]
    fn test_array_profile_is_rejected() {
        let raw = r#"[1,"user@example.com","Sam","Lee"]"#;
        assert!(matches!(parse_profile(raw), Err(SessionError::NotAnObject)));
    }

    #[test]
    fn test_profile_without_role_is_user() {
        assert_eq!(classify(Some("token"), Some(USER_PROFILE)), Classification::User);
    }

    #[test]
    fn test_authorize_table() {
        use Classification::{Admin, Anonymous, User};
        use RequiredRole::{AdminOnly, AnyAuthenticated};

        assert_eq!(
            authorize(Anonymous, AnyAuthenticated),
            AccessDecision::Deny(DenyReason::NotSignedIn)
        );
        assert_eq!(
            authorize(Anonymous, AdminOnly),
            AccessDecision::Deny(DenyReason::NotSignedIn)
        );
        assert_eq!(authorize(User, AnyAuthenticated), AccessDecision::Allow);
        assert_eq!(
            authorize(User, AdminOnly),
            AccessDecision::Deny(DenyReason::InsufficientRole)
        );
        assert_eq!(authorize(Admin, AnyAuthenticated), AccessDecision::Allow);
        assert_eq!(authorize(Admin, AdminOnly), AccessDecision::Allow);
    }

    #[test]
    fn test_denial_maps_to_error_code() {
        use crate::errors::ErrorCode;

        let err = AccessDecision::Deny(DenyReason::NotSignedIn)
            .into_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);

        let err = AccessDecision::Deny(DenyReason::InsufficientRole)
            .into_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientRole);

        assert!(AccessDecision::Allow.into_result().is_ok());
    }

    #[test]
    fn test_decision_wire_format() {
        let json = serde_json::to_string(&AccessDecision::Deny(DenyReason::InsufficientRole))
            .unwrap();
        assert_eq!(json, r#"{"decision":"deny","reason":"insufficient_role"}"#);
    }
}
