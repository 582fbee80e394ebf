// ABOUTME: Persisted user profile and role reference read from client storage
// ABOUTME: Profile parsing accepts camelCase and backend snake_case field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::constants::roles;

/// Identifier as emitted by the accounts backend
///
/// The backend serializes integer primary keys, but profiles written by other
/// clients sometimes carry string ids. Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer primary key
    Numeric(i64),
    /// Opaque string key
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

/// Role attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// Role primary key
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Role name; `"Admin"` is the only privileged value
    #[serde(default)]
    pub name: Option<String>,
}

impl RoleRef {
    /// Create a role reference
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// Role name with surrounding whitespace removed, `None` when blank
    #[must_use]
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Case-sensitive exact match against the admin role name
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.trimmed_name() == Some(roles::ADMIN)
    }
}

/// User profile as stored at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// User primary key
    pub id: RecordId,
    /// Email address used to sign in
    pub email: String,
    /// Given name
    #[serde(alias = "first_name")]
    pub first_name: String,
    /// Family name
    #[serde(alias = "last_name")]
    pub last_name: String,
    /// Role, absent for unprivileged users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleRef>,
}

impl Profile {
    /// Create a profile without a role
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: None,
        }
    }

    /// Attach a role
    #[must_use]
    pub fn with_role(mut self, role: RoleRef) -> Self {
        self.role = Some(role);
        self
    }

    /// "First Last", as the dashboard greets the user
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }

    /// Trimmed, non-empty role name
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().and_then(RoleRef::trimmed_name)
    }

    /// Whether the role grants admin access
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(RoleRef::is_admin)
    }

    /// Structural checks serde cannot express
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is empty");
        }
        if !email.contains('@') {
            return Err("email has no '@'");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_is_trimmed() {
        let role = RoleRef::new(1_i64, "  Admin \n");
        assert_eq!(role.trimmed_name(), Some("Admin"));
        assert!(role.is_admin());
    }

    #[test]
    fn test_blank_role_name_is_none() {
        let role = RoleRef::new(2_i64, "   ");
        assert_eq!(role.trimmed_name(), None);
        assert!(!role.is_admin());
    }

    #[test]
    fn test_admin_match_is_case_sensitive() {
        assert!(!RoleRef::new(1_i64, "admin").is_admin());
        assert!(!RoleRef::new(1_i64, "ADMIN").is_admin());
    }

    #[test]
    fn test_full_name() {
        let profile = Profile::new(7_i64, "ada@example.com", "Ada", " Lovelace ");
        assert_eq!(profile.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_snake_case_aliases() {
        let raw = r#"{"id":3,"email":"a@b.io","first_name":"A","last_name":"B","role":null}"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.first_name, "A");
        assert!(profile.role.is_none());
    }

    #[test]
    fn test_string_ids_accepted() {
        let raw = r#"{"id":"u-1","email":"a@b.io","firstName":"A","lastName":"B","role":{"id":"r-1","name":"Admin"}}"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.id, RecordId::Text("u-1".to_owned()));
        assert!(profile.is_admin());
    }
}
