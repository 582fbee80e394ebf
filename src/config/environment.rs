// ABOUTME: Environment configuration for session storage keys and navigation routes
// ABOUTME: Reads BLOCKBUSTRE_* variables with defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Environment-based configuration
//!
//! Fee rates are deliberately absent: the two tiers are fixed.

use std::env;
use std::fmt;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{env_config, routes, storage_keys};
use crate::navigation::Routes;
use crate::session::SessionKeys;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Core configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Storage keys the session lives under
    pub session_keys: SessionKeys,
    /// Route paths used for redirects
    pub routes: Routes,
}

impl AppConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value fails validation
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())
            .context("Failed to load configuration from environment")?;
        info!(
            environment = %config.environment,
            sign_in = %config.routes.sign_in,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value fails validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let config = Self {
            environment: lookup(env_config::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            session_keys: SessionKeys {
                access_token: var_or(env_config::ACCESS_TOKEN_KEY, storage_keys::ACCESS_TOKEN),
                refresh_token: var_or(env_config::REFRESH_TOKEN_KEY, storage_keys::REFRESH_TOKEN),
                profile: var_or(env_config::PROFILE_KEY, storage_keys::USER_DATA),
            },
            routes: Routes {
                sign_in: var_or(env_config::SIGN_IN_ROUTE, routes::SIGN_IN),
                dashboard: var_or(env_config::DASHBOARD_ROUTE, routes::DASHBOARD),
                admin_dashboard: var_or(env_config::ADMIN_ROUTE, routes::ADMIN_DASHBOARD),
                home: var_or(env_config::HOME_ROUTE, routes::HOME),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check keys and routes
    ///
    /// # Errors
    ///
    /// Returns an error if a storage key is blank, two keys collide, or a
    /// route is not an absolute path
    pub fn validate(&self) -> Result<()> {
        let keys = self.session_keys.all();
        for key in keys {
            if key.trim().is_empty() {
                bail!("Session storage keys must not be empty");
            }
        }
        if keys[0] == keys[1] || keys[0] == keys[2] || keys[1] == keys[2] {
            bail!("Session storage keys must be distinct: {keys:?}");
        }

        for (name, path) in [
            (env_config::SIGN_IN_ROUTE, &self.routes.sign_in),
            (env_config::DASHBOARD_ROUTE, &self.routes.dashboard),
            (env_config::ADMIN_ROUTE, &self.routes.admin_dashboard),
            (env_config::HOME_ROUTE, &self.routes.home),
        ] {
            if !path.starts_with('/') {
                bail!("{name} must be an absolute path, got '{path}'");
            }
        }
        Ok(())
    }
}
