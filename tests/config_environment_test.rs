// ABOUTME: Integration tests for environment-driven configuration and logging settings
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use blockbustre_core::config::{AppConfig, Environment};
use blockbustre_core::logging::{LogFormat, LoggingConfig};
use blockbustre_core::session::{Classification, MemorySessionStorage, SessionGuard, SessionStorageMut};
use serial_test::serial;

const CONFIG_VARS: [&str; 8] = [
    "BLOCKBUSTRE_ENV",
    "BLOCKBUSTRE_ACCESS_TOKEN_KEY",
    "BLOCKBUSTRE_REFRESH_TOKEN_KEY",
    "BLOCKBUSTRE_PROFILE_KEY",
    "BLOCKBUSTRE_SIGN_IN_ROUTE",
    "BLOCKBUSTRE_DASHBOARD_ROUTE",
    "BLOCKBUSTRE_ADMIN_ROUTE",
    "BLOCKBUSTRE_HOME_ROUTE",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.session_keys.access_token, "access_token");
    assert_eq!(config.routes.dashboard, "/dashboard");
}

#[test]
#[serial]
fn test_from_env_overrides_drive_the_guard() {
    clear_config_env();
    env::set_var("BLOCKBUSTRE_ENV", "production");
    env::set_var("BLOCKBUSTRE_ACCESS_TOKEN_KEY", "bb_access");
    env::set_var("BLOCKBUSTRE_PROFILE_KEY", "bb_profile");

    let config = AppConfig::from_env().unwrap();
    clear_config_env();

    assert!(config.environment.is_production());
    assert_eq!(config.session_keys.access_token, "bb_access");
    assert_eq!(config.session_keys.refresh_token, "refresh_token");

    let storage = MemorySessionStorage::new();
    storage.set("bb_access", "token".to_owned());
    storage.set(
        "bb_profile",
        r#"{"id":1,"email":"a@b.io","firstName":"A","lastName":"B","role":{"id":1,"name":"Admin"}}"#
            .to_owned(),
    );
    let guard = SessionGuard::with_keys(&storage, config.session_keys);
    assert_eq!(guard.current_classification(), Classification::Admin);
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_values() {
    clear_config_env();
    env::set_var("BLOCKBUSTRE_HOME_ROUTE", "home");
    let result = AppConfig::from_env();
    clear_config_env();
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("BLOCKBUSTRE_HOME_ROUTE"), "{message}");

    env::set_var("BLOCKBUSTRE_REFRESH_TOKEN_KEY", " ");
    let result = AppConfig::from_env();
    clear_config_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "notary-web");

    let config = LoggingConfig::from_env();

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "notary-web");
    assert_eq!(config.environment, "production");
}
