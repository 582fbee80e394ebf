// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus profile, contract, and user builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `blockbustre_core`

use std::sync::Once;

use blockbustre_core::models::{
    BlockchainNetwork, ContractRecord, ContractStatus, Profile, RoleRef, SubscriptionType,
    TransactionKind, TransactionRecord, TransactionStatus, UserSummary,
};
use blockbustre_core::session::{MemorySessionStorage, SessionKeys, SessionStorageMut};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a decimal literal
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Fixed reference instant so ordering assertions are stable
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// Profile with no role
pub fn user_profile() -> Profile {
    Profile::new(7_i64, "sam@example.com", "Sam", "Lee")
}

/// Profile carrying a role with the given name
pub fn profile_with_role(role_name: &str) -> Profile {
    user_profile().with_role(RoleRef::new(1_i64, role_name))
}

/// Serialized profile exactly as sign-in stores it
pub fn profile_json(profile: &Profile) -> String {
    serde_json::to_string(profile).unwrap()
}

/// Storage holding a credential and the given raw profile value
pub fn storage_with_session(raw_profile: &str) -> MemorySessionStorage {
    let storage = MemorySessionStorage::new();
    let keys = SessionKeys::default();
    storage.set(&keys.access_token, "access-token".to_owned());
    storage.set(&keys.refresh_token, "refresh-token".to_owned());
    storage.set(&keys.profile, raw_profile.to_owned());
    storage
}

/// Contract created `age_minutes` before [`base_time`]
pub fn contract(
    title: &str,
    owner_email: &str,
    status: ContractStatus,
    network: BlockchainNetwork,
    age_minutes: i64,
) -> ContractRecord {
    ContractRecord {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        category: "Real Estate".to_owned(),
        owner_email: owner_email.to_owned(),
        status,
        network,
        gas_fee: dec("12.00"),
        service_fee: dec("1.80"),
        created_at: base_time() - Duration::minutes(age_minutes),
    }
}

/// Transaction created `age_minutes` before [`base_time`]
pub fn transaction(
    user_email: &str,
    status: TransactionStatus,
    amount: &str,
    age_minutes: i64,
) -> TransactionRecord {
    TransactionRecord {
        id: Uuid::new_v4(),
        user_email: user_email.to_owned(),
        kind: TransactionKind::ContractDeployment,
        status,
        amount: dec(amount),
        currency: "USD".to_owned(),
        created_at: base_time() - Duration::minutes(age_minutes),
    }
}

/// User registered `age_minutes` before [`base_time`]
pub fn user_summary(
    email: &str,
    first_name: &str,
    last_name: &str,
    role_name: Option<&str>,
    is_active: bool,
    age_minutes: i64,
) -> UserSummary {
    UserSummary {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        role_name: role_name.map(str::to_owned),
        subscription: SubscriptionType::PayAsYouGo,
        is_active,
        created_at: base_time() - Duration::minutes(age_minutes),
    }
}
