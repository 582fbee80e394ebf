// ABOUTME: Data models shared across session gating, pricing, and dashboard data access
// ABOUTME: Re-exports profile, billing, and dashboard record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Data models

/// Subscription snapshot and billing record
pub mod billing;
/// Contracts, transactions, users, and statistics served to the dashboards
pub mod dashboard;
/// Persisted user profile and role
pub mod user;

pub use billing::{BillingRecord, SubscriptionState, SubscriptionTier, SubscriptionType};
pub use dashboard::{
    AdminStats, BlockchainNetwork, ContractRecord, ContractStatus, TransactionKind,
    TransactionRecord, TransactionStatus, UserSummary,
};
pub use user::{Profile, RecordId, RoleRef};
