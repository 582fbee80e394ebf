// ABOUTME: Data service contract behind the customer and admin dashboards
// ABOUTME: Async trait for stats, contract, and user listings plus their filter types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Dashboard data access
//!
//! Dashboards never hard-code their tables; they ask a
//! [`DashboardDataService`] and render whatever comes back. Remote
//! implementations talk to the accounts and contracts backend;
//! [`memory::InMemoryDashboardData`] serves seeded records.

/// In-memory implementation
pub mod memory;

pub use memory::InMemoryDashboardData;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::{AdminStats, BlockchainNetwork, ContractRecord, ContractStatus, UserSummary};

/// Contract listing filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFilter {
    /// Only contracts in this status
    pub status: Option<ContractStatus>,
    /// Only contracts on this network
    pub network: Option<BlockchainNetwork>,
    /// Only contracts owned by this email (case-insensitive)
    pub owner_email: Option<String>,
    /// Case-insensitive substring of the title
    pub search: Option<String>,
}

impl ContractFilter {
    /// Contracts owned by `email`, as the customer dashboard lists them
    #[must_use]
    pub fn owned_by(email: impl Into<String>) -> Self {
        Self {
            owner_email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Whether `contract` passes the filter
    #[must_use]
    pub fn matches(&self, contract: &ContractRecord) -> bool {
        self.status.is_none_or(|status| contract.status == status)
            && self.network.is_none_or(|network| contract.network == network)
            && self
                .owner_email
                .as_deref()
                .is_none_or(|email| contract.owner_email.eq_ignore_ascii_case(email.trim()))
            && self
                .search
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(&contract.title, needle))
    }
}

/// User listing filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Only users with this role name (exact, after trimming)
    pub role_name: Option<String>,
    /// Only active or inactive accounts
    pub is_active: Option<bool>,
    /// Case-insensitive substring of email or full name
    pub search: Option<String>,
}

impl UserFilter {
    /// Whether `user` passes the filter
    #[must_use]
    pub fn matches(&self, user: &UserSummary) -> bool {
        self.role_name.as_deref().is_none_or(|wanted| {
            user.role_name.as_deref().map(str::trim) == Some(wanted.trim())
        }) && self.is_active.is_none_or(|active| user.is_active == active)
            && self.search.as_deref().is_none_or(|needle| {
                contains_ignore_case(&user.email, needle)
                    || contains_ignore_case(
                        &format!("{} {}", user.first_name, user.last_name),
                        needle,
                    )
            })
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}

/// Data service collaborator for the dashboards
#[async_trait]
pub trait DashboardDataService: Send + Sync {
    /// Headline numbers for the admin dashboard
    ///
    /// # Errors
    ///
    /// Returns an error if the backing service fails
    async fn fetch_stats(&self) -> AppResult<AdminStats>;

    /// Contracts matching `filter`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing service fails
    async fn fetch_contracts(&self, filter: &ContractFilter) -> AppResult<Vec<ContractRecord>>;

    /// Users matching `filter`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing service fails
    async fn fetch_users(&self, filter: &UserFilter) -> AppResult<Vec<UserSummary>>;
}
