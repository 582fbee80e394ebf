// ABOUTME: In-memory dashboard data service backed by concurrent maps
// ABOUTME: Seeded by the caller; statistics are computed from the stored records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use std::cmp::Reverse;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use super::{ContractFilter, DashboardDataService, UserFilter};
use crate::errors::{AppError, AppResult};
use crate::models::{
    AdminStats, ContractRecord, ContractStatus, TransactionRecord, UserSummary,
};

/// Dashboard data held in process
#[derive(Debug, Default)]
pub struct InMemoryDashboardData {
    contracts: DashMap<Uuid, ContractRecord>,
    transactions: DashMap<Uuid, TransactionRecord>,
    users: DashMap<Uuid, UserSummary>,
}

impl InMemoryDashboardData {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a contract
    pub fn insert_contract(&self, contract: ContractRecord) {
        self.contracts.insert(contract.id, contract);
    }

    /// Add or replace a transaction
    pub fn insert_transaction(&self, transaction: TransactionRecord) {
        self.transactions.insert(transaction.id, transaction);
    }

    /// Add or replace a user
    pub fn insert_user(&self, user: UserSummary) {
        self.users.insert(user.id, user);
    }

    /// Look up one contract
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no contract has this id
    pub fn contract(&self, id: Uuid) -> AppResult<ContractRecord> {
        self.contracts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Contract {id}")))
    }

    /// Transactions paid by `email`, newest first
    #[must_use]
    pub fn transactions_for(&self, email: &str) -> Vec<TransactionRecord> {
        let mut found: Vec<TransactionRecord> = self
            .transactions
            .iter()
            .filter(|entry| entry.user_email.eq_ignore_ascii_case(email.trim()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by_key(|record| Reverse(record.created_at));
        found
    }
}

#[async_trait]
impl DashboardDataService for InMemoryDashboardData {
    async fn fetch_stats(&self) -> AppResult<AdminStats> {
        let total_revenue = self
            .transactions
            .iter()
            .filter(|transaction| transaction.is_completed())
            .try_fold(Decimal::ZERO, |sum, transaction| {
                sum.checked_add(transaction.amount)
            })
            .ok_or_else(|| AppError::internal("Revenue total overflowed"))?;

        let stats = AdminStats {
            total_users: self.users.len(),
            active_users: self.users.iter().filter(|user| user.is_active).count(),
            total_contracts: self.contracts.len(),
            verified_contracts: self
                .contracts
                .iter()
                .filter(|contract| contract.status == ContractStatus::Verified)
                .count(),
            pending_contracts: self
                .contracts
                .iter()
                .filter(|contract| contract.status.is_pending())
                .count(),
            total_revenue,
        };

        debug!(
            users = stats.total_users,
            contracts = stats.total_contracts,
            "computed dashboard stats"
        );
        Ok(stats)
    }

    async fn fetch_contracts(&self, filter: &ContractFilter) -> AppResult<Vec<ContractRecord>> {
        let mut contracts: Vec<ContractRecord> = self
            .contracts
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        contracts.sort_by_key(|record| Reverse(record.created_at));
        Ok(contracts)
    }

    async fn fetch_users(&self, filter: &UserFilter) -> AppResult<Vec<UserSummary>> {
        let mut users: Vec<UserSummary> = self
            .users
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|record| Reverse(record.created_at));
        Ok(users)
    }
}
