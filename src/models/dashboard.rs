// ABOUTME: Record types returned by the dashboard data service collaborator
// ABOUTME: Registered contracts, payment transactions, user summaries, and admin statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::billing::SubscriptionType;

/// Registration status of a notarized contract
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Uploaded, not yet submitted
    #[default]
    Draft,
    /// Submitted, awaiting payment or processing
    Pending,
    /// Being written to the chain
    Processing,
    /// Transaction mined
    Deployed,
    /// Deployed and hash verified
    Verified,
    /// Deployment failed
    Failed,
    /// Cancelled by the owner
    Cancelled,
}

impl ContractStatus {
    /// Still waiting on the chain or on payment
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl Display for ContractStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Deployed => "deployed",
            Self::Verified => "verified",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Chain a contract is registered on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockchainNetwork {
    /// Ethereum mainnet
    #[default]
    EthereumMainnet,
    /// Ethereum Sepolia testnet
    EthereumSepolia,
    /// Polygon mainnet
    PolygonMainnet,
    /// Polygon Mumbai testnet
    PolygonMumbai,
    /// BNB Smart Chain mainnet
    BscMainnet,
    /// BNB Smart Chain testnet
    BscTestnet,
}

impl BlockchainNetwork {
    /// Human-readable network name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::EthereumMainnet => "Ethereum Mainnet",
            Self::EthereumSepolia => "Ethereum Sepolia",
            Self::PolygonMainnet => "Polygon Mainnet",
            Self::PolygonMumbai => "Polygon Mumbai",
            Self::BscMainnet => "BSC Mainnet",
            Self::BscTestnet => "BSC Testnet",
        }
    }

    /// Whether the network settles real value
    #[must_use]
    pub const fn is_mainnet(&self) -> bool {
        matches!(
            self,
            Self::EthereumMainnet | Self::PolygonMainnet | Self::BscMainnet
        )
    }
}

/// A registered document contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractRecord {
    /// Contract identifier
    pub id: Uuid,
    /// Document title
    pub title: String,
    /// Category name (e.g. "Real Estate")
    pub category: String,
    /// Email of the owning user
    pub owner_email: String,
    /// Registration status
    pub status: ContractStatus,
    /// Target chain
    pub network: BlockchainNetwork,
    /// Gas paid for registration
    pub gas_fee: Decimal,
    /// Service fee charged on top of gas
    pub service_fee: Decimal,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ContractRecord {
    /// Gas plus service fee
    #[must_use]
    pub fn total_fee(&self) -> Decimal {
        self.gas_fee + self.service_fee
    }
}

/// Kind of payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Contract deployment charge
    ContractDeployment,
    /// Gas payment
    GasPayment,
    /// Service fee payment
    ServiceFee,
    /// Monthly subscription payment
    Subscription,
    /// Refund to the user
    Refund,
}

/// Payment lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Created, not processed
    #[default]
    Pending,
    /// Being processed
    Processing,
    /// Settled
    Completed,
    /// Failed
    Failed,
    /// Cancelled before settlement
    Cancelled,
    /// Refunded after settlement
    Refunded,
}

/// A payment made by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction identifier
    pub id: Uuid,
    /// Paying user
    pub user_email: String,
    /// Kind of payment
    pub kind: TransactionKind,
    /// Lifecycle status
    pub status: TransactionStatus,
    /// Amount charged
    pub amount: Decimal,
    /// ISO currency code
    pub currency: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Counts toward revenue
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, TransactionStatus::Completed)
    }
}

/// Row of the admin user list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// User identifier
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Role name, if any
    pub role_name: Option<String>,
    /// Billing plan
    pub subscription: SubscriptionType,
    /// Whether the account may sign in
    pub is_active: bool,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// Headline numbers on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AdminStats {
    /// Registered accounts
    pub total_users: usize,
    /// Accounts allowed to sign in
    pub active_users: usize,
    /// Registered contracts
    pub total_contracts: usize,
    /// Contracts deployed and verified
    pub verified_contracts: usize,
    /// Contracts pending or processing
    pub pending_contracts: usize,
    /// Sum of completed transaction amounts
    pub total_revenue: Decimal,
}
