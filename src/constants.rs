// ABOUTME: Application constants for storage keys, roles, tiers, fee rates, and routes
// ABOUTME: Single source of truth for literals shared by session, billing, and config modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Constants grouped by domain.

/// Client storage keys written at sign-in and cleared at sign-out
pub mod storage_keys {
    /// Bearer access token
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Refresh token
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// Serialized user profile
    pub const USER_DATA: &str = "user_data";
}

/// Role names
pub mod roles {
    /// The only privileged role name. Matched exactly, after trimming.
    pub const ADMIN: &str = "Admin";
}

/// Subscription tier identifiers
pub mod tiers {
    /// No subscription
    pub const NONE: &str = "none";
    /// Pro subscription
    pub const PRO: &str = "pro";
}

/// Billing record subscription types
pub mod subscription_types {
    /// Pay per registration
    pub const PAY_AS_YOU_GO: &str = "pay_as_you_go";
    /// Monthly subscription
    pub const SUBSCRIPTION: &str = "subscription";
}

/// Service fee schedule
pub mod fees {
    /// Pay-as-you-go service fee, in percent of the gas fee
    pub const PAY_AS_YOU_GO_RATE_PERCENT: i64 = 15;
    /// Active Pro subscription service fee, in percent of the gas fee
    pub const PRO_RATE_PERCENT: i64 = 10;
    /// Decimal places kept on the service fee amount
    pub const SERVICE_FEE_SCALE: u32 = 2;
    /// Monthly Pro subscription price, in cents
    pub const PRO_MONTHLY_PRICE_CENTS: i64 = 2_000;
    /// Currency for every amount the core prices
    pub const CURRENCY: &str = "USD";
}

/// Default route paths
pub mod routes {
    /// Sign-in page
    pub const SIGN_IN: &str = "/login";
    /// Customer dashboard
    pub const DASHBOARD: &str = "/dashboard";
    /// Admin dashboard
    pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";
    /// Public landing page
    pub const HOME: &str = "/";
}

/// Environment variable names read by configuration
pub mod env_config {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "BLOCKBUSTRE_ENV";
    /// Storage key for the access token
    pub const ACCESS_TOKEN_KEY: &str = "BLOCKBUSTRE_ACCESS_TOKEN_KEY";
    /// Storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &str = "BLOCKBUSTRE_REFRESH_TOKEN_KEY";
    /// Storage key for the serialized profile
    pub const PROFILE_KEY: &str = "BLOCKBUSTRE_PROFILE_KEY";
    /// Sign-in route
    pub const SIGN_IN_ROUTE: &str = "BLOCKBUSTRE_SIGN_IN_ROUTE";
    /// Customer dashboard route
    pub const DASHBOARD_ROUTE: &str = "BLOCKBUSTRE_DASHBOARD_ROUTE";
    /// Admin dashboard route
    pub const ADMIN_ROUTE: &str = "BLOCKBUSTRE_ADMIN_ROUTE";
    /// Landing route
    pub const HOME_ROUTE: &str = "BLOCKBUSTRE_HOME_ROUTE";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name
    pub const BLOCKBUSTRE_CORE: &str = "blockbustre-core";
}
