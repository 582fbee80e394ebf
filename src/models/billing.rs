// ABOUTME: Subscription snapshot and billing record models for fee tier selection
// ABOUTME: Derives the pay-as-you-go or Pro state from a billing record at a given instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{subscription_types, tiers};
use crate::errors::AppError;

/// Subscription tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// No subscription, pay-as-you-go pricing
    #[default]
    None,
    /// Pro monthly subscription
    Pro,
}

impl SubscriptionTier {
    /// Convert to the wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => tiers::NONE,
            Self::Pro => tiers::PRO,
        }
    }
}

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            tiers::NONE => Ok(Self::None),
            tiers::PRO => Ok(Self::Pro),
            _ => Err(AppError::invalid_input(format!(
                "Invalid subscription tier: {s}"
            ))),
        }
    }
}

/// Read-only subscription snapshot supplied by the billing collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SubscriptionState {
    /// Whether the subscription is currently paid up
    pub active: bool,
    /// Subscribed tier
    pub tier: SubscriptionTier,
}

impl SubscriptionState {
    /// Pay-as-you-go caller
    #[must_use]
    pub const fn pay_as_you_go() -> Self {
        Self {
            active: false,
            tier: SubscriptionTier::None,
        }
    }

    /// Caller with an active Pro subscription
    #[must_use]
    pub const fn pro() -> Self {
        Self {
            active: true,
            tier: SubscriptionTier::Pro,
        }
    }

    /// Only an active Pro subscription earns the reduced rate
    #[must_use]
    pub const fn is_active_pro(&self) -> bool {
        self.active && matches!(self.tier, SubscriptionTier::Pro)
    }

    /// Derive the snapshot from a billing record as of `now`
    ///
    /// A subscription counts only when its type is `subscription`, the active
    /// flag is set, and the current period ends after `now`. A missing end
    /// date is treated as lapsed.
    #[must_use]
    pub fn from_billing_record(record: &BillingRecord, now: DateTime<Utc>) -> Self {
        let subscribed = record.subscription_type == SubscriptionType::Subscription
            && record.subscription_active
            && record.subscription_end_date.is_some_and(|end| end > now);

        if subscribed {
            Self::pro()
        } else {
            Self::pay_as_you_go()
        }
    }
}

/// Billing plan chosen by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionType {
    /// Pay per registration
    #[default]
    PayAsYouGo,
    /// Monthly subscription
    Subscription,
}

impl SubscriptionType {
    /// Convert to the wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PayAsYouGo => subscription_types::PAY_AS_YOU_GO,
            Self::Subscription => subscription_types::SUBSCRIPTION,
        }
    }
}

impl FromStr for SubscriptionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            subscription_types::PAY_AS_YOU_GO => Ok(Self::PayAsYouGo),
            subscription_types::SUBSCRIPTION => Ok(Self::Subscription),
            _ => Err(AppError::invalid_input(format!(
                "Invalid subscription type: {s}"
            ))),
        }
    }
}

/// Subscription fields of an account, as held by the billing collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BillingRecord {
    /// Chosen plan
    pub subscription_type: SubscriptionType,
    /// Whether the subscription has been activated
    pub subscription_active: bool,
    /// When the subscription period started
    #[serde(default)]
    pub subscription_start_date: Option<DateTime<Utc>>,
    /// When the current subscription period ends
    #[serde(default)]
    pub subscription_end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn subscription_ending(end: Option<DateTime<Utc>>, active: bool) -> BillingRecord {
        BillingRecord {
            subscription_type: SubscriptionType::Subscription,
            subscription_active: active,
            subscription_start_date: None,
            subscription_end_date: end,
        }
    }

    #[test]
    fn test_current_subscription_is_pro() {
        let now = Utc::now();
        let record = subscription_ending(Some(now + Duration::days(3)), true);
        assert_eq!(
            SubscriptionState::from_billing_record(&record, now),
            SubscriptionState::pro()
        );
    }

    #[test]
    fn test_lapsed_subscription_is_pay_as_you_go() {
        let now = Utc::now();
        let expired = subscription_ending(Some(now - Duration::seconds(1)), true);
        let ends_now = subscription_ending(Some(now), true);
        let open_ended = subscription_ending(None, true);
        let inactive = subscription_ending(Some(now + Duration::days(3)), false);

        for record in [expired, ends_now, open_ended, inactive] {
            assert_eq!(
                SubscriptionState::from_billing_record(&record, now),
                SubscriptionState::pay_as_you_go()
            );
        }
    }

    #[test]
    fn test_pay_as_you_go_record_ignores_active_flag() {
        let now = Utc::now();
        let record = BillingRecord {
            subscription_type: SubscriptionType::PayAsYouGo,
            subscription_active: true,
            subscription_start_date: None,
            subscription_end_date: Some(now + Duration::days(30)),
        };
        assert!(!SubscriptionState::from_billing_record(&record, now).is_active_pro());
    }

    #[test]
    fn test_tier_wire_format() {
        let state: SubscriptionState =
            serde_json::from_str(r#"{"active":true,"tier":"pro"}"#).unwrap();
        assert!(state.is_active_pro());
        assert_eq!("none".parse::<SubscriptionTier>().unwrap(), SubscriptionTier::None);
        assert!("Pro".parse::<SubscriptionTier>().is_err());
    }
}
