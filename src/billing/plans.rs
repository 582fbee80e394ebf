// ABOUTME: Pricing plan catalog shown before checkout
// ABOUTME: Pay-as-you-go with no monthly charge and the $20/month Pro subscription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FeeCalculator;
use crate::constants::fees;
use crate::models::SubscriptionState;

/// Plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Pay per registration
    PayAsYouGo,
    /// Monthly Pro subscription
    Pro,
}

/// A plan as offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    /// Plan identifier
    pub kind: PlanKind,
    /// Name shown on the pricing page
    pub display_name: &'static str,
    /// Fixed monthly charge
    pub monthly_price: Decimal,
    /// Service fee rate on gas
    pub service_fee_rate: Decimal,
    /// ISO currency code of the monthly price
    pub currency: &'static str,
    /// Plan highlights
    pub features: Vec<&'static str>,
}

impl PricingPlan {
    /// Pay-as-you-go plan
    #[must_use]
    pub fn pay_as_you_go() -> Self {
        Self {
            kind: PlanKind::PayAsYouGo,
            display_name: "Pay As You Go",
            monthly_price: Decimal::ZERO,
            service_fee_rate: FeeCalculator::service_fee_rate(&SubscriptionState::pay_as_you_go()),
            currency: fees::CURRENCY,
            features: vec![
                "No monthly commitment",
                "Real-time gas fee calculation",
                "Blockchain-verified certificates",
            ],
        }
    }

    /// Pro subscription plan
    #[must_use]
    pub fn pro() -> Self {
        Self {
            kind: PlanKind::Pro,
            display_name: "Pro Subscription",
            monthly_price: Decimal::new(fees::PRO_MONTHLY_PRICE_CENTS, 2),
            service_fee_rate: FeeCalculator::service_fee_rate(&SubscriptionState::pro()),
            currency: fees::CURRENCY,
            features: vec![
                "Reduced service fee on all gas costs",
                "Priority processing",
                "Bulk registration",
            ],
        }
    }

    /// Every plan, cheapest commitment first
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![Self::pay_as_you_go(), Self::pro()]
    }

    /// Plan a subscription snapshot is billed under
    #[must_use]
    pub fn for_subscription(subscription: &SubscriptionState) -> Self {
        if subscription.is_active_pro() {
            Self::pro()
        } else {
            Self::pay_as_you_go()
        }
    }

    /// Monthly gas spend above which Pro is cheaper
    ///
    /// Pro saves `(standard - pro rate) * gas` per month against a fixed
    /// price, so the break-even is `price / rate difference`.
    #[must_use]
    pub fn pro_break_even_gas() -> Decimal {
        let standard = Self::pay_as_you_go();
        let pro = Self::pro();
        let saving_rate = standard.service_fee_rate - pro.service_fee_rate;
        pro.monthly_price / saving_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rates_and_prices() {
        let catalog = PricingPlan::catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].service_fee_rate, Decimal::new(15, 2));
        assert!(catalog[0].monthly_price.is_zero());
        assert_eq!(catalog[1].service_fee_rate, Decimal::new(10, 2));
        assert_eq!(catalog[1].monthly_price, Decimal::from(20));
    }

    #[test]
    fn test_plan_for_subscription() {
        assert_eq!(
            PricingPlan::for_subscription(&SubscriptionState::pro()).kind,
            PlanKind::Pro
        );
        assert_eq!(
            PricingPlan::for_subscription(&SubscriptionState::pay_as_you_go()).kind,
            PlanKind::PayAsYouGo
        );
    }

    #[test]
    fn test_break_even() {
        // $20 / 5% = $400 of gas per month
        assert_eq!(PricingPlan::pro_break_even_gas(), Decimal::from(400));
    }
}
