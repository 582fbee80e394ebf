// ABOUTME: Tiered fee calculator layering a percentage service fee over network gas
// ABOUTME: Pay-as-you-go pays 15%, an active Pro subscription pays 10%, rounded half-up to cents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! # Fee Calculator
//!
//! A quote is a pure function of the gas fee and the subscription snapshot.
//! Amounts are exact decimals; only the service fee is rounded.

/// Pricing plan catalog
pub mod plans;

pub use plans::{PlanKind, PricingPlan};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::constants::fees;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::SubscriptionState;

/// Breakdown of what a registration costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// Network gas cost
    pub gas_fee: Decimal,
    /// Service fee rate applied to the gas cost
    pub service_fee_rate: Decimal,
    /// `gas_fee * service_fee_rate`, rounded half-up to 2 places
    pub service_fee_amount: Decimal,
    /// `gas_fee + service_fee_amount`
    pub total_fee: Decimal,
}

/// Rejected fee input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// Gas fee is negative, not a finite number, or too large to price
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<FeeError> for AppError {
    fn from(error: FeeError) -> Self {
        let FeeError::InvalidAmount(ref reason) = error;
        Self::invalid_amount(reason.clone()).with_source(error)
    }
}

/// Stateless fee calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeCalculator;

impl FeeCalculator {
    /// Service fee rate for a subscription snapshot
    #[must_use]
    pub fn service_fee_rate(subscription: &SubscriptionState) -> Decimal {
        if subscription.is_active_pro() {
            Decimal::new(fees::PRO_RATE_PERCENT, 2)
        } else {
            Decimal::new(fees::PAY_AS_YOU_GO_RATE_PERCENT, 2)
        }
    }

    /// Price a registration
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::InvalidAmount`] if `gas_fee` is negative or the
    /// total does not fit in a decimal
    pub fn quote(gas_fee: Decimal, subscription: &SubscriptionState) -> Result<FeeQuote, FeeError> {
        if gas_fee.is_sign_negative() && !gas_fee.is_zero() {
            warn!(%gas_fee, "rejected negative gas fee");
            return Err(FeeError::InvalidAmount(format!(
                "gas fee {gas_fee} is negative"
            )));
        }

        let service_fee_rate = Self::service_fee_rate(subscription);
        let service_fee_amount = gas_fee
            .checked_mul(service_fee_rate)
            .map(|fee| {
                fee.round_dp_with_strategy(
                    fees::SERVICE_FEE_SCALE,
                    RoundingStrategy::MidpointAwayFromZero,
                )
            })
            .ok_or_else(|| too_large(gas_fee))?;
        let total_fee = gas_fee
            .checked_add(service_fee_amount)
            .ok_or_else(|| too_large(gas_fee))?;

        let quote = FeeQuote {
            // -0 and 0 quote identically
            gas_fee: gas_fee.abs(),
            service_fee_rate,
            service_fee_amount,
            total_fee: total_fee.abs(),
        };
        AppLogger::log_fee_quote(&quote);
        Ok(quote)
    }

    /// Price a registration from a floating-point gas estimate
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::InvalidAmount`] if `gas_fee` is NaN, infinite,
    /// negative, or outside the decimal range
    pub fn quote_f64(gas_fee: f64, subscription: &SubscriptionState) -> Result<FeeQuote, FeeError> {
        if !gas_fee.is_finite() {
            warn!(gas_fee, "rejected non-finite gas fee");
            return Err(FeeError::InvalidAmount(format!(
                "gas fee {gas_fee} is not a finite number"
            )));
        }
        let decimal = Decimal::try_from(gas_fee).map_err(|_| {
            FeeError::InvalidAmount(format!("gas fee {gas_fee} is out of range"))
        })?;
        Self::quote(decimal, subscription)
    }
}

fn too_large(gas_fee: Decimal) -> FeeError {
    warn!(%gas_fee, "gas fee overflows fee arithmetic");
    FeeError::InvalidAmount(format!("gas fee {gas_fee} is too large to price"))
}
