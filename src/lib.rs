// ABOUTME: Main library entry point for the Blockbustre notarization core
// ABOUTME: Session role gating for protected dashboards and tiered service fee pricing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

#![deny(unsafe_code)]

//! # Blockbustre Core
//!
//! The logic behind the Blockbustre document-notarization dashboards.
//! Rendering, navigation side effects, and persistence belong to the
//! caller; this crate decides.
//!
//! ## Features
//!
//! - **Session gating**: classify a stored credential and profile as
//!   anonymous, user, or admin, and authorize it against a page
//! - **Tiered pricing**: quote gas plus a 15% (pay-as-you-go) or 10% (Pro)
//!   service fee, rounded half-up to cents
//! - **Navigation decisions**: where a denied or freshly signed-in caller goes
//! - **Dashboard data contract**: typed stats, contract, and user listings
//!
//! ## Example Usage
//!
//! ```rust
//! use blockbustre_core::billing::FeeCalculator;
//! use blockbustre_core::models::SubscriptionState;
//! use blockbustre_core::session::{authorize, classify, AccessDecision, RequiredRole};
//! use rust_decimal::Decimal;
//!
//! let profile = r#"{"id":1,"email":"a@b.io","firstName":"A","lastName":"B","role":{"id":1,"name":"Admin"}}"#;
//! let who = classify(Some("token"), Some(profile));
//! assert_eq!(authorize(who, RequiredRole::AdminOnly), AccessDecision::Allow);
//!
//! let quote = FeeCalculator::quote(Decimal::from(100), &SubscriptionState::pro()).unwrap();
//! assert_eq!(quote.total_fee, Decimal::from(110));
//! ```

/// Tiered fee calculator and pricing plans
pub mod billing;

/// Environment-driven configuration
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Dashboard data service contract and in-memory implementation
pub mod dashboard;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Profile, billing, and dashboard record models
pub mod models;

/// Redirect and landing route decisions
pub mod navigation;

/// Session storage, guard, and sign-in/out lifecycle
pub mod session;
