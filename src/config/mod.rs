// ABOUTME: Configuration module for environment-driven settings
// ABOUTME: Re-exports the core configuration and deployment environment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Configuration
//!
//! - **Environment**: storage keys, routes, and deployment mode from environment variables

/// Environment and core configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
