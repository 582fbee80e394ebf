// ABOUTME: Session gating module: storage provider, guard, and sign-in/out lifecycle
// ABOUTME: Protected views call the guard before mounting and redirect on denial
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Session gating
//!
//! - **storage**: injected key-value provider the session is read from
//! - **guard**: classification and authorization
//! - **lifecycle**: writes performed at sign-in and sign-out

/// Classification and authorization of the stored session
pub mod guard;
/// Sign-in and sign-out writers
pub mod lifecycle;
/// Storage provider abstraction and in-memory backend
pub mod storage;

pub use guard::{
    authorize, classify, classify_profile, load_session, parse_profile, AccessDecision,
    Classification, DenyReason, RequiredRole, SessionError, SessionGuard,
};
pub use lifecycle::{sign_in, sign_out, SignInPayload};
pub use storage::{MemorySessionStorage, SessionKeys, SessionStorage, SessionStorageMut};
