// ABOUTME: Route decisions for protected pages: render, or where to redirect instead
// ABOUTME: Maps classifications and access denials to sign-in, dashboard, or admin routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! Navigation decisions
//!
//! The core never navigates. It tells the page which [`Route`] to go to and
//! the page performs the redirect.

use serde::{Deserialize, Serialize};

use crate::constants::routes;
use crate::logging::AppLogger;
use crate::session::{
    authorize, sign_out, AccessDecision, Classification, DenyReason, RequiredRole,
    SessionGuard, SessionKeys, SessionStorage, SessionStorageMut,
};

/// Navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Sign-in page
    SignIn,
    /// Customer dashboard
    Dashboard,
    /// Admin dashboard
    AdminDashboard,
    /// Public landing page
    Home,
}

/// Paths for each [`Route`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routes {
    /// Sign-in page path
    pub sign_in: String,
    /// Customer dashboard path
    pub dashboard: String,
    /// Admin dashboard path
    pub admin_dashboard: String,
    /// Landing page path
    pub home: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            sign_in: routes::SIGN_IN.to_owned(),
            dashboard: routes::DASHBOARD.to_owned(),
            admin_dashboard: routes::ADMIN_DASHBOARD.to_owned(),
            home: routes::HOME.to_owned(),
        }
    }
}

impl Routes {
    /// Path for `route`
    #[must_use]
    pub fn path(&self, route: Route) -> &str {
        match route {
            Route::SignIn => &self.sign_in,
            Route::Dashboard => &self.dashboard,
            Route::AdminDashboard => &self.admin_dashboard,
            Route::Home => &self.home,
        }
    }
}

/// Where a caller lands right after signing in
#[must_use]
pub const fn landing_route(classification: Classification) -> Route {
    match classification {
        Classification::Admin => Route::AdminDashboard,
        Classification::User => Route::Dashboard,
        Classification::Anonymous => Route::SignIn,
    }
}

/// Redirect target for a denied check, `None` when access is allowed
#[must_use]
pub const fn redirect_for(decision: AccessDecision) -> Option<Route> {
    match decision {
        AccessDecision::Allow => None,
        AccessDecision::Deny(DenyReason::NotSignedIn) => Some(Route::SignIn),
        AccessDecision::Deny(DenyReason::InsufficientRole) => Some(Route::Dashboard),
    }
}

/// Protected pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedPage {
    /// Customer dashboard
    Dashboard,
    /// Admin dashboard
    AdminDashboard,
}

impl ProtectedPage {
    /// Access level the page demands
    #[must_use]
    pub const fn required_role(&self) -> RequiredRole {
        match self {
            Self::Dashboard => RequiredRole::AnyAuthenticated,
            Self::AdminDashboard => RequiredRole::AdminOnly,
        }
    }
}

/// What a protected page should do on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "route", rename_all = "snake_case")]
pub enum PageOutcome {
    /// Mount the page
    Render,
    /// Navigate elsewhere
    Redirect(Route),
}

/// Decide what `page` does for `classification`
///
/// Admins opening the customer dashboard are forwarded to the admin
/// dashboard; they are allowed there, but it is not their home.
#[must_use]
pub const fn resolve(page: ProtectedPage, classification: Classification) -> PageOutcome {
    if let (ProtectedPage::Dashboard, Classification::Admin) = (page, classification) {
        return PageOutcome::Redirect(Route::AdminDashboard);
    }
    match redirect_for(authorize(classification, page.required_role())) {
        None => PageOutcome::Render,
        Some(route) => PageOutcome::Redirect(route),
    }
}

/// Read the session through `guard` and decide what `page` does
#[must_use]
pub fn resolve_with<S: SessionStorage>(guard: &SessionGuard<S>, page: ProtectedPage) -> PageOutcome {
    let classification = guard.current_classification();
    let outcome = resolve(page, classification);
    AppLogger::log_page_access(page, classification, outcome);
    outcome
}

/// Clear the session and return where to go next
pub fn sign_out_route<S>(storage: &S, keys: &SessionKeys) -> Route
where
    S: SessionStorageMut + ?Sized,
{
    sign_out(storage, keys);
    Route::Home
}
