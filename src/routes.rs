//! Route table and pre-navigation authentication guard.
//!
//! Each navigable path carries a `requires_auth` flag. Before a protected
//! page may render, [`check`] is evaluated against the stored session
//! token: without one, the navigation is redirected to the login route with
//! the intended destination preserved in a `redirect` query parameter so
//! login can resume it. The check is synchronous and storage-only; the
//! token is never validated against the backend here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Login route, also the target of the forced logout on 401.
pub const LOGIN_PATH: &str = "/login";

/// Metadata for one navigable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// Every navigable path. Unknown paths fall through to the not-found view
/// and are treated as open.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: "/", requires_auth: false },
    RouteMeta { path: "/login", requires_auth: false },
    RouteMeta { path: "/register", requires_auth: false },
    RouteMeta { path: "/dashboard", requires_auth: true },
    RouteMeta { path: "/market", requires_auth: false },
    RouteMeta { path: "/auction", requires_auth: false },
    RouteMeta { path: "/bank", requires_auth: false },
];

/// Whether `path` requires a session token.
pub fn requires_auth(path: &str) -> bool {
    ROUTES.iter().any(|route| route.path == path && route.requires_auth)
}

/// Outcome of a guard evaluation. Exactly one of the two per navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Evaluate the guard for a navigation to `path`.
pub fn check(path: &str, has_token: bool) -> GuardDecision {
    if requires_auth(path) && !has_token {
        GuardDecision::Redirect(format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(path)))
    } else {
        GuardDecision::Allow
    }
}
