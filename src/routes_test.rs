use super::*;

// =============================================================
// Route metadata
// =============================================================

#[test]
fn dashboard_is_protected() {
    assert!(requires_auth("/dashboard"));
}

#[test]
fn auth_pages_are_open() {
    assert!(!requires_auth("/login"));
    assert!(!requires_auth("/register"));
}

#[test]
fn unknown_paths_are_open() {
    assert!(!requires_auth("/no-such-page"));
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn protected_route_without_token_redirects_to_login() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        let decision = check(route.path, false);
        let GuardDecision::Redirect(target) = decision else {
            panic!("expected a redirect for {}", route.path);
        };
        assert!(target.starts_with("/login?redirect="));
    }
}

#[test]
fn redirect_preserves_the_intended_path() {
    assert_eq!(
        check("/dashboard", false),
        GuardDecision::Redirect("/login?redirect=%2Fdashboard".to_owned())
    );
}

#[test]
fn protected_route_with_token_is_allowed() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(check(route.path, true), GuardDecision::Allow);
    }
}

#[test]
fn open_routes_are_allowed_without_a_token() {
    for route in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(check(route.path, false), GuardDecision::Allow);
    }
}
