use super::*;

fn sample_path(route: &RouteDef) -> String {
    route.path.replace(":userId", "u-42")
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn route_names_are_unique() {
    let mut names: Vec<_> = ROUTES.iter().filter_map(|r| r.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn only_home_checks_signed_in() {
    for route in ROUTES {
        assert_eq!(route.meta.check_signed_in, route.name == Some(HOME), "{}", route.path);
    }
}

#[test]
fn main_routes_use_three_slot_shell() {
    for path in ["/main", "/main/profile", "/main/search", "/user/u-42"] {
        let route = resolve(path).route;
        assert!(route.is_shell(), "{path}");
        assert_eq!(route.view(Slot::Left), Some(View::MessagePrompt));
        assert_eq!(route.view(Slot::Right), Some(View::RightSide));
        assert_eq!(route.view(Slot::Default), None);
    }
}

#[test]
fn middle_slot_varies_by_main_path() {
    assert_eq!(resolve("/main").route.view(Slot::Middle), Some(View::DefaultView));
    assert_eq!(resolve("/main/profile").route.view(Slot::Middle), Some(View::Profile));
    assert_eq!(resolve("/main/search").route.view(Slot::Middle), Some(View::UserSearch));
    assert_eq!(resolve("/user/u-42").route.view(Slot::Middle), Some(View::PrivateMessage));
}

#[test]
fn single_view_routes() {
    assert_eq!(resolve("/").route.view(Slot::Default), Some(View::Home));
    assert_eq!(resolve("/signin").route.view(Slot::Default), Some(View::SignIn));
    assert_eq!(resolve("/join").route.view(Slot::Default), Some(View::Join));
    assert!(!resolve("/join").route.is_shell());
}

// =============================================================
// Matching
// =============================================================

#[test]
fn private_message_captures_user_id() {
    let matched = match_path("/user/abc123").unwrap();
    assert_eq!(matched.route.name, Some("private-message"));
    assert!(matched.route.props);
    assert_eq!(matched.param("userId"), Some("abc123"));
    assert_eq!(matched.param("other"), None);
}

#[test]
fn params_keep_original_case() {
    let matched = match_path("/user/AbC").unwrap();
    assert_eq!(matched.param("userId"), Some("AbC"));
}

#[test]
fn trailing_slash_query_and_hash_are_ignored() {
    assert_eq!(match_path("/main/").unwrap().route.name, Some("main"));
    assert_eq!(match_path("/main/search?q=ada").unwrap().route.name, Some("user-search"));
    assert_eq!(match_path("/signin#form").unwrap().route.name, Some("signin"));
}

#[test]
fn static_segments_compare_exactly() {
    for path in ["/Main", "/Main/Profile", "/main/Search", "/USER/u-1", "/SignIn"] {
        assert_eq!(match_path(path), None, "{path}");
        assert_eq!(resolve(path), RouteMatch::home(), "{path}");
    }
}

#[test]
fn empty_param_does_not_match() {
    assert_eq!(match_path("/user/"), None);
    assert_eq!(match_path("/user//"), None);
}

#[test]
fn unknown_paths_resolve_to_home() {
    for path in ["/nope", "/main/nope", "/user/a/b", "/signin/extra", "/main//"] {
        assert_eq!(match_path(path), None, "{path}");
        assert_eq!(resolve(path), RouteMatch::home(), "{path}");
    }
}

#[test]
fn empty_path_is_home() {
    assert_eq!(resolve("").route.name, Some(HOME));
}

// =============================================================
// Guard
// =============================================================

#[test]
fn auth_required_routes_redirect_home_without_token() {
    for route in ROUTES.iter().filter(|r| r.meta.auth_required) {
        let target = resolve(&sample_path(route));
        assert_eq!(before_each(&target, false), Navigation::Redirect(HOME), "{}", route.path);
        assert_eq!(navigate(&sample_path(route), false), RouteMatch::home(), "{}", route.path);
    }
}

#[test]
fn auth_required_routes_proceed_with_token() {
    for route in ROUTES.iter().filter(|r| r.meta.auth_required) {
        let target = resolve(&sample_path(route));
        assert_eq!(before_each(&target, true), Navigation::Proceed, "{}", route.path);
        assert_eq!(navigate(&sample_path(route), true).route.path, route.path);
    }
}

#[test]
fn public_routes_always_proceed() {
    for route in ROUTES.iter().filter(|r| !r.meta.auth_required) {
        for authenticated in [false, true] {
            assert_eq!(before_each(&resolve(route.path), authenticated), Navigation::Proceed);
        }
    }
}

#[test]
fn navigate_keeps_params() {
    let shown = navigate("/user/u-7", true);
    assert_eq!(shown.param("userId"), Some("u-7"));
}

#[test]
fn navigate_unknown_path_lands_home_regardless_of_auth() {
    assert_eq!(navigate("/missing", true), RouteMatch::home());
    assert_eq!(navigate("/missing", false), RouteMatch::home());
}

// =============================================================
// Named routes
// =============================================================

#[test]
fn find_by_name_known_and_unknown() {
    assert_eq!(find_by_name("join").map(|r| r.path), Some("/join"));
    assert_eq!(find_by_name("profile"), None);
}

#[test]
fn path_for_static_routes() {
    assert_eq!(path_for(HOME, &[]).as_deref(), Some("/"));
    assert_eq!(path_for("user-search", &[]).as_deref(), Some("/main/search"));
}

#[test]
fn path_for_fills_params() {
    assert_eq!(path_for("private-message", &[("userId", "u-9")]).as_deref(), Some("/user/u-9"));
}

#[test]
fn named_path_is_app_relative() {
    assert_eq!(named_path(MAIN), "/main");
    assert_eq!(named_path(HOME), "/");
    assert_eq!(named_path("missing"), "/");
    // Needs a param, so there is no bare path for it.
    assert_eq!(named_path("private-message"), "/");
}

#[test]
fn path_for_requires_params() {
    assert_eq!(path_for("private-message", &[]), None);
    assert_eq!(path_for("private-message", &[("userId", "")]), None);
    assert_eq!(path_for("missing", &[]), None);
}

// =============================================================
// Base path
// =============================================================

#[test]
fn strip_base_root_is_identity() {
    assert_eq!(strip_base("/main", "/"), "/main");
}

#[test]
fn strip_base_removes_prefix() {
    assert_eq!(strip_base("/chat/main", "/chat"), "/main");
    assert_eq!(strip_base("/chat", "/chat"), "/");
}

#[test]
fn strip_base_ignores_partial_segment() {
    assert_eq!(strip_base("/chatroom", "/chat"), "/chatroom");
}
