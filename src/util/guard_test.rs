use super::*;
use crate::routing::HOME;
use crate::state::session::TOKEN_KEY;
use crate::storage::MemoryStorage;

fn with_token(token: &str) -> MemoryStorage {
    let store = MemoryStorage::new();
    store.set_item(TOKEN_KEY, token).unwrap();
    store
}

#[test]
fn protected_path_without_token_redirects_home() {
    let store = MemoryStorage::new();
    assert_eq!(guard_decision("/main", &store), Navigation::Redirect(HOME));
    assert_eq!(guard_decision("/user/u-1", &store), Navigation::Redirect(HOME));
}

#[test]
fn protected_path_with_token_proceeds() {
    let store = with_token("tok");
    assert_eq!(guard_decision("/main/profile", &store), Navigation::Proceed);
}

#[test]
fn empty_token_counts_as_missing() {
    let store = with_token("");
    assert_eq!(guard_decision("/main/search", &store), Navigation::Redirect(HOME));
}

#[test]
fn public_and_unknown_paths_proceed() {
    let store = MemoryStorage::new();
    assert_eq!(guard_decision("/signin", &store), Navigation::Proceed);
    assert_eq!(guard_decision("/join", &store), Navigation::Proceed);
    assert_eq!(guard_decision("/does-not-exist", &store), Navigation::Proceed);
}

#[test]
fn redirect_target_is_none_for_proceed() {
    assert_eq!(redirect_target(Navigation::Proceed), None);
}

#[test]
fn redirect_target_is_app_relative() {
    assert_eq!(redirect_target(Navigation::Redirect(HOME)).as_deref(), Some("/"));
}

#[test]
fn redirect_under_base_path_is_not_prefixed_twice() {
    let config = ClientConfig::from_parts(Some("/chat"), None, None).unwrap();
    let store = MemoryStorage::new();
    let browser_path = config.href("/main/search");
    let app_path = routing::strip_base(&browser_path, &config.base_path);

    let target = redirect_target(guard_decision(app_path, &store)).unwrap();
    assert_eq!(target, "/");
    assert!(!target.starts_with(&config.base_path));
    // The router adds the base once; the landing URL is the bare base.
    assert_eq!(config.href(&target), "/chat");
}
