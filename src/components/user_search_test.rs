use super::*;
use crate::config::ClientConfig;

#[test]
fn conversation_path_trims_query() {
    assert_eq!(conversation_path("  u-42 ").as_deref(), Some("/user/u-42"));
}

#[test]
fn conversation_path_rejects_blank() {
    assert_eq!(conversation_path("   "), None);
}

#[test]
fn conversation_path_rejects_path_characters() {
    for query in ["a/b", "a?b", "a#b", "a b"] {
        assert_eq!(conversation_path(query), None, "{query}");
    }
}

#[test]
fn conversation_path_resolves_to_private_message() {
    let path = conversation_path("u-42").unwrap();
    let matched = routing::resolve(&path);
    assert_eq!(matched.route.name, Some("private-message"));
    assert_eq!(matched.param("userId"), Some("u-42"));
}

#[test]
fn conversation_path_leaves_base_to_the_router() {
    let config = ClientConfig::from_parts(Some("/chat"), None, None).unwrap();
    let path = conversation_path("u-42").unwrap();
    assert_eq!(path, "/user/u-42");
    assert_eq!(config.href(&path), "/chat/user/u-42");
}
