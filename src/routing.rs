//! Static route table, path matching, and the pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mirrors this table in its `<Routes>`; `RouteGuard` runs
//! [`before_each`] on every location change and `MainShell` renders its
//! left/middle/right slots from [`resolve`].
//!
//! Matching agrees with `leptos_router`'s segment matching: query and
//! fragment are ignored, one trailing slash is tolerated, static segments
//! compare exactly, and dynamic segments must be non-empty.
//!
//! Paths produced here are app-relative. `use_navigate` adds the router base
//! itself; only `<a href>` and full-page loads go through
//! [`crate::config::ClientConfig::href`].

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

/// Name of the route every redirect lands on.
pub const HOME: &str = "home";
/// Name of the route a fresh session lands on.
pub const MAIN: &str = "main";

/// Named view position inside a route's composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Single-view routes.
    Default,
    Left,
    Middle,
    Right,
}

/// Views the route table can place into a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    SignIn,
    Join,
    MessagePrompt,
    DefaultView,
    Profile,
    UserSearch,
    PrivateMessage,
    RightSide,
}

/// Per-route flags consulted before navigation completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub auth_required: bool,
    /// Home page hint: offer a shortcut when a session already exists.
    pub check_signed_in: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Full path pattern; `:name` segments capture params.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub views: &'static [(Slot, View)],
    pub meta: RouteMeta,
    /// Forward route params to the middle slot.
    pub props: bool,
}

impl RouteDef {
    /// View bound to `slot`, if any.
    pub fn view(&self, slot: Slot) -> Option<View> {
        self.views.iter().find(|(s, _)| *s == slot).map(|(_, v)| *v)
    }

    /// Whether this route renders inside the three-column main shell.
    pub fn is_shell(&self) -> bool {
        self.view(Slot::Middle).is_some()
    }
}

const PUBLIC: RouteMeta = RouteMeta { auth_required: false, check_signed_in: false };
const PRIVATE: RouteMeta = RouteMeta { auth_required: true, check_signed_in: false };

pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        name: Some(HOME),
        views: &[(Slot::Default, View::Home)],
        meta: RouteMeta { auth_required: false, check_signed_in: true },
        props: false,
    },
    RouteDef {
        path: "/signin",
        name: Some("signin"),
        views: &[(Slot::Default, View::SignIn)],
        meta: PUBLIC,
        props: false,
    },
    RouteDef {
        path: "/main",
        name: Some(MAIN),
        views: &[(Slot::Left, View::MessagePrompt), (Slot::Middle, View::DefaultView), (Slot::Right, View::RightSide)],
        meta: PRIVATE,
        props: false,
    },
    RouteDef {
        path: "/main/profile",
        name: None,
        views: &[(Slot::Left, View::MessagePrompt), (Slot::Middle, View::Profile), (Slot::Right, View::RightSide)],
        meta: PRIVATE,
        props: false,
    },
    RouteDef {
        path: "/main/search",
        name: Some("user-search"),
        views: &[(Slot::Left, View::MessagePrompt), (Slot::Middle, View::UserSearch), (Slot::Right, View::RightSide)],
        meta: PRIVATE,
        props: false,
    },
    RouteDef {
        path: "/user/:userId",
        name: Some("private-message"),
        views: &[
            (Slot::Left, View::MessagePrompt),
            (Slot::Middle, View::PrivateMessage),
            (Slot::Right, View::RightSide),
        ],
        meta: PRIVATE,
        props: true,
    },
    RouteDef {
        path: "/join",
        name: Some("join"),
        views: &[(Slot::Default, View::Join)],
        meta: PUBLIC,
        props: false,
    },
];

/// A route together with the params captured from the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    fn bare(route: &'static RouteDef) -> Self {
        Self { route, params: Vec::new() }
    }

    /// The catch-all destination.
    pub fn home() -> Self {
        Self::bare(home_route())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Outcome of the pre-navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    /// Go to the named route instead.
    Redirect(&'static str),
}

fn home_route() -> &'static RouteDef {
    &ROUTES[0]
}

/// Look up a route by name.
pub fn find_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == Some(name))
}

/// Match `path` against the table.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let segments = split_path(path);
    ROUTES.iter().find_map(|route| match_route(route, &segments))
}

/// Match `path`, sending anything unknown to home.
pub fn resolve(path: &str) -> RouteMatch {
    match_path(path).unwrap_or_else(RouteMatch::home)
}

/// Guard predicate run before every navigation.
pub fn before_each(target: &RouteMatch, authenticated: bool) -> Navigation {
    if target.route.meta.auth_required && !authenticated {
        Navigation::Redirect(HOME)
    } else {
        Navigation::Proceed
    }
}

/// Resolve `path` and apply the guard, returning the route finally shown.
pub fn navigate(path: &str, authenticated: bool) -> RouteMatch {
    let target = resolve(path);
    match before_each(&target, authenticated) {
        Navigation::Proceed => target,
        Navigation::Redirect(name) => find_by_name(name).map_or_else(RouteMatch::home, RouteMatch::bare),
    }
}

/// Build the URL for a named route, filling `:param` segments.
///
/// Returns `None` for unknown names or missing/empty params.
pub fn path_for(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let route = find_by_name(name)?;
    let mut out = String::new();
    for segment in split_path(route.path) {
        out.push('/');
        if let Some(key) = segment.strip_prefix(':') {
            let value = params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)?;
            if value.is_empty() {
                return None;
            }
            out.push_str(value);
        } else {
            out.push_str(segment);
        }
    }
    if out.is_empty() {
        out.push('/');
    }
    Some(out)
}

/// App-relative path of a parameterless named route, home if unknown.
pub fn named_path(name: &str) -> String {
    path_for(name, &[]).unwrap_or_else(|| "/".to_owned())
}

/// Drop the router base path from a browser pathname.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    if base == "/" || base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() { Vec::new() } else { path.split('/').collect() }
}

fn match_route(route: &'static RouteDef, segments: &[&str]) -> Option<RouteMatch> {
    let pattern = split_path(route.path);
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (pat, seg) in pattern.into_iter().zip(segments) {
        if let Some(key) = pat.strip_prefix(':') {
            if seg.is_empty() {
                return None;
            }
            params.push((key, (*seg).to_owned()));
        } else if pat != *seg {
            return None;
        }
    }
    Some(RouteMatch { route, params })
}
