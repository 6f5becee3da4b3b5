use crate::routing::{self, ROUTES};

/// The `<Route>` entries mounted by `App`, as (path, component).
const MOUNTED: &[(&str, &str)] = &[
    ("/", "HomePage"),
    ("/signin", "SignInPage"),
    ("/main", "MainShell"),
    ("/main/profile", "MainShell"),
    ("/main/search", "MainShell"),
    ("/user/:userId", "MainShell"),
    ("/join", "JoinPage"),
];

#[test]
fn mounted_routes_match_table() {
    let mounted: Vec<_> = MOUNTED.iter().map(|(path, _)| *path).collect();
    let table: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(mounted, table);
}

#[test]
fn shell_routes_mount_main_shell() {
    for (route, (path, component)) in ROUTES.iter().zip(MOUNTED) {
        assert_eq!(route.is_shell(), *component == "MainShell", "{path}");
    }
}

#[test]
fn mounted_paths_resolve_to_their_row() {
    for (path, _) in MOUNTED {
        let concrete = path.replace(":userId", "u-1");
        assert_eq!(routing::resolve(&concrete).route.path, *path);
    }
}
