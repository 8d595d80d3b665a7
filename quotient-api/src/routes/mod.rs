/// API route handlers and the named-route table
///
/// Route handlers are organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Form endpoints backed by the users table
///
/// Every route the router serves is declared here as a `NamedRoute`
/// constant. The router registers handlers from these constants and
/// `path_for` reverses a name back to its URL path, so names and paths
/// cannot drift apart.

pub mod health;
pub mod users;

/// A route with a reversible name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRoute {
    /// Stable route name used for URL reversal
    pub name: &'static str,

    /// URL path the router serves it under
    pub path: &'static str,
}

/// Health check endpoint
pub const HEALTH: NamedRoute = NamedRoute {
    name: "health",
    path: "/health",
};

/// User form page (GET)
pub const FORM_EXAMPLE_GET: NamedRoute = NamedRoute {
    name: "form_example_get",
    path: "/users/form",
};

/// User form submission (POST)
pub const FORM_EXAMPLE_POST: NamedRoute = NamedRoute {
    name: "form_example_post",
    path: "/users/form",
};

/// Every named route the router serves
pub const NAMED_ROUTES: &[NamedRoute] = &[HEALTH, FORM_EXAMPLE_GET, FORM_EXAMPLE_POST];

/// Resolves a route name to its URL path (URL reversal)
///
/// Returns None when no route carries the given name.
pub fn path_for(name: &str) -> Option<&'static str> {
    NAMED_ROUTES
        .iter()
        .find(|route| route.name == name)
        .map(|route| route.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_known_routes() {
        assert_eq!(path_for("form_example_get"), Some("/users/form"));
        assert_eq!(path_for("form_example_post"), Some("/users/form"));
        assert_eq!(path_for("health"), Some("/health"));
    }

    #[test]
    fn test_path_for_unknown_route() {
        assert_eq!(path_for("no_such_route"), None);
    }

    #[test]
    fn test_route_names_are_unique() {
        for (i, a) in NAMED_ROUTES.iter().enumerate() {
            for b in &NAMED_ROUTES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate route name: {}", a.name);
            }
        }
    }
}
