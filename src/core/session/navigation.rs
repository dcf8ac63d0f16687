//! Navigation capability used by the notifier

/// Path of the login entry point
pub const LOGIN_PATH: &str = "/login";

/// Router access the notifier needs: where we are and how to move
pub trait Navigator {
    fn current_path(&self) -> String;
    fn navigate_to(&self, path: &str);
}

/// Compare two paths ignoring a trailing slash and any query or fragment
pub fn same_path(a: &str, b: &str) -> bool {
    fn normalize(path: &str) -> &str {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        }
    }
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path() {
        assert!(same_path("/login", "/login"));
        assert!(same_path("/login/", "/login"));
        assert!(same_path("/login?next=/feed", "/login"));
        assert!(same_path("/login#form", "/login"));
        assert!(same_path("/", ""));
        assert!(!same_path("/login/help", "/login"));
        assert!(!same_path("/feed", "/login"));
    }
}
