//! History-mode navigation over the site's route table.
//!
//! A [`NavigationManager`] is built once at startup and handed to the app
//! root; it never changes afterwards. Locations are plain history-API paths
//! under an optional base path, never fragment addresses.

use crate::{
    error::ConfigError,
    routes::{build_routes, RouteEntry, RouteTable},
};

/// A route entry together with the full href it is mounted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    pub href: String,
    pub entry: RouteEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationManager {
    base_path: String,
    table: RouteTable,
    routes: Vec<MountedRoute>,
}

fn validate_base_path(base_path: &str) -> Result<(), ConfigError> {
    if base_path.is_empty() {
        return Ok(());
    }
    if !base_path.starts_with('/') {
        return Err(ConfigError::RelativeBasePath(base_path.to_string()));
    }
    let forbidden = |c: char| {
        matches!(c, '?' | '#') || !c.is_ascii() || c.is_ascii_whitespace() || c.is_ascii_control()
    };
    if base_path.starts_with("//")
        || base_path.chars().any(forbidden)
        || !has_valid_escapes(base_path)
    {
        return Err(ConfigError::InvalidBasePath(base_path.to_string()));
    }
    Ok(())
}

/// Every `%` must introduce two hex digits.
fn has_valid_escapes(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.iter().enumerate().all(|(i, byte)| {
        *byte != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

impl NavigationManager {
    pub fn new(base_path: &str, table: RouteTable) -> Result<Self, ConfigError> {
        validate_base_path(base_path)?;
        table.validate()?;
        let mut manager = NavigationManager {
            base_path: base_path.to_string(),
            table,
            routes: vec![],
        };
        manager.routes = manager
            .table
            .entries()
            .iter()
            .map(|entry| MountedRoute {
                href: manager.href(entry.path),
                entry: *entry,
            })
            .collect();
        Ok(manager)
    }

    /// Base path exactly as configured.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn routes(&self) -> &[MountedRoute] {
        &self.routes
    }

    fn base_prefix(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    /// Browser path for a route path. Home under a base is the base itself.
    pub fn href(&self, path: &str) -> String {
        match (self.base_prefix(), path) {
            ("", _) => path.to_string(),
            (base, "/") => base.to_string(),
            (base, _) => format!("{base}{path}"),
        }
    }

    /// Maps a browser location onto a route entry, ignoring query and fragment.
    /// One trailing slash is tolerated, as the installed router does.
    pub fn resolve(&self, location: &str) -> Option<&RouteEntry> {
        let path = location
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let base = self.base_prefix();
        let path = if base.is_empty() {
            path
        } else {
            match path.strip_prefix(base) {
                Some("") => "/",
                Some(rest) if rest.starts_with('/') => rest,
                _ => {
                    log::debug!("{location} is outside base path {:?}", self.base_path);
                    return None;
                }
            }
        };
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let entry = self.table.resolve(path);
        if entry.is_none() {
            log::debug!("No route for {location}");
        }
        entry
    }
}

pub fn create_navigation_manager(base_path: &str) -> Result<NavigationManager, ConfigError> {
    let manager = NavigationManager::new(base_path, build_routes())?;
    log::info!(
        "Navigation manager ready: base path {:?}, {} routes",
        manager.base_path(),
        manager.table().len()
    );
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Page;

    #[test]
    fn base_path_is_recorded_verbatim() {
        for base in ["", "/app", "/app/", "/"] {
            let manager = create_navigation_manager(base).unwrap();
            assert_eq!(manager.base_path(), base);
            assert_eq!(manager.table(), &build_routes());
        }
    }

    #[test]
    fn resolves_without_base() {
        let manager = create_navigation_manager("").unwrap();
        assert_eq!(manager.resolve("/about").map(|entry| entry.view), Some(Page::About));
        assert_eq!(manager.resolve("/").map(|entry| entry.view), Some(Page::Home));
        assert_eq!(
            manager.resolve("/contact?from=footer#form").map(|entry| entry.view),
            Some(Page::Contact)
        );
        assert!(manager.resolve("/xyz").is_none());
    }

    #[test]
    fn resolves_under_base() {
        let manager = create_navigation_manager("/app").unwrap();
        assert_eq!(manager.resolve("/app").map(|entry| entry.view), Some(Page::Home));
        assert_eq!(manager.resolve("/app/").map(|entry| entry.view), Some(Page::Home));
        assert_eq!(manager.resolve("/app/about").map(|entry| entry.view), Some(Page::About));
        assert!(manager.resolve("/about").is_none());
        assert!(manager.resolve("/application").is_none());
        assert!(manager.resolve("/app/xyz").is_none());
    }

    #[test]
    fn trailing_slash_matches_like_the_router() {
        let plain = create_navigation_manager("").unwrap();
        assert_eq!(plain.resolve("/about/").map(|entry| entry.view), Some(Page::About));
        assert_eq!(plain.resolve("/contact/?x=1").map(|entry| entry.view), Some(Page::Contact));
        assert!(plain.resolve("/about//").is_none());

        let nested = create_navigation_manager("/app").unwrap();
        assert_eq!(nested.resolve("/app/about/").map(|entry| entry.view), Some(Page::About));
        assert_eq!(nested.resolve("/app/").map(|entry| entry.view), Some(Page::Home));

        assert!(build_routes().resolve("/about/").is_none());
    }

    #[test]
    fn hrefs_join_base_and_path() {
        let plain = create_navigation_manager("").unwrap();
        assert_eq!(plain.href("/"), "/");
        assert_eq!(plain.href("/about"), "/about");

        let nested = create_navigation_manager("/app/").unwrap();
        assert_eq!(nested.href("/"), "/app");
        assert_eq!(nested.href("/contact"), "/app/contact");

        let hrefs: Vec<_> = nested.routes().iter().map(|route| route.href.as_str()).collect();
        assert_eq!(hrefs, ["/app", "/app/about", "/app/contact"]);
    }

    #[test]
    fn malformed_base_paths_fail_fast() {
        assert_eq!(
            create_navigation_manager("app").unwrap_err(),
            ConfigError::RelativeBasePath("app".to_string())
        );
        for base in [
            "//cdn.example.com",
            "/app?x=1",
            "/app#top",
            "/my app",
            "/café",
            "/a%zz",
            "/a%2",
        ] {
            assert_eq!(
                create_navigation_manager(base).unwrap_err(),
                ConfigError::InvalidBasePath(base.to_string())
            );
        }
    }

    #[test]
    fn percent_escaped_base_is_accepted() {
        let manager = create_navigation_manager("/my%20app").unwrap();
        assert_eq!(manager.href("/about"), "/my%20app/about");
        assert_eq!(
            manager.resolve("/my%20app/contact").map(|entry| entry.view),
            Some(Page::Contact)
        );
    }

    #[test]
    fn custom_tables_are_validated() {
        let table = vec![
            RouteEntry {
                path: "/",
                view: Page::Home,
            },
            RouteEntry {
                path: "/",
                view: Page::About,
            },
        ];
        let err = RouteTable::new(table).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRoutePath("/".to_string()));
    }
}
