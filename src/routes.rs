use std::collections::HashSet;

use crate::error::ConfigError;

/// Page-level views that can be mounted at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    /// Name of the component that renders this page.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "HomePage",
            Page::About => "AboutUs",
            Page::Contact => "ContactPage",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About us",
            Page::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: Page,
}

const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        view: Page::Home,
    },
    RouteEntry {
        path: "/about",
        view: Page::About,
    },
    RouteEntry {
        path: "/contact",
        view: Page::Contact,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable(Vec<RouteEntry>);

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, ConfigError> {
        let table = RouteTable(entries);
        table.validate()?;
        Ok(table)
    }

    /// Checks that every path is absolute and declared only once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.0 {
            if !entry.path.starts_with('/') {
                return Err(ConfigError::InvalidRoutePath(entry.path.to_string()));
            }
            if !seen.insert(entry.path) {
                return Err(ConfigError::DuplicateRoutePath(entry.path.to_string()));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact lookup; paths are literal so the first match is the only match.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.0.iter().find(|entry| entry.path == path)
    }
}

pub fn build_routes() -> RouteTable {
    RouteTable(ROUTES.to_vec())
}
