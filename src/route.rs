//! Application routes.

use std::fmt;

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Item gallery (`/`)
    #[default]
    Gallery,
    /// Add-item form (`/add`)
    AddItem,
}

impl Route {
    /// All routes in navigation bar order.
    pub fn all() -> &'static [Route] {
        &[Route::Gallery, Route::AddItem]
    }

    /// URL path of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Gallery => "/",
            Route::AddItem => "/add",
        }
    }

    /// Parse a URL path. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(trimmed);
        match trimmed {
            "/" | "" => Some(Route::Gallery),
            "/add" => Some(Route::AddItem),
            _ => None,
        }
    }

    /// Navigation bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Gallery => "View Items",
            Route::AddItem => "Add Items",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roundtrip() {
        for route in [Route::Gallery, Route::AddItem] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_nav_labels() {
        let labels: Vec<&str> = Route::all().iter().map(Route::label).collect();
        assert_eq!(labels, ["View Items", "Add Items"]);
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(Route::from_path(""), Some(Route::Gallery));
        assert_eq!(Route::from_path("/add/"), Some(Route::AddItem));
        assert_eq!(Route::from_path("/edit"), None);
    }
}
