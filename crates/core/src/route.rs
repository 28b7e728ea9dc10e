//! Route descriptors and the static route table
//!
//! Routes are declared once at startup and never mutated. Metadata is a
//! tagged attribute set; `requires_auth` is the only flag the guard
//! recognizes today.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Named client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// Landing page with the login/register form
    Home,
    /// The chat interface
    Chat,
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Chat => write!(f, "Chat"),
        }
    }
}

/// Static annotations attached to a route, consulted by the guard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Whether the target is reachable only with a token present
    #[serde(default)]
    pub requires_auth: bool,
}

impl RouteMeta {
    /// Metadata marking a protected route
    pub fn protected() -> Self {
        Self {
            requires_auth: true,
        }
    }
}

/// A single entry of the navigable surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: RouteName,
    pub path: String,
    #[serde(default)]
    pub meta: RouteMeta,
}

impl Route {
    /// Create a route with default (unprotected) metadata
    pub fn new(name: RouteName, path: impl Into<String>) -> Self {
        Self {
            name,
            path: path.into(),
            meta: RouteMeta::default(),
        }
    }

    /// Attach metadata
    #[must_use]
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// Immutable lookup table over the declared routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate names or paths
    pub fn new(routes: Vec<Route>) -> CoreResult<Self> {
        for (i, route) in routes.iter().enumerate() {
            for other in &routes[..i] {
                if other.name == route.name {
                    return Err(CoreError::duplicate_name(route.name.to_string()));
                }
                if other.path == route.path {
                    return Err(CoreError::duplicate_path(&route.path));
                }
            }
        }
        Ok(Self { routes })
    }

    /// Look up a route by name
    pub fn by_name(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Look up a route by path
    pub fn by_path(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// All declared routes, in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
