//! Navigation state machine
//!
//! Per attempt: `evaluating -> {allowed, redirected}`, both terminal. The
//! decision consults only the target route's metadata and token presence;
//! where the navigation came from never matters.

use std::sync::Arc;

use arc_swap::ArcSwap;
use charla_core::{
    GuardDecision, Route, RouteMeta, RouteName, RouteTable, TokenStore, guard,
};
use tracing::debug;

use crate::error::RouterError;

/// The application's navigable surface
pub fn default_table() -> Result<RouteTable, RouterError> {
    let table = RouteTable::new(vec![
        Route::new(RouteName::Home, "/"),
        Route::new(RouteName::Chat, "/chat").with_meta(RouteMeta::protected()),
    ])?;
    Ok(table)
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigation proceeded to the requested route
    Allowed(RouteName),
    /// Navigation was rewritten to a different route
    Redirected {
        requested: RouteName,
        to: RouteName,
    },
}

impl NavigationOutcome {
    /// The route the application actually lands on
    pub fn destination(&self) -> RouteName {
        match self {
            Self::Allowed(name) => *name,
            Self::Redirected { to, .. } => *to,
        }
    }
}

/// Client-side router with a single global navigation guard
///
/// Owns the static route table and the current route. The token store is
/// read on every attempt, never written; login and logout belong to the
/// views.
pub struct Router {
    table: RouteTable,
    tokens: Arc<dyn TokenStore>,
    home: Arc<Route>,
    current: ArcSwap<Route>,
}

impl Router {
    /// Create a router over the given table, starting at Home
    ///
    /// The table must declare a `Home` route; it is the guard's redirect
    /// target.
    pub fn new(table: RouteTable, tokens: Arc<dyn TokenStore>) -> Result<Self, RouterError> {
        let home = table
            .by_name(RouteName::Home)
            .cloned()
            .map(Arc::new)
            .ok_or(RouterError::MissingHomeRoute)?;
        let current = ArcSwap::new(home.clone());
        Ok(Self {
            table,
            tokens,
            home,
            current,
        })
    }

    /// Create a router over the default two-route surface
    pub fn with_default_routes(tokens: Arc<dyn TokenStore>) -> Result<Self, RouterError> {
        Self::new(default_table()?, tokens)
    }

    /// The route currently rendered
    pub fn current(&self) -> Arc<Route> {
        self.current.load_full()
    }

    /// Run the guard for the initial page load
    ///
    /// The guard runs before the first render exactly as it does for any
    /// later navigation; deep-linking into a protected path with no token
    /// lands on Home.
    pub fn start_at(&self, path: &str) -> Result<NavigationOutcome, RouterError> {
        self.navigate_to_path(path)
    }

    /// Navigate to a route by name
    pub fn navigate(&self, target: RouteName) -> Result<NavigationOutcome, RouterError> {
        let route = self
            .table
            .by_name(target)
            .ok_or_else(|| RouterError::not_found(target.to_string()))?
            .clone();
        Ok(self.resolve(&route))
    }

    /// Navigate to a route by path
    pub fn navigate_to_path(&self, path: &str) -> Result<NavigationOutcome, RouterError> {
        let route = self
            .table
            .by_path(path)
            .ok_or_else(|| RouterError::not_found(path))?
            .clone();
        Ok(self.resolve(&route))
    }

    fn resolve(&self, target: &Route) -> NavigationOutcome {
        match guard::evaluate(&target.meta, self.tokens.has_token()) {
            GuardDecision::Allow => {
                debug!(route = %target.name, "navigation allowed");
                self.current.store(Arc::new(target.clone()));
                NavigationOutcome::Allowed(target.name)
            }
            GuardDecision::Redirect(to) => {
                debug!(requested = %target.name, redirect = %to, "navigation redirected");
                // The guard only ever redirects to Home, held since construction.
                self.current.store(self.home.clone());
                NavigationOutcome::Redirected {
                    requested: target.name,
                    to,
                }
            }
        }
    }
}
