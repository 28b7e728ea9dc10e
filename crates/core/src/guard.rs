//! The navigation guard decision
//!
//! A pure classification of navigation targets: protected targets without a
//! token are rewritten to `Home`, everything else proceeds. Only the
//! target's metadata participates; where the navigation came from is
//! irrelevant. Token *contents* are never inspected here — a present but
//! expired or garbage token passes the gate and is rejected, if at all, by
//! the server.

use crate::route::{RouteMeta, RouteName};

/// Outcome of evaluating a navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds to the requested route
    Allow,
    /// Navigation is rewritten to the named route
    Redirect(RouteName),
}

/// Classify a navigation target from its metadata and token presence
pub fn evaluate(meta: &RouteMeta, has_token: bool) -> GuardDecision {
    if meta.requires_auth && !has_token {
        GuardDecision::Redirect(RouteName::Home)
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_target_without_token_redirects_home() {
        let decision = evaluate(&RouteMeta::protected(), false);
        assert_eq!(decision, GuardDecision::Redirect(RouteName::Home));
    }

    #[test]
    fn protected_target_with_token_is_allowed() {
        assert_eq!(evaluate(&RouteMeta::protected(), true), GuardDecision::Allow);
    }

    #[test]
    fn unprotected_target_is_allowed_regardless_of_token() {
        let meta = RouteMeta::default();
        assert_eq!(evaluate(&meta, false), GuardDecision::Allow);
        assert_eq!(evaluate(&meta, true), GuardDecision::Allow);
    }
}
