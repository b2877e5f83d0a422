//! Route access decisions.
//!
//! These checks only decide what the browser renders. The stored role is not
//! signed and is not re-validated here; the API authorizes every request on
//! its own.

use nexus_types::auth::{Role, Session};

use crate::app::routes::Routes;

/// What a route demands of the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Role(Role),
}

impl RouteAccess {
    /// Role argument for the guard, `None` when any signed-in visitor may
    /// enter. Public routes are never guarded.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            RouteAccess::Role(role) => Some(*role),
            RouteAccess::Public | RouteAccess::Authenticated => None,
        }
    }
}

/// Outcome of a single navigation attempt to a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Unauthenticated,
    AuthenticatedWrongRole,
    Authorized,
}

impl Access {
    /// Decide from a session snapshot. Nothing is remembered between calls.
    pub fn evaluate(session: &Session, required_role: Option<Role>) -> Self {
        if !session.is_authenticated() {
            return Access::Unauthenticated;
        }
        match required_role {
            Some(required) if session.role() != Some(required) => Access::AuthenticatedWrongRole,
            _ => Access::Authorized,
        }
    }

    /// Where the visitor is sent instead of the page, if anywhere.
    pub fn redirect(&self) -> Option<Routes> {
        match self {
            Access::Unauthenticated => Some(Routes::LoginPage {}),
            Access::AuthenticatedWrongRole => Some(Routes::UnauthorizedPage {}),
            Access::Authorized => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Access::Authorized)
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
