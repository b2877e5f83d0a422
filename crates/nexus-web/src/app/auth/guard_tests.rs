//! Unit tests for route access decisions.

use std::str::FromStr;

use super::*;
use crate::app::{auth::SessionStore, storage::MemoryStorage};

const PUBLIC: [&str; 4] = ["/", "/login", "/register", "/unauthorized"];
const MEMBER: [&str; 7] = [
    "/communities",
    "/community/c1",
    "/events",
    "/event/e1",
    "/event/e1/register",
    "/leaderboard",
    "/profile",
];
const ADMIN: [&str; 4] = [
    "/create-community",
    "/community/c1/create-event",
    "/event/e1/edit",
    "/admin/dashboard",
];

fn route(path: &str) -> Routes {
    Routes::from_str(path).unwrap_or_else(|_| panic!("{path} did not parse"))
}

fn session(role: Role) -> Session {
    Session::new("t1", Some(role), "u1")
}

/// Redirect issued when `session` navigates to `path`, `None` if it mounts.
fn navigate(session: &Session, path: &str) -> Option<Routes> {
    match route(path).access() {
        RouteAccess::Public => None,
        access => Access::evaluate(session, access.required_role()).redirect(),
    }
}

#[test]
fn test_route_table() {
    for path in PUBLIC {
        assert_eq!(route(path).access(), RouteAccess::Public, "{path}");
    }
    for path in MEMBER {
        assert_eq!(route(path).access(), RouteAccess::Authenticated, "{path}");
    }
    for path in ADMIN {
        assert_eq!(route(path).access(), RouteAccess::Role(Role::Admin), "{path}");
    }
    assert_eq!(route("/student/home").access(), RouteAccess::Role(Role::Student));
    assert_eq!(route("/no/such/page").access(), RouteAccess::Public);
}

#[test]
fn test_route_params_are_captured() {
    assert_eq!(route("/community/42/create-event"), Routes::CreateEventPage { id: "42".into() });
    assert_eq!(route("/event/7/register"), Routes::EventRegistrationPage { id: "7".into() });
    assert_eq!(route("/event/7/edit"), Routes::EditEventPage { id: "7".into() });
}

#[test]
fn test_unauthenticated_always_goes_to_login() {
    let anonymous = Session::anonymous();
    for path in MEMBER.iter().chain(ADMIN.iter()).chain(["/student/home"].iter()) {
        assert_eq!(navigate(&anonymous, path), Some(Routes::LoginPage {}), "{path}");
    }
}

#[test]
fn test_public_routes_never_redirect() {
    let anonymous = Session::anonymous();
    for path in PUBLIC {
        assert_eq!(navigate(&anonymous, path), None, "{path}");
    }
}

#[test]
fn test_non_admin_is_sent_to_unauthorized() {
    for role in [Role::User, Role::Student] {
        for path in ADMIN {
            assert_eq!(navigate(&session(role), path), Some(Routes::UnauthorizedPage {}), "{role} {path}");
        }
    }
}

#[test]
fn test_admin_reaches_admin_routes() {
    for path in ADMIN.iter().chain(MEMBER.iter()) {
        assert_eq!(navigate(&session(Role::Admin), path), None, "{path}");
    }
}

#[test]
fn test_student_home_requires_student() {
    assert_eq!(navigate(&session(Role::Student), "/student/home"), None);
    assert_eq!(
        navigate(&session(Role::Admin), "/student/home"),
        Some(Routes::UnauthorizedPage {})
    );
    assert_eq!(
        navigate(&session(Role::User), "/student/home"),
        Some(Routes::UnauthorizedPage {})
    );
}

#[test]
fn test_token_without_role_fails_role_checks_only() {
    let session = Session::new("t1", None, "u1");
    assert_eq!(navigate(&session, "/profile"), None);
    assert_eq!(navigate(&session, "/admin/dashboard"), Some(Routes::UnauthorizedPage {}));
}

#[test]
fn test_evaluate_states() {
    assert_eq!(Access::evaluate(&Session::anonymous(), None), Access::Unauthenticated);
    assert_eq!(
        Access::evaluate(&Session::anonymous(), Some(Role::Admin)),
        Access::Unauthenticated
    );
    assert_eq!(
        Access::evaluate(&session(Role::User), Some(Role::Admin)),
        Access::AuthenticatedWrongRole
    );
    assert_eq!(Access::evaluate(&session(Role::User), None), Access::Authorized);
    assert!(Access::evaluate(&session(Role::Admin), Some(Role::Admin)).is_authorized());
}

#[test]
fn test_scenario_anonymous_profile() {
    assert_eq!(navigate(&Session::anonymous(), "/profile"), Some(Routes::LoginPage {}));
}

#[test]
fn test_scenario_user_create_community() {
    let user = Session::new("t1", Some(Role::User), "u1");
    assert_eq!(navigate(&user, "/create-community"), Some(Routes::UnauthorizedPage {}));
}

#[test]
fn test_scenario_admin_dashboard() {
    let admin = Session::new("t1", Some(Role::Admin), "u1");
    assert_eq!(navigate(&admin, "/admin/dashboard"), None);
    assert_eq!(
        nexus_types::users::AdminTab::default(),
        nexus_types::users::AdminTab::Overview
    );
}

#[test]
fn test_scenario_clear_auth_on_profile() {
    let store = SessionStore::new(MemoryStorage::new());
    store.set_auth("t1", Some(Role::User), "u1");
    assert_eq!(navigate(&store.load(), "/profile"), None);

    store.clear_auth();
    for path in MEMBER.iter().chain(ADMIN.iter()) {
        assert_eq!(navigate(&store.load(), path), Some(Routes::LoginPage {}), "{path}");
    }
}

#[test]
fn test_decision_is_recomputed_each_time() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(Access::evaluate(&store.load(), None), Access::Unauthenticated);
    store.set_auth("t1", Some(Role::Admin), "u1");
    assert_eq!(Access::evaluate(&store.load(), Some(Role::Admin)), Access::Authorized);
    store.set_auth("t2", Some(Role::User), "u2");
    assert_eq!(
        Access::evaluate(&store.load(), Some(Role::Admin)),
        Access::AuthenticatedWrongRole
    );
}
