use dioxus::prelude::*;
use nexus_types::auth::Role;

use crate::app::auth::{use_session, Access};

/// Route guard: renders `children` only for a signed-in visitor holding
/// `required_role` (any role when `None`).
///
/// Anonymous visitors are sent to `/login`, signed-in visitors with another
/// role to `/unauthorized`. The decision is taken again on every render from
/// the current session, so signing out while a guarded page is open also
/// redirects.
///
/// ```text
/// RequireAuth { required_role: None, ProfilePage {} }
/// RequireAuth { required_role: Some(Role::Admin), AdminDashboardPage {} }
/// ```
#[component]
pub fn RequireAuth(
    /// Role the session must carry, `None` for any authenticated session
    #[props(!optional)]
    required_role: Option<Role>,

    /// Page content to show when authorized
    children: Element,
) -> Element {
    let session = use_session();
    let nav = navigator();

    use_effect(use_reactive((&required_role,), move |(required_role,)| {
        let access = Access::evaluate(&session.snapshot(), required_role);
        if let Some(target) = access.redirect() {
            tracing::info!(?access, ?required_role, %target, "route guard redirect");
            nav.replace(target);
        }
    }));

    if !Access::evaluate(&session.snapshot(), required_role).is_authorized() {
        return rsx! { div {} }; // Will redirect via effect
    }

    rsx! {
        {children}
    }
}
