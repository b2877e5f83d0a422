use dioxus::prelude::*;
use nexus_types::auth::Role;

use crate::app::auth::use_session;

/// Role-based conditional rendering for controls inside a page.
///
/// Shows children only when the session carries `role`; otherwise shows
/// `fallback` (or nothing). Use [`RequireAuth`](super::RequireAuth) to guard
/// whole pages.
#[component]
pub fn RoleGate(
    role: Role,

    fallback: Option<Element>,

    children: Element,
) -> Element {
    let session = use_session();
    let has_role = session.role() == Some(role);

    rsx! {
        if has_role {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
