use dioxus::prelude::*;

use crate::app::{
    self,
    auth::use_session_provider,
    config::WebConfig,
    storage::BrowserStorage,
};

/// Root shell: wraps the router and global providers.
#[component]
pub fn app_root() -> Element {
    use_context_provider(|| WebConfig::load(&BrowserStorage::local()));
    use_session_provider();

    rsx! {
        document::Title { "Nexus" }
        document::Stylesheet { href: asset!("/assets/nexus.css") }
        app::routes::AppRouter {}
    }
}
