use dioxus::prelude::*;

/// Horizontal tab strip. `active` and the `on_select` payload are indices
/// into `tabs`.
#[component]
pub fn TabBar(tabs: Vec<&'static str>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { role: "tablist", class: "tabs tabs-boxed mb-4",
            for (index, label) in tabs.into_iter().enumerate() {
                a {
                    key: "{label}",
                    role: "tab",
                    class: if index == active { "tab tab-active capitalize" } else { "tab capitalize" },
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}
