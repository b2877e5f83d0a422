use dioxus::prelude::*;

use crate::app::logging::{get_log_level, level_name, parse_level, set_log_level};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[component]
pub fn Footer() -> Element {
    let mut level = use_signal(|| level_name(get_log_level()));

    rsx! {
        footer { class: "footer footer-center text-base-content p-4",
            aside {
                p { "Nexus · communities and events for your campus" }
            }
            label { class: "flex items-center gap-2 text-xs opacity-60",
                "Console log level"
                select {
                    class: "select select-ghost select-xs",
                    value: "{level}",
                    onchange: move |evt| {
                        if let Some(filter) = parse_level(&evt.value()) {
                            set_log_level(filter);
                            level.set(level_name(filter));
                        }
                    },
                    for name in LEVELS {
                        option { value: name, selected: level() == name, "{name}" }
                    }
                }
            }
        }
    }
}
