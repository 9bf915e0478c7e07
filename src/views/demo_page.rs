use dioxus::prelude::*;

use crate::configs::ThemeToggleConfig;
use crate::mount_theme_toggle;

/// Stand-in for a Swagger UI page: same topbar structure, static content.
#[component]
pub fn DemoPage() -> Element {
    use_effect(move || {
        // Runs after the first render, so the topbar wrapper is in the DOM.
        if let Err(e) = mount_theme_toggle(ThemeToggleConfig::default()) {
            log::error!("Failed to mount theme toggle: {}", e);
        }
    });

    rsx! {
        div { class: "swagger-ui",
            div { class: "topbar",
                div { class: "wrapper",
                    span { class: "topbar-title", "Swagger UI" }
                }
            }
            div { class: "information-container wrapper",
                h2 { class: "title", "Passport API" }
                p { class: "description",
                    "Account, role and permission endpoints. Use the toggle in the top bar to switch themes."
                }
            }
            div { class: "opblock-tag-section",
                h3 { class: "opblock-tag", "auth-controller" }
                div { class: "opblock opblock-post",
                    span { class: "opblock-summary-method", "POST" }
                    span { class: "opblock-summary-path", "/api/auth/login" }
                }
                div { class: "opblock opblock-get",
                    span { class: "opblock-summary-method", "GET" }
                    span { class: "opblock-summary-path", "/api/users/me" }
                }
            }
        }
    }
}
