//! Home page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Home page - the workshop's front door
#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "page hero",
            h1 { "Make things here." }
            p {
                class: "hero-lede",
                "Atrium Workshop is a shared shop floor: woodworking benches, "
                "a metal corner, textiles, and electronics, open to members "
                "six days a week."
            }
            div {
                class: "hero-actions",
                Link {
                    to: Route::Programs {},
                    class: "cta",
                    "Browse programs"
                }
                Link {
                    to: Route::Contact {},
                    class: "cta cta-secondary",
                    "Plan a visit"
                }
            }
        }

        section {
            class: "page",
            div {
                class: "card-grid",
                div {
                    class: "card",
                    h3 { "Tool library" }
                    p { "Borrow from several hundred hand and power tools with any membership." }
                }
                div {
                    class: "card",
                    h3 { "Open benches" }
                    p { "Reserve a bench by the hour, or drop in on weekday evenings." }
                }
                div {
                    class: "card",
                    h3 { "Classes" }
                    p { "Shop-safety inductions and short courses run every month." }
                }
            }
        }
    }
}
