//! Fallback page for unmatched routes

use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all page shown when no route matches
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            class: "page",
            h1 { "Page not found" }
            p {
                class: "page-lede",
                "Nothing lives at /{path}."
            }
            p {
                Link {
                    to: Route::Home {},
                    class: "cta",
                    "Back to the shop floor"
                }
            }
        }
    }
}
