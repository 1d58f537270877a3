//! Site footer section.

use dioxus::prelude::*;

/// Shared footer
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "site-footer-inner",
                h2 { "Atrium Workshop" }
                p {
                    "A member-run community workshop: shared tools, open benches, "
                    "and people who like making things."
                }
                p {
                    class: "site-footer-fineprint",
                    "Open Tuesday through Sunday \u{00B7} 214 Granary Row"
                }
            }
        }
    }
}
