//! Programs page component

use dioxus::prelude::*;

/// Programs page listing recurring workshop offerings
#[component]
pub fn Programs() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Programs" }
            p {
                class: "page-lede",
                "Recurring sessions led by shop stewards. Members join free; "
                "guests pay a small materials fee."
            }

            ul {
                class: "program-list",
                li {
                    class: "program",
                    h3 { "Monday joinery circle" }
                    p { "Hand-cut joints, sharpening, and finish work. All levels." }
                }
                li {
                    class: "program",
                    h3 { "Wednesday metal lab" }
                    p { "MIG welding and cold-metal fabrication with steward sign-off." }
                }
                li {
                    class: "program",
                    h3 { "Saturday repair caf\u{e9}" }
                    p { "Bring a broken thing. Leave with it working, or at least understood." }
                }
            }
        }
    }
}
