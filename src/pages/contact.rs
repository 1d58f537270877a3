//! Contact page component

use dioxus::prelude::*;

/// Contact page with visiting details
#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Contact" }
            p {
                class: "page-lede",
                "The fastest way to reach the shop is to walk in during open hours."
            }

            dl {
                class: "contact-list",
                dt { "Address" }
                dd { "214 Granary Row, Unit B" }
                dt { "Open hours" }
                dd { "Tuesday through Sunday, 10:00 to 22:00" }
                dt { "Email" }
                dd {
                    a {
                        href: "mailto:hello@atriumworkshop.example",
                        "hello@atriumworkshop.example"
                    }
                }
            }
        }
    }
}
