//! About page component

use dioxus::prelude::*;

/// About page with the workshop's story
#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "About the workshop" }
            p {
                class: "page-lede",
                "Atrium started in 2019 as four benches in a rented garage. "
                "Today it is a member-run shop in the old granary on Granary Row."
            }
            p {
                "The shop is governed by its members. Stewards keep the machines "
                "tuned, teach inductions, and decide together what the shop buys "
                "next. Surplus from memberships goes straight back into tooling."
            }
            p {
                "We keep the floor accessible: step-free entry, adjustable-height "
                "benches, and loaner hearing and eye protection at the door."
            }
        }
    }
}
