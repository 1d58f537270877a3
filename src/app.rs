//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::MenuState;

/// Root application component
#[component]
pub fn App() -> Element {
    // Menu state is shared by the header triggers and the document-level
    // closer, so it is provided above the router.
    use_context_provider(MenuState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
