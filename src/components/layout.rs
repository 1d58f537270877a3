//! Shared page layout: the common sections around every routed page.

use dioxus::prelude::*;

use super::{SiteFooter, SiteHeader};
use crate::routes::Route;

/// Clicks whose target sits under any of these never reach the closer.
#[cfg(feature = "web")]
const MENU_SELECTOR: &str = "div.menu, a.dropdown-desktop, a.dropdown-mobile";

/// Layout wrapping every route: header, routed content, footer, plus the
/// document-level listeners that close open menus.
#[component]
pub fn SiteLayout() -> Element {
    // Close menus when a click lands outside them, and on Escape. The
    // listener handles live in component state: unmounting the layout drops
    // them, which removes the bindings.
    #[cfg(feature = "web")]
    {
        use crate::state::use_menus;
        use gloo_events::EventListener;

        let menus = use_menus();
        let mut listeners = use_signal(Vec::<EventListener>::new);

        use_effect(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let close_on_click = EventListener::new(&document, "click", move |event| {
                if !clicked_inside_menu(event) {
                    menus.close_all();
                }
            });

            let close_on_escape = EventListener::new(&document, "keydown", move |event| {
                use wasm_bindgen::JsCast;

                if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    if key_event.key() == "Escape" {
                        menus.close_all();
                    }
                }
            });

            listeners.set(vec![close_on_click, close_on_escape]);
        });
    }

    rsx! {
        div {
            class: "site",

            SiteHeader {}

            main {
                class: "site-main",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

/// True when the click target is inside a menu container or on a dropdown
/// trigger. The framework delegates events, so a synthetic handler stopping
/// propagation is not guaranteed to stop the native event before it reaches
/// the document; the closer checks containment instead of relying on it.
#[cfg(feature = "web")]
fn clicked_inside_menu(event: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return false;
    };

    target.closest(MENU_SELECTOR).ok().flatten().is_some()
}
