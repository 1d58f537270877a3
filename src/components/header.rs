//! Site header with the dropdown navigation menus.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_menus, MenuKind};

/// Site header: brand, primary navigation, and the two dropdown menus.
///
/// The desktop dropdown collects the secondary pages; the mobile dropdown is
/// the hamburger menu carrying the whole navigation. Triggers keep an inert
/// `href="#"`, so their handler suppresses the default jump and stops the
/// click before the document-level closer sees it.
#[component]
pub fn SiteHeader() -> Element {
    let menus = use_menus();

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",

                // Brand
                Link {
                    to: Route::Home {},
                    class: "brand",
                    "Atrium Workshop"
                }

                // Primary links and the desktop dropdown
                nav {
                    class: "nav-desktop",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Programs {}, label: "Programs" }

                    div {
                        class: "dropdown",
                        a {
                            class: MenuKind::Desktop.trigger_class(),
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                event.stop_propagation();
                                menus.toggle(MenuKind::Desktop);
                            },
                            "More \u{25BE}"
                        }
                        div {
                            class: MenuKind::Desktop.menu_class(menus.is_open(MenuKind::Desktop)),
                            // Clicks inside the menu stay inside it.
                            onclick: move |event| event.stop_propagation(),
                            MenuLink { to: Route::About {}, label: "About" }
                            MenuLink { to: Route::Contact {}, label: "Contact" }
                        }
                    }
                }

                // Mobile hamburger and its dropdown
                div {
                    class: "dropdown nav-mobile",
                    a {
                        class: MenuKind::Mobile.trigger_class(),
                        href: "#",
                        aria_label: "Menu",
                        onclick: move |event| {
                            event.prevent_default();
                            event.stop_propagation();
                            menus.toggle(MenuKind::Mobile);
                        },
                        "\u{2630}"
                    }
                    div {
                        class: MenuKind::Mobile.menu_class(menus.is_open(MenuKind::Mobile)),
                        onclick: move |event| event.stop_propagation(),
                        MenuLink { to: Route::Home {}, label: "Home" }
                        MenuLink { to: Route::Programs {}, label: "Programs" }
                        MenuLink { to: Route::About {}, label: "About" }
                        MenuLink { to: Route::Contact {}, label: "Contact" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

/// Primary navigation link with active-route styling.
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active { "nav-link active" } else { "nav-link" },
            "{props.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MenuLinkProps {
    to: Route,
    label: &'static str,
}

/// Dropdown menu item. Picking one navigates and closes every open menu,
/// so the menu never lingers over the next page.
#[component]
fn MenuLink(props: MenuLinkProps) -> Element {
    let menus = use_menus();

    rsx! {
        Link {
            to: props.to.clone(),
            class: "menu-item",
            onclick: move |_| menus.close_all(),
            "{props.label}"
        }
    }
}
