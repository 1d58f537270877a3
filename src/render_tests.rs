//! Rendered-markup tests for the site chrome.
//!
//! These tests build a virtual dom headlessly and assert on the HTML it
//! produces: triggers and menu containers are always present, and the
//! `open` marker tracks the menu state the root provides.

#[cfg(test)]
mod render_tests {
    use dioxus::prelude::*;

    use crate::app::App;
    use crate::routes::Route;
    use crate::state::{MenuKind, MenuState};

    /// Render a root component to its initial HTML.
    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// App root with the desktop dropdown already open. Mirrors `App`,
    /// providing menu state above the router.
    #[component]
    fn DesktopOpenApp() -> Element {
        use_context_provider(|| MenuState::with_open(MenuKind::Desktop));

        rsx! {
            Router::<Route> {}
        }
    }

    /// App root with the mobile dropdown already open.
    #[component]
    fn MobileOpenApp() -> Element {
        use_context_provider(|| MenuState::with_open(MenuKind::Mobile));

        rsx! {
            Router::<Route> {}
        }
    }

    #[test]
    fn home_renders_inside_site_chrome() {
        let html = render(App);

        assert!(html.contains("site-header"));
        assert!(html.contains("Atrium Workshop"));
        assert!(html.contains("Make things here."));
        assert!(html.contains("site-footer"));
    }

    #[test]
    fn menus_render_closed_by_default() {
        let html = render(App);

        assert!(html.contains("dropdown-desktop"));
        assert!(html.contains("dropdown-mobile"));
        assert!(html.contains("menu desktop"));
        assert!(html.contains("menu mobile"));
        assert!(!html.contains("menu desktop open"));
        assert!(!html.contains("menu mobile open"));
    }

    #[test]
    fn closed_menus_keep_their_links_in_the_markup() {
        // Closed menus are hidden by the stylesheet, not unmounted, so
        // their links stay present in the document.
        let html = render(App);

        assert!(html.contains("href=\"/programs\""));
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains("href=\"/contact\""));
        assert_eq!(html.matches("menu-item").count(), 6);
    }

    #[test]
    fn open_desktop_menu_marks_only_the_desktop_menu() {
        let html = render(DesktopOpenApp);

        assert!(html.contains("menu desktop open"));
        assert!(!html.contains("menu mobile open"));
    }

    #[test]
    fn open_mobile_menu_marks_only_the_mobile_menu() {
        let html = render(MobileOpenApp);

        assert!(html.contains("menu mobile open"));
        assert!(!html.contains("menu desktop open"));
    }

    #[test]
    fn hamburger_trigger_is_labelled() {
        let html = render(App);

        assert!(html.contains("aria-label=\"Menu\""));
    }
}
