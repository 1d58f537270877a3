//! Menu open/close state shared across the site chrome.

use dioxus::prelude::*;

/// One of the site's dropdown menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    Desktop,
    Mobile,
}

impl MenuKind {
    /// Class of the anchor that opens and closes this menu.
    pub fn trigger_class(self) -> &'static str {
        match self {
            MenuKind::Desktop => "dropdown-desktop",
            MenuKind::Mobile => "dropdown-mobile",
        }
    }

    /// Class list of the menu container, carrying the `open` marker while
    /// the menu is visible. Visibility itself lives in the stylesheet.
    pub fn menu_class(self, open: bool) -> &'static str {
        match (self, open) {
            (MenuKind::Desktop, false) => "menu desktop",
            (MenuKind::Desktop, true) => "menu desktop open",
            (MenuKind::Mobile, false) => "menu mobile",
            (MenuKind::Mobile, true) => "menu mobile open",
        }
    }
}

/// Which menus are currently open.
///
/// Menus toggle independently - opening one never closes the other. The
/// only cross-menu operation is `close_all`, used by the document-level
/// closer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSet {
    desktop: bool,
    mobile: bool,
}

impl MenuSet {
    /// Invert the open marker of one menu.
    pub fn toggle(&mut self, kind: MenuKind) {
        let flag = self.flag(kind);
        *flag = !*flag;
    }

    /// Remove the open marker from every menu.
    pub fn close_all(&mut self) {
        self.desktop = false;
        self.mobile = false;
    }

    pub fn is_open(&self, kind: MenuKind) -> bool {
        match kind {
            MenuKind::Desktop => self.desktop,
            MenuKind::Mobile => self.mobile,
        }
    }

    pub fn any_open(&self) -> bool {
        self.desktop || self.mobile
    }

    fn flag(&mut self, kind: MenuKind) -> &mut bool {
        match kind {
            MenuKind::Desktop => &mut self.desktop,
            MenuKind::Mobile => &mut self.mobile,
        }
    }
}

/// Signal-backed menu state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct MenuState {
    menus: Signal<MenuSet>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            menus: Signal::new(MenuSet::default()),
        }
    }

    /// State with one menu already open. Used by the rendering tests.
    #[cfg(test)]
    pub fn with_open(kind: MenuKind) -> Self {
        let mut menus = MenuSet::default();
        menus.toggle(kind);
        Self {
            menus: Signal::new(menus),
        }
    }

    /// Invert the open marker of one menu.
    pub fn toggle(&self, kind: MenuKind) {
        let mut menus = self.menus;
        menus.write().toggle(kind);
        tracing::debug!("menu {:?} toggled, open: {}", kind, menus.peek().is_open(kind));
    }

    /// Close every menu. Skips the write when nothing is open, so document
    /// clicks on an idle page do not dirty subscribers.
    pub fn close_all(&self) {
        let mut menus = self.menus;
        if menus.peek().any_open() {
            menus.write().close_all();
            tracing::debug!("all menus closed");
        }
    }

    pub fn is_open(&self, kind: MenuKind) -> bool {
        self.menus.read().is_open(kind)
    }
}

/// Hook to access the menu state provided at the app root.
pub fn use_menus() -> MenuState {
    use_context::<MenuState>()
}
