//! Atrium Community Workshop - Dioxus web frontend
//!
//! Serves the public site: the shared header with its dropdown navigation
//! menus, the footer, and the routed pages between them.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod state;

// Rendered-markup tests (test-only)
#[cfg(test)]
mod render_tests;

use tracing::Level;

fn main() {
    // Initialize logging
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!("launching atrium-web");

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
