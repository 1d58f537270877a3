//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{About, Contact, Home, NotFound, Programs};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/programs")]
        Programs {},

        #[route("/about")]
        About {},

        #[route("/contact")]
        Contact {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
