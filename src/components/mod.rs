//! Shared site chrome components

mod footer;
mod header;
mod layout;

pub use footer::*;
pub use header::*;
pub use layout::*;
