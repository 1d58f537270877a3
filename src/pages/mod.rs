//! Routed pages

mod about;
mod contact;
mod home;
mod not_found;
mod programs;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use not_found::*;
pub use programs::*;
