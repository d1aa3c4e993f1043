//! View model for the astronaut list of the spaceship admin.
//!
//! The controller owns two [`Store`]s: the fetched astronaut list and the
//! currently selected planet. [`render`] turns them into a [`View`], and
//! deletions go through [`PendingDelete`], which removes the astronaut locally
//! before the remote call and restores the list if that call fails.

mod client;
mod controller;
mod delete;
mod error;
mod list;
mod notify;
mod store;

pub use client::*;
pub use controller::*;
pub use delete::*;
pub use error::*;
pub use list::*;
pub use notify::*;
pub use store::*;
