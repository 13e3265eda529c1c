//! Dashboard controller
//!
//! Owns the authoritative folder and record lists, the current folder
//! selection and the search term. User intent arrives as a fixed set of
//! [`DashboardAction`]s; mutating actions go to the [`Collaborator`] and are
//! followed by a full reload. Every render reads a [`DashboardView`] built
//! from the engine's pure functions.
//!
//! [`Collaborator`]: crate::collaborator::Collaborator

mod actions;
mod controller;
mod error;
mod view;

pub use actions::{ActionOutcome, DashboardAction};
pub use controller::DashboardController;
pub use error::DashboardError;
pub use view::{DashboardView, folder_label, page_title};
