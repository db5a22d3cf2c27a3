//! TUI screens

mod form;
mod summary;

pub use form::FormScreen;
pub use summary::SummaryScreen;
