//! Domain ports (traits)
//!
//! Port traits define the slice of the blog API the application uses.
//! The HTTP adapter implements them; tests use in-memory versions.

pub mod accounts;
pub mod content;

pub use accounts::AccountApi;
pub use content::ContentApi;
