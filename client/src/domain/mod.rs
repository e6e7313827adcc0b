//! Domain layer
//!
//! Contains the blog's data contracts and the ports the application needs.
//! - `entities`: records exchanged with the blog API and derived view models
//! - `ports`: Trait definitions for the remote API

pub mod entities;
pub mod ports;
