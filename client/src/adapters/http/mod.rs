//! HTTP adapter
//!
//! reqwest implementation of the blog API ports.

pub mod client;

pub use client::HttpBlogClient;
