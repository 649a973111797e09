//! Configurable college-football power rankings: fetch ratings from the rating
//! service, derive search-stable ranks, and share views as links.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod services;
