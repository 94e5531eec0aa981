//! Element registry for description document parsing.
//!
//! Handlers are registered for the local names of the elements that may
//! appear under the document root. The engine walks the root's children
//! and dispatches each one to its handler, which records what it finds in
//! the shared `ParseContext`.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use config::create_osdd_registry;
pub use core::ElementRegistry;
pub use engine::ParseEngine;
pub use handler::ElementHandler;
pub use types::{ParseContext, UrlKind};
